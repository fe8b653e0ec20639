//! Sandbox Sim - headless build/fight run
//!
//! Run with: `cargo run --bin sandbox_sim -- --ticks 600`
//!
//! Drives the simulation through the fixed-step loop with a scripted
//! player: walk forward, enter build mode, put down a few pieces, leave
//! build mode and shoot them down again. Frames go to a sink that logs a
//! one-line summary instead of drawing.
//!
//! Options:
//! - `--config <PATH>`: JSON config; missing fields keep their defaults
//! - `--ticks <N>`: number of simulation ticks to run
//! - `--log-every <N>`: log every Nth rendered frame
//! - `--dump-config`: print the effective config as JSON and exit
//!
//! Set `RUST_LOG=debug` to see individual placements and hits.

use std::path::PathBuf;

use buildfight_engine::game::{
    FixedStepLoop, FrameSink, ProjectileEvent, RenderFrame, SimConfig, Simulation, TickReport,
};
use buildfight_engine::input::{InputAction, MovementKey, TickInput};
use clap::Parser;

/// Headless build/fight sandbox
#[derive(Parser)]
#[command(version, about = "Runs the build/fight simulation without a window")]
struct Cli {
    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Log every Nth rendered frame (0 disables frame logging)
    #[arg(long, default_value_t = 60)]
    log_every: u64,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// Sink that logs a summary of every Nth frame.
struct LogSink {
    every: u64,
    frames: u64,
    instances_uploaded: usize,
}

impl FrameSink for LogSink {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        self.instances_uploaded += frame.structure_instances().len();
        if self.every == 0 || self.frames % self.every != 0 {
            return;
        }
        let p = frame.actor.position;
        log::info!(
            "[Frame {}] tick {} actor ({:.2}, {:.2}, {:.2}) {} | structures {} | projectiles {} | ghost {} {}",
            self.frames,
            frame.tick,
            p.x,
            p.y,
            p.z,
            if frame.actor.grounded { "grounded" } else { "airborne" },
            frame.structures.len(),
            frame.projectiles.len(),
            frame.ghost.kind,
            if frame.ghost.visible { "shown" } else { "hidden" },
        );
    }
}

/// Scripted input for tick `n`.
fn scripted_input(n: u64, input: &mut TickInput) {
    match n {
        // Walk forward for a second, with a hop in the middle
        0 => input.apply(InputAction::Movement(MovementKey::Forward, true)),
        30 => input.apply(InputAction::Jump),
        60 => input.apply(InputAction::Movement(MovementKey::Forward, false)),
        // Build mode: look down a little so the aim ray meets the ground
        70 => {
            input.apply(InputAction::Look(0.0, 160.0));
            input.apply(InputAction::ToggleBuildMode);
        }
        80 => input.apply(InputAction::Primary),
        90 => {
            input.apply(InputAction::SelectArchetype(2));
            input.apply(InputAction::RotateGhost);
        }
        100 => input.apply(InputAction::Primary),
        110 => input.apply(InputAction::SelectArchetype(3)),
        120 => input.apply(InputAction::Primary),
        // Duplicate placement on the same tile is refused
        130 => input.apply(InputAction::Primary),
        // Back to play mode and shoot at what was built
        140 => input.apply(InputAction::ToggleBuildMode),
        n if (150..300).contains(&n) && n % 15 == 0 => input.apply(InputAction::Primary),
        // Strafe around for the rest of the run
        300 => input.apply(InputAction::Movement(MovementKey::Right, true)),
        n if n > 300 && n % 40 == 0 => input.apply(InputAction::Look(25.0, 0.0)),
        _ => {}
    }
}

#[derive(Default)]
struct RunStats {
    placed: usize,
    fired: usize,
    destroyed: usize,
    expired: usize,
    jumps: usize,
}

impl RunStats {
    fn record(&mut self, report: &TickReport) {
        self.placed += usize::from(report.placed.is_some());
        self.fired += usize::from(report.fired);
        self.jumps += usize::from(report.jumped);
        for event in &report.projectile_events {
            match event {
                ProjectileEvent::Expired { .. } => self.expired += 1,
                ProjectileEvent::StructureDestroyed { .. } => self.destroyed += 1,
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Error loading {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    if cli.dump_config {
        match config.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut sim = match Simulation::try_new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mut fixed = FixedStepLoop::from_config(sim.config());
    let mut sink = LogSink {
        every: cli.log_every,
        frames: 0,
        instances_uploaded: 0,
    };

    log::info!(
        "Running {} ticks at {} Hz",
        cli.ticks,
        sim.config().tick_rate_hz
    );

    let frame_dt = fixed.step_seconds;
    let mut input = TickInput::new();
    let mut stats = RunStats::default();
    let mut scripted_up_to = 0;

    while sim.tick_count() < cli.ticks {
        // Queue the script for the tick about to run; edges left over from a
        // frame that ran no tick carry into the next one
        while scripted_up_to <= sim.tick_count() {
            scripted_input(scripted_up_to, &mut input);
            scripted_up_to += 1;
        }

        let reports = fixed.advance(frame_dt, &input, &mut sim, &mut sink);
        if !reports.is_empty() {
            input.clear_edges();
        }
        for report in &reports {
            stats.record(report);
        }
    }

    log::info!(
        "Done: {} ticks, {} frames, placed {}, fired {}, destroyed {}, expired {}, jumps {}, {} structures left, {} instances uploaded",
        sim.tick_count(),
        sink.frames,
        stats.placed,
        stats.fired,
        stats.destroyed,
        stats.expired,
        stats.jumps,
        sim.registry().len(),
        sink.instances_uploaded,
    );
}
