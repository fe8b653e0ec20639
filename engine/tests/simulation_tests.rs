//! Simulation Tests - Tick Ordering, Build Mode and the Fixed-Step Loop
//!
//! End-to-end tests driving the simulation through input intents only.

use buildfight_engine::game::{
    FixedStepLoop, FrameSink, LocomotionState, NullSink, RenderFrame, SimConfig, Simulation,
    StructureKind,
};
use buildfight_engine::input::{InputAction, MovementKey, TickInput};
use glam::{Vec2, Vec3};

fn edge(action: InputAction) -> TickInput {
    let mut input = TickInput::new();
    input.apply(action);
    input
}

fn settled_sim() -> Simulation {
    let mut sim = Simulation::new(SimConfig::default());
    sim.tick(&TickInput::default());
    sim
}

#[derive(Default)]
struct RecordingSink {
    frames: Vec<RenderFrame>,
}

impl FrameSink for RecordingSink {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}

// ============================================================================
// Build mode
// ============================================================================

#[test]
fn test_toggle_shows_and_positions_ghost() {
    let mut sim = settled_sim();
    let report = sim.tick(&edge(InputAction::ToggleBuildMode));
    assert_eq!(report.build_mode, Some(true));

    let frame = sim.frame();
    assert!(frame.ghost.visible);
    assert_eq!(frame.ghost.kind, StructureKind::Wall);
    // Level aim never meets the ground: six units ahead of the eye, snapped
    assert_eq!(frame.ghost.position, Vec3::new(0.0, 0.0, 6.0));
}

#[test]
fn test_ghost_follows_ground_hit_when_looking_down() {
    let mut sim = settled_sim();
    sim.tick(&edge(InputAction::ToggleBuildMode));
    sim.tick(&edge(InputAction::Look(0.0, 200.0)));

    assert!((sim.look().pitch + 0.5).abs() < 1e-5);
    assert_eq!(sim.frame().ghost.position, Vec3::new(0.0, 0.0, 3.0));
}

#[test]
fn test_commit_places_once_per_kind_per_tile() {
    let mut sim = settled_sim();
    sim.tick(&edge(InputAction::ToggleBuildMode));

    let first = sim.tick(&edge(InputAction::Primary));
    assert!(first.placed.is_some());
    assert!(!first.fired);

    let dup = sim.tick(&edge(InputAction::Primary));
    assert_eq!(dup.placed, None);
    assert!(!dup.fired);
    assert_eq!(sim.registry().len(), 1);

    // A different archetype fits on the same tile
    let select = sim.tick(&edge(InputAction::SelectArchetype(2)));
    assert_eq!(select.selected, Some(StructureKind::Ramp));
    let ramp = sim.tick(&edge(InputAction::Primary));
    assert!(ramp.placed.is_some());
    assert_eq!(sim.registry().len(), 2);
}

#[test]
fn test_select_rebuilds_ghost_preview() {
    let mut sim = settled_sim();
    sim.tick(&edge(InputAction::ToggleBuildMode));
    let before = sim.frame().ghost.revision;

    sim.tick(&edge(InputAction::SelectArchetype(3)));
    let frame = sim.frame();
    assert_eq!(frame.ghost.kind, StructureKind::Cone);
    assert_eq!(frame.ghost.revision, before + 1);
    assert!((frame.ghost.half_extents - Vec3::new(1.8, 1.5, 1.8)).length() < 1e-6);

    // Unknown slots are ignored
    let report = sim.tick(&edge(InputAction::SelectArchetype(9)));
    assert_eq!(report.selected, None);
    assert_eq!(sim.frame().ghost.revision, before + 1);
}

#[test]
fn test_select_and_rotate_ignored_in_play_mode() {
    let mut sim = settled_sim();
    let report = sim.tick(&edge(InputAction::SelectArchetype(1)));
    assert_eq!(report.selected, None);
    let report = sim.tick(&edge(InputAction::RotateGhost));
    assert!(!report.rotated);
    assert_eq!(sim.planner().selected(), StructureKind::Wall);
    assert_eq!(sim.planner().rotation_offset(), 0.0);
}

#[test]
fn test_rotate_offsets_committed_yaw() {
    let mut sim = settled_sim();
    sim.tick(&edge(InputAction::ToggleBuildMode));
    let report = sim.tick(&edge(InputAction::RotateGhost));
    assert!(report.rotated);

    let placed = sim.tick(&edge(InputAction::Primary)).placed.expect("free tile");
    let wall = sim.registry().get(placed).expect("placed");
    assert!((wall.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    // Quarter-turned wall is thin along X
    assert!((wall.bounds().size().x - 0.3).abs() < 1e-4);
}

#[test]
fn test_rotate_and_commit_in_one_tick_uses_new_offset() {
    let mut sim = settled_sim();
    sim.tick(&edge(InputAction::ToggleBuildMode));

    let mut input = TickInput::new();
    input.apply(InputAction::RotateGhost);
    input.apply(InputAction::Primary);
    let placed = sim.tick(&input).placed.expect("free tile");

    let wall = sim.registry().get(placed).expect("placed");
    assert!((wall.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_look_and_commit_in_one_tick_uses_new_yaw() {
    let mut sim = settled_sim();
    sim.tick(&edge(InputAction::ToggleBuildMode));

    let mut input = TickInput::new();
    input.apply(InputAction::Look(-400.0, 0.0));
    input.apply(InputAction::Primary);
    let placed = sim.tick(&input).placed.expect("free tile");

    let yaw = sim.look().yaw;
    assert!(yaw.abs() > 0.1);
    let wall = sim.registry().get(placed).expect("placed");
    assert!((wall.yaw - yaw).abs() < 1e-6);
}

// ============================================================================
// Combat
// ============================================================================

#[test]
fn test_shot_from_eye_destroys_structure_in_line() {
    let mut sim = settled_sim();
    // Eye sits at (0, 3.6, 11); a cone at y = 3 covers that height
    let cone = sim
        .registry_mut()
        .place(Vec3::new(0.0, 3.0, -3.0), StructureKind::Cone, 0.0)
        .unwrap();

    let report = sim.tick(&edge(InputAction::Primary));
    assert!(report.fired);

    let mut destroyed = Vec::new();
    for _ in 0..20 {
        destroyed.extend(sim.tick(&TickInput::default()).destroyed());
    }
    assert_eq!(destroyed, vec![cone]);
    assert!(sim.registry().is_empty());
    assert!(sim.projectiles().is_empty());
}

#[test]
fn test_primary_in_build_mode_never_fires() {
    let mut sim = settled_sim();
    sim.tick(&edge(InputAction::ToggleBuildMode));
    for _ in 0..3 {
        sim.tick(&edge(InputAction::Primary));
    }
    assert!(sim.projectiles().is_empty());
}

// ============================================================================
// Actor through the simulation
// ============================================================================

#[test]
fn test_jump_goes_airborne_on_same_tick() {
    let mut sim = settled_sim();
    assert!(sim.actor().is_grounded());
    assert_eq!(sim.actor().vertical_velocity, 0.0);

    let report = sim.tick(&edge(InputAction::Jump));
    assert!(report.jumped);
    assert_eq!(report.step.state, LocomotionState::Airborne);
    assert!((sim.actor().vertical_velocity - (0.28 - 0.015)).abs() < 1e-6);
}

#[test]
fn test_walk_forward_follows_yaw() {
    let mut sim = settled_sim();
    let mut input = TickInput::new();
    input.apply(InputAction::Movement(MovementKey::Forward, true));
    for _ in 0..10 {
        sim.tick(&input);
    }
    let p = sim.actor().position;
    assert!((p.z - (5.0 - 1.2)).abs() < 1e-4);
    assert!(p.x.abs() < 1e-6);
}

#[test]
fn test_pitch_is_clamped() {
    let mut sim = settled_sim();
    let input = TickInput {
        look_delta: Vec2::new(0.0, -10_000.0),
        ..Default::default()
    };
    sim.tick(&input);
    assert!((sim.look().pitch - 0.9).abs() < 1e-6);
}

#[test]
fn test_reset_clears_world() {
    let mut sim = settled_sim();
    sim.registry_mut().place(Vec3::ZERO, StructureKind::Wall, 0.0).unwrap();
    sim.tick(&edge(InputAction::Primary));
    sim.reset();
    assert!(sim.registry().is_empty());
    assert!(sim.projectiles().is_empty());
    assert_eq!(sim.actor().position, SimConfig::default().spawn_position);
}

// ============================================================================
// Fixed-step loop
// ============================================================================

#[test]
fn test_edges_consumed_by_first_tick_only() {
    let config = SimConfig {
        tick_rate_hz: 64.0,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config.clone());
    let mut fixed = FixedStepLoop::from_config(&config);
    let mut sink = RecordingSink::default();

    let mut input = TickInput::new();
    input.apply(InputAction::Primary);
    input.apply(InputAction::Movement(MovementKey::Left, true));

    let reports = fixed.advance(3.0 / 64.0, &input, &mut sim, &mut sink);
    assert_eq!(reports.len(), 3);
    assert_eq!(reports.iter().filter(|r| r.fired).count(), 1);
    assert!(reports.iter().all(|r| r.step.intent != Vec3::ZERO));
    assert_eq!(sink.frames.len(), 1);
    assert_eq!(sink.frames[0].tick, 3);
}

#[test]
fn test_null_sink_run_is_deterministic() {
    let run = || {
        let mut sim = Simulation::new(SimConfig::default());
        let mut fixed = FixedStepLoop::from_config(sim.config());
        let mut input = TickInput::new();
        input.apply(InputAction::Movement(MovementKey::Forward, true));
        for frame in 0..120 {
            if frame % 30 == 0 {
                input.apply(InputAction::Jump);
            }
            if !fixed.advance(1.0 / 60.0, &input, &mut sim, &mut NullSink).is_empty() {
                input.clear_edges();
            }
        }
        sim.actor().position
    };
    assert_eq!(run(), run());
}
