//! Fixed-step driver
//!
//! Converts variable frame time into whole simulation ticks. Frame time is
//! clamped and the accumulator capped so a long stall costs at most
//! `max_steps_per_frame` catch-up ticks instead of a spiral of death.

use crate::game::config::SimConfig;
use crate::game::frame::FrameSink;
use crate::game::simulation::{Simulation, TickReport};
use crate::input::TickInput;
use crate::world::Ground;

/// Longest frame time fed into the accumulator (seconds)
pub const MAX_FRAME_DELTA_S: f32 = 0.1;

/// Accumulator-based fixed timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStepLoop {
    pub step_seconds: f32,
    pub max_steps_per_frame: usize,
    accumulator: f32,
}

impl FixedStepLoop {
    pub fn new(step_seconds: f32, max_steps_per_frame: usize) -> Self {
        Self {
            step_seconds,
            max_steps_per_frame: max_steps_per_frame.max(1),
            accumulator: 0.0,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.tick_seconds(), config.max_steps_per_frame)
    }

    /// Unspent frame time carried into the next frame.
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Feed one frame of `delta` seconds.
    ///
    /// Runs as many whole ticks as the accumulator allows. Edge intents in
    /// `input` go to the first tick only; held movement applies to every
    /// tick. Renders once if at least one tick ran.
    pub fn advance<G: Ground>(
        &mut self,
        delta: f32,
        input: &TickInput,
        sim: &mut Simulation<G>,
        sink: &mut impl FrameSink,
    ) -> Vec<TickReport> {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA_S);
        self.accumulator = (self.accumulator + delta)
            .min(self.step_seconds * self.max_steps_per_frame as f32);

        let mut reports = Vec::new();
        let mut held = input.clone();
        while self.accumulator >= self.step_seconds && reports.len() < self.max_steps_per_frame {
            reports.push(sim.tick(&held));
            held.clear_edges();
            self.accumulator -= self.step_seconds;
        }

        if !reports.is_empty() {
            sink.render(&sim.frame());
        }
        reports
    }
}
