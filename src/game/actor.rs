//! Actor Module
//!
//! The single player-controlled body. Movement is tick-based: every call to
//! [`Actor::step`] moves a fixed planar distance in the input direction and
//! integrates one tick of gravity. Horizontal motion slides along structures
//! through [`CollisionSystem::resolve_horizontal`]; vertical motion is only
//! stopped by the ground.

use glam::Vec3;

use crate::camera::{planar_forward, planar_right};
use crate::game::building::BuildRegistry;
use crate::game::config::SimConfig;
use crate::game::systems::CollisionSystem;
use crate::input::MovementKeys;
use crate::world::Ground;

/// Whether the actor is standing on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionState {
    Grounded,
    Airborne,
}

/// Outcome of one [`Actor::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Planar displacement requested by the input
    pub intent: Vec3,
    /// Planar displacement actually applied after collision
    pub moved: Vec3,
    /// True if this step went from airborne to grounded
    pub landed: bool,
    pub state: LocomotionState,
}

impl StepReport {
    /// True if collision cancelled any part of the requested move.
    pub fn blocked(&self) -> bool {
        (self.intent - self.moved).length_squared() > 1e-12
    }
}

/// Player body. `position` is the eye-height reference point, not the feet.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub position: Vec3,
    /// Vertical velocity in world units per tick
    pub vertical_velocity: f32,
    pub state: LocomotionState,
}

impl Actor {
    /// Spawn airborne at `position`; the first step settles it on the ground.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
            state: LocomotionState::Airborne,
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.state == LocomotionState::Grounded
    }

    /// Start a jump. Only accepted while grounded; no double jumps.
    pub fn jump(&mut self, config: &SimConfig) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.vertical_velocity = config.jump_impulse;
        self.state = LocomotionState::Airborne;
        true
    }

    /// Planar displacement for this tick from the held keys.
    ///
    /// Diagonals are normalized so they are no faster than a single key.
    pub fn planar_intent(keys: &MovementKeys, yaw: f32, move_speed: f32) -> Vec3 {
        let (right_input, forward_input) = keys.axes();
        let dir = planar_forward(yaw) * forward_input + planar_right(yaw) * right_input;
        dir.normalize_or_zero() * move_speed
    }

    /// Advance one tick.
    pub fn step(
        &mut self,
        keys: &MovementKeys,
        yaw: f32,
        registry: &BuildRegistry,
        ground: &impl Ground,
        config: &SimConfig,
    ) -> StepReport {
        let intent = Self::planar_intent(keys, yaw, config.move_speed);
        let start = self.position;
        let resolved = if intent == Vec3::ZERO {
            start
        } else {
            CollisionSystem::resolve_horizontal(start, intent, registry, config)
        };

        self.vertical_velocity += config.gravity;
        let mut y = resolved.y + self.vertical_velocity;

        let floor = ground.height_at(resolved.x, resolved.z) + config.eye_height;
        let was_grounded = self.is_grounded();
        if y <= floor {
            y = floor;
            self.vertical_velocity = 0.0;
            self.state = LocomotionState::Grounded;
        } else {
            self.state = LocomotionState::Airborne;
        }

        self.position = Vec3::new(resolved.x, y, resolved.z);

        StepReport {
            intent,
            moved: Vec3::new(resolved.x - start.x, 0.0, resolved.z - start.z),
            landed: !was_grounded && self.is_grounded(),
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::FlatGround;
    use std::f32::consts::FRAC_PI_2;

    fn grounded_actor() -> Actor {
        Actor {
            position: Vec3::new(0.0, 1.6, 5.0),
            vertical_velocity: 0.0,
            state: LocomotionState::Grounded,
        }
    }

    #[test]
    fn test_spawn_settles_on_first_step() {
        let config = SimConfig::default();
        let mut actor = Actor::new(config.spawn_position);
        let report = actor.step(
            &MovementKeys::default(),
            0.0,
            &BuildRegistry::default(),
            &FlatGround::default(),
            &config,
        );
        assert!(report.landed);
        assert!(actor.is_grounded());
        assert_eq!(actor.position.y, 1.6);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let config = SimConfig::default();
        let mut actor = grounded_actor();
        assert!(actor.jump(&config));
        assert_eq!(actor.vertical_velocity, 0.28);
        assert_eq!(actor.state, LocomotionState::Airborne);
        assert!(!actor.jump(&config));
    }

    #[test]
    fn test_forward_intent_at_zero_yaw() {
        let keys = MovementKeys {
            forward: true,
            ..Default::default()
        };
        let v = Actor::planar_intent(&keys, 0.0, 0.12);
        assert!((v - Vec3::new(0.0, 0.0, -0.12)).length() < 1e-6);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let keys = MovementKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        let v = Actor::planar_intent(&keys, FRAC_PI_2, 0.12);
        assert!((v.length() - 0.12).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_no_keys_no_intent() {
        let v = Actor::planar_intent(&MovementKeys::default(), 1.0, 0.12);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let config = SimConfig::default();
        let registry = BuildRegistry::default();
        let ground = FlatGround::default();
        let mut actor = grounded_actor();
        actor.jump(&config);

        let mut peak = actor.position.y;
        let mut ticks = 0;
        loop {
            actor.step(&MovementKeys::default(), 0.0, &registry, &ground, &config);
            peak = peak.max(actor.position.y);
            ticks += 1;
            assert!(actor.position.y >= 1.6);
            if actor.is_grounded() || ticks > 100 {
                break;
            }
        }
        assert!(actor.is_grounded());
        assert!(peak > 3.5);
        assert_eq!(actor.vertical_velocity, 0.0);
    }
}
