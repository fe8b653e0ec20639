//! Collision system - actor vs placed structures.
//!
//! Wraps [`Aabb`] overlap into the two questions locomotion asks: does this
//! box hit anything, and how far may the actor move horizontally this tick.
//! Pure game logic with **no** render dependencies.

use glam::Vec3;

use crate::game::building::{BuildRegistry, Structure};
use crate::game::config::SimConfig;
use crate::physics::Aabb;

/// Stateless collision system over the build registry.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Actor collision box centred on `position`.
    #[inline]
    pub fn actor_box(position: Vec3, config: &SimConfig) -> Aabb {
        let half = Vec3::new(
            config.actor_half_width,
            config.actor_height * 0.5,
            config.actor_half_width,
        );
        Aabb::from_center_half_extents(position, half)
    }

    /// True if `moving` overlaps any structure volume (touching does not count).
    pub fn intersects(moving: &Aabb, registry: &BuildRegistry) -> bool {
        registry.iter().any(|s| moving.intersects(s.bounds()))
    }

    /// First structure volume `moving` overlaps, in registry order.
    pub fn first_hit<'a>(
        moving: &Aabb,
        registry: &'a BuildRegistry,
    ) -> Option<&'a Structure> {
        registry.iter().find(|s| moving.intersects(s.bounds()))
    }

    /// Resolve a planar move of `displacement` from `current`.
    ///
    /// The full move is taken if free. Otherwise the X-only and Z-only
    /// sub-moves are each tested from `current` and every free one is
    /// applied, which lets the actor slide along a wall. The Y component of
    /// `displacement` is ignored; the test box stays at the current height.
    pub fn resolve_horizontal(
        current: Vec3,
        displacement: Vec3,
        registry: &BuildRegistry,
        config: &SimConfig,
    ) -> Vec3 {
        let free = |candidate: Vec3| !Self::intersects(&Self::actor_box(candidate, config), registry);

        let full = Vec3::new(current.x + displacement.x, current.y, current.z + displacement.z);
        if free(full) {
            return full;
        }

        let mut resolved = current;
        if displacement.x != 0.0 && free(Vec3::new(current.x + displacement.x, current.y, current.z)) {
            resolved.x += displacement.x;
        }
        if displacement.z != 0.0 && free(Vec3::new(current.x, current.y, current.z + displacement.z)) {
            resolved.z += displacement.z;
        }
        resolved
    }
}
