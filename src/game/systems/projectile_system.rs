//! Projectile lifecycle management system.
//!
//! Owns the active projectiles, advancing them each tick, expiring the ones
//! that leave the arena and destroying the first structure each one hits.

use glam::Vec3;

use crate::game::building::{BuildRegistry, StructureId, StructureKind};
use crate::game::config::SimConfig;
use crate::physics::Projectile;

/// Something that happened to a projectile during [`ProjectileSystem::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileEvent {
    /// Left the maximum range and was removed.
    Expired { position: Vec3 },
    /// Hit a structure; both the structure and the projectile are gone.
    StructureDestroyed {
        structure: StructureId,
        kind: StructureKind,
        position: Vec3,
    },
}

/// Manages the full lifecycle of straight-line projectiles.
pub struct ProjectileSystem {
    projectiles: Vec<Projectile>,
    speed: f32,
    extent: f32,
    max_range: f32,
}

impl ProjectileSystem {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            projectiles: Vec::new(),
            speed: config.projectile_speed,
            extent: config.projectile_extent,
            max_range: config.max_projectile_range,
        }
    }

    /// Spawn a projectile at `origin` heading along `aim`.
    ///
    /// Returns `false` (and spawns nothing) for a zero-length aim.
    pub fn fire(&mut self, origin: Vec3, aim: Vec3) -> bool {
        if aim.length_squared() <= f32::EPSILON {
            log::debug!("[Projectile] Ignored fire with zero aim");
            return false;
        }
        self.projectiles
            .push(Projectile::spawn(origin, aim, self.speed, self.extent));
        true
    }

    /// Advance every projectile one tick.
    ///
    /// Projectiles are processed newest first. Each either expires, destroys
    /// the first overlapping structure in registry order, or keeps flying.
    /// Spent projectiles are compacted out afterwards, preserving order.
    pub fn tick(&mut self, registry: &mut BuildRegistry) -> Vec<ProjectileEvent> {
        let mut events = Vec::new();
        let mut spent = vec![false; self.projectiles.len()];

        for i in (0..self.projectiles.len()).rev() {
            let projectile = &mut self.projectiles[i];
            projectile.advance();

            if projectile.is_beyond_range(self.max_range) {
                log::debug!(
                    "[Projectile] Expired at distance {:.1}",
                    projectile.position.length()
                );
                events.push(ProjectileEvent::Expired {
                    position: projectile.position,
                });
                spent[i] = true;
                continue;
            }

            let hit = registry
                .iter()
                .find(|s| projectile.bounds.intersects(s.bounds()))
                .map(|s| s.id);

            if let Some(id) = hit
                && let Some(destroyed) = registry.remove(id)
            {
                log::debug!(
                    "[Projectile] Destroyed {} {} at ({:.1}, {:.1}, {:.1})",
                    destroyed.kind,
                    destroyed.id,
                    projectile.position.x,
                    projectile.position.y,
                    projectile.position.z,
                );
                events.push(ProjectileEvent::StructureDestroyed {
                    structure: destroyed.id,
                    kind: destroyed.kind,
                    position: projectile.position,
                });
                spent[i] = true;
            }
        }

        let mut flags = spent.into_iter();
        self.projectiles
            .retain(|_| !flags.next().unwrap_or(false));

        events
    }

    /// Remove all active projectiles.
    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    /// Number of active projectiles.
    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Active projectiles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }
}
