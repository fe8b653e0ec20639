//! Projectile body
//!
//! A projectile flies in a straight line at constant velocity: no gravity,
//! no drag. Its bounding box is a small cube re-centred on the position
//! after every step so hit tests always see the current location.
//!
//! # Example
//!
//! ```ignore
//! use buildfight_engine::physics::projectile::Projectile;
//! use glam::Vec3;
//!
//! let mut p = Projectile::spawn(Vec3::ZERO, Vec3::NEG_Z, 1.2, 0.25);
//! p.advance();
//! assert!(!p.is_beyond_range(250.0));
//! ```

use glam::Vec3;

use super::collision::Aabb;

/// A projectile in flight.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// Current position in world space
    pub position: Vec3,
    /// Displacement applied every tick
    pub velocity: Vec3,
    /// Hit volume, centred on `position`
    pub bounds: Aabb,
}

impl Projectile {
    /// Spawn a projectile at `position` heading along `direction`.
    ///
    /// `direction` is normalized here; `speed` is the distance covered per
    /// tick and `extent` the full edge length of the hit cube.
    pub fn spawn(position: Vec3, direction: Vec3, speed: f32, extent: f32) -> Self {
        let velocity = direction.normalize_or_zero() * speed;
        Self {
            position,
            velocity,
            bounds: Aabb::from_center_size(position, Vec3::splat(extent)),
        }
    }

    /// Move one tick along the velocity and re-centre the hit volume.
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.bounds = self.bounds.recentered(self.position);
    }

    /// True once the projectile is farther than `max_range` from the world origin.
    ///
    /// Range is measured from the origin, not from the firing point.
    pub fn is_beyond_range(&self, max_range: f32) -> bool {
        self.position.length() > max_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_normalizes_direction() {
        let p = Projectile::spawn(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), 1.2, 0.25);
        assert!((p.velocity - Vec3::new(0.0, 0.0, -1.2)).length() < 1e-6);
        assert_eq!(p.bounds.center(), Vec3::ZERO);
    }

    #[test]
    fn test_advance_moves_bounds() {
        let mut p = Projectile::spawn(Vec3::new(1.0, 2.0, 3.0), Vec3::X, 0.5, 0.25);
        p.advance();
        p.advance();
        assert!((p.position - Vec3::new(2.0, 2.0, 3.0)).length() < 1e-6);
        assert!((p.bounds.center() - p.position).length() < 1e-6);
        assert!((p.bounds.size() - Vec3::splat(0.25)).length() < 1e-6);
    }

    #[test]
    fn test_range_measured_from_origin() {
        let p = Projectile::spawn(Vec3::new(0.0, 0.0, 260.0), Vec3::Z, 1.0, 0.25);
        assert!(p.is_beyond_range(250.0));
        let near = Projectile::spawn(Vec3::new(0.0, 0.0, 100.0), Vec3::Z, 1.0, 0.25);
        assert!(!near.is_beyond_range(250.0));
    }

    #[test]
    fn test_zero_direction_stays_put() {
        let mut p = Projectile::spawn(Vec3::ONE, Vec3::ZERO, 1.2, 0.25);
        p.advance();
        assert_eq!(p.position, Vec3::ONE);
    }
}
