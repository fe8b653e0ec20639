//! Collision primitives
//!
//! Axis-aligned bounding boxes used for every collision question the
//! simulation asks: actor vs structure, projectile vs structure.
//!
//! # Overlap semantics
//!
//! Overlap is **exclusive**: two boxes that only share a face (or an edge,
//! or a corner) do not intersect. An actor standing flush against a wall
//! can therefore slide along it without being reported as colliding.
//!
//! # Example
//!
//! ```ignore
//! use buildfight_engine::physics::collision::Aabb;
//! use glam::{Quat, Vec3};
//!
//! let wall = Aabb::from_oriented_box(
//!     Vec3::ZERO,
//!     Vec3::new(1.5, 1.5, 0.15),
//!     Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
//! );
//! let probe = Aabb::from_center_size(Vec3::new(0.0, 0.0, 1.0), Vec3::splat(0.25));
//! assert!(probe.intersects(&wall));
//! ```

use glam::{Mat3, Quat, Vec3};

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centred on `center` with full edge lengths `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// World-space hull of a box with local `half_extents`, rotated by
    /// `rotation` and centred on `center`.
    ///
    /// Equivalent to transforming the eight local corners and taking their
    /// min/max, computed in closed form: each world half-extent is the dot
    /// product of the absolute rotation row with the local half-extents.
    pub fn from_oriented_box(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        let m = Mat3::from_quat(rotation);
        let abs = Mat3::from_cols(m.x_axis.abs(), m.y_axis.abs(), m.z_axis.abs());
        Self::from_center_half_extents(center, abs * half_extents)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Same box moved so its centre sits at `center`.
    pub fn recentered(&self, center: Vec3) -> Self {
        Self::from_center_half_extents(center, self.half_extents())
    }

    /// Exclusive overlap test: touching faces do not count.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}
