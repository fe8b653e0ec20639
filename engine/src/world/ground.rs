//! Ground Query Module
//!
//! The terrain collaborator the simulation talks to. Two pure queries are
//! needed: the ground height under a point, and where an aim ray meets the
//! ground. [`FlatGround`] is the stock implementation; real terrain only has
//! to implement [`Ground`].

use glam::Vec3;

/// Terrain queries used by locomotion and placement.
///
/// Both methods must be side-effect free; they are called several times per
/// tick with no ordering guarantees.
pub trait Ground {
    /// Ground height at world `(x, z)`.
    fn height_at(&self, x: f32, z: f32) -> f32;

    /// First point where the ray `origin + t * direction` (t >= 0) meets
    /// the ground, or `None` if it never does.
    fn ray_intersect(&self, origin: Vec3, direction: Vec3) -> Option<Vec3>;
}

/// Horizontal ground plane, optionally limited to a square patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    /// Plane height
    pub height: f32,
    /// Half edge length of the square patch centred on the origin.
    /// `None` means the plane is unbounded.
    pub half_extent: Option<f32>,
}

impl Default for FlatGround {
    fn default() -> Self {
        Self {
            height: 0.0,
            half_extent: None,
        }
    }
}

impl FlatGround {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            half_extent: None,
        }
    }

    /// A finite square patch; rays that land outside it miss.
    pub fn bounded(height: f32, half_extent: f32) -> Self {
        Self {
            height,
            half_extent: Some(half_extent),
        }
    }

    fn covers(&self, x: f32, z: f32) -> bool {
        match self.half_extent {
            Some(h) => x.abs() <= h && z.abs() <= h,
            None => true,
        }
    }
}

impl Ground for FlatGround {
    fn height_at(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }

    fn ray_intersect(&self, origin: Vec3, direction: Vec3) -> Option<Vec3> {
        ray_to_plane(origin, direction, self.height).filter(|hit| self.covers(hit.x, hit.z))
    }
}

/// Intersect a ray with the horizontal plane `y = plane_height`.
///
/// Returns `None` when the ray is parallel to the plane or the crossing
/// lies behind the origin.
pub fn ray_to_plane(origin: Vec3, direction: Vec3, plane_height: f32) -> Option<Vec3> {
    // Ray: P = origin + t * direction, solve origin.y + t * direction.y = plane_height
    if direction.y.abs() < 0.0001 {
        return None;
    }

    let t = (plane_height - origin.y) / direction.y;
    if t < 0.0 {
        return None;
    }

    let mut hit = origin + direction * t;
    hit.y = plane_height;
    Some(hit)
}
