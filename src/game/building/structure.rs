//! Structure archetypes
//!
//! The closed set of build pieces and the geometry rule for each one. A
//! piece's collision volume is derived from its archetype's local box, its
//! fixed tilt, and the yaw it was placed with; structures never move after
//! placement, so the volume is computed once and cached.

use std::fmt;

use glam::{Quat, Vec3};

use crate::physics::Aabb;

/// Wall thickness (world units), independent of grid size
pub const WALL_THICKNESS: f32 = 0.3;
/// Ramp pitch: a gentle 30 degree incline
pub const RAMP_TILT: f32 = -std::f32::consts::FRAC_PI_6;
/// Floors are vertical planes tipped back onto the ground
pub const FLOOR_TILT: f32 = -std::f32::consts::FRAC_PI_2;

/// Build piece archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StructureKind {
    Wall,
    Floor,
    Ramp,
    Cone,
}

impl StructureKind {
    /// Every archetype in toolbar order.
    pub const ALL: [StructureKind; 4] = [
        StructureKind::Wall,
        StructureKind::Floor,
        StructureKind::Ramp,
        StructureKind::Cone,
    ];

    /// Toolbar slot for this archetype.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            StructureKind::Wall => 0,
            StructureKind::Floor => 1,
            StructureKind::Ramp => 2,
            StructureKind::Cone => 3,
        }
    }

    /// Archetype for a toolbar slot, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            StructureKind::Wall => "wall",
            StructureKind::Floor => "floor",
            StructureKind::Ramp => "ramp",
            StructureKind::Cone => "cone",
        }
    }

    /// Local geometry for this archetype on a grid of `grid_size`.
    pub fn shape(self, grid_size: f32) -> StructureShape {
        let half = grid_size * 0.5;
        match self {
            StructureKind::Wall => StructureShape {
                half_extents: Vec3::new(half, half, WALL_THICKNESS * 0.5),
                tilt: 0.0,
            },
            StructureKind::Floor => StructureShape {
                half_extents: Vec3::new(half, half, 0.0),
                tilt: FLOOR_TILT,
            },
            StructureKind::Ramp => StructureShape {
                half_extents: Vec3::new(half, grid_size / 6.0, half),
                tilt: RAMP_TILT,
            },
            // Four-sided cone: base radius 0.6 cells, one cell tall
            StructureKind::Cone => StructureShape {
                half_extents: Vec3::new(grid_size * 0.6, half, grid_size * 0.6),
                tilt: 0.0,
            },
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Local box and fixed pitch of an archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureShape {
    /// Half extents of the unrotated local box
    pub half_extents: Vec3,
    /// Rotation about the local X axis, applied before yaw
    pub tilt: f32,
}

impl StructureShape {
    /// World rotation for a piece placed with `yaw`: tilt first, then yaw
    /// about world up.
    pub fn rotation(&self, yaw: f32) -> Quat {
        Quat::from_rotation_y(yaw) * Quat::from_rotation_x(self.tilt)
    }

    /// World-space collision volume for a piece centred at `position`.
    pub fn bounds(&self, position: Vec3, yaw: f32) -> Aabb {
        Aabb::from_oriented_box(position, self.half_extents, self.rotation(yaw))
    }
}

/// Registry-assigned structure handle. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructureId(pub u32);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One placed build piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub id: StructureId,
    pub kind: StructureKind,
    /// Cell-snapped centre
    pub position: Vec3,
    /// Yaw at placement time including the rotation offset
    pub yaw: f32,
    bounds: Aabb,
}

impl Structure {
    pub(crate) fn new(
        id: StructureId,
        kind: StructureKind,
        position: Vec3,
        yaw: f32,
        grid_size: f32,
    ) -> Self {
        let bounds = kind.shape(grid_size).bounds(position, yaw);
        Self {
            id,
            kind,
            position,
            yaw,
            bounds,
        }
    }

    /// Cached collision volume.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn rotation(&self, grid_size: f32) -> Quat {
        self.kind.shape(grid_size).rotation(self.yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_index_roundtrip() {
        for kind in StructureKind::ALL {
            assert_eq!(StructureKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(StructureKind::from_index(4), None);
    }

    #[test]
    fn test_wall_upright() {
        let b = StructureKind::Wall.shape(3.0).bounds(Vec3::ZERO, 0.0);
        assert!(approx(b.half_extents(), Vec3::new(1.5, 1.5, 0.15)));
    }

    #[test]
    fn test_wall_quarter_turn() {
        let b = StructureKind::Wall.shape(3.0).bounds(Vec3::ZERO, FRAC_PI_2);
        assert!(approx(b.half_extents(), Vec3::new(0.15, 1.5, 1.5)));
    }

    #[test]
    fn test_floor_lies_flat_for_any_quarter_yaw() {
        for steps in 0..4 {
            let yaw = steps as f32 * FRAC_PI_2;
            let b = StructureKind::Floor.shape(3.0).bounds(Vec3::new(3.0, 0.0, -3.0), yaw);
            assert!(b.half_extents().y.abs() < 1e-5, "floor not flat at yaw {yaw}");
            assert!(approx(b.half_extents(), Vec3::new(1.5, 0.0, 1.5)));
        }
    }

    #[test]
    fn test_ramp_is_tilted() {
        let b = StructureKind::Ramp.shape(3.0).bounds(Vec3::ZERO, 0.0);
        let h = b.half_extents();
        // Tilting raises the vertical extent above the flat half-thickness
        assert!(h.y > 0.5);
        assert!(h.y < 1.5);
        assert!((h.x - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_cone_upright() {
        let b = StructureKind::Cone.shape(3.0).bounds(Vec3::ZERO, 0.0);
        assert!(approx(b.half_extents(), Vec3::new(1.8, 1.5, 1.8)));
    }

    #[test]
    fn test_structure_caches_bounds() {
        let s = Structure::new(StructureId(7), StructureKind::Wall, Vec3::new(6.0, 0.0, 0.0), 0.0, 3.0);
        assert!(approx(s.bounds().center(), Vec3::new(6.0, 0.0, 0.0)));
        assert_eq!(s.id.to_string(), "#7");
        assert_eq!(s.kind.to_string(), "wall");
    }
}
