//! Placement Planner
//!
//! Build mode state plus the ghost preview. While build mode is on, the
//! ghost follows the aim ray: it sits where the ray meets the ground,
//! snapped to the grid, facing the camera yaw plus a persistent rotation
//! offset. Committing places a structure exactly where the ghost is.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3};

use crate::game::building::{BuildRegistry, StructureId, StructureKind, StructureShape};
use crate::world::{GridConfig, Ground};

/// Where the ghost would go for a given aim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostPose {
    /// Cell-snapped position on X/Z, ground height on Y
    pub position: Vec3,
    pub yaw: f32,
}

/// Render-only placement preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub kind: StructureKind,
    pub shape: StructureShape,
    pub position: Vec3,
    pub yaw: f32,
    pub visible: bool,
    /// Bumped every time the preview representation is rebuilt
    pub revision: u64,
}

impl Ghost {
    pub fn rotation(&self) -> Quat {
        self.shape.rotation(self.yaw)
    }
}

/// Build mode, archetype selection and ghost placement.
#[derive(Debug, Clone)]
pub struct PlacementPlanner {
    grid: GridConfig,
    fallback_distance: f32,
    rotation_offset: f32,
    ghost: Ghost,
}

impl PlacementPlanner {
    pub fn new(grid: GridConfig, fallback_distance: f32) -> Self {
        let kind = StructureKind::Wall;
        Self {
            grid,
            fallback_distance,
            rotation_offset: 0.0,
            ghost: Ghost {
                kind,
                shape: kind.shape(grid.grid_size),
                position: Vec3::ZERO,
                yaw: 0.0,
                visible: false,
                revision: 1,
            },
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.ghost.visible
    }

    #[inline]
    pub fn selected(&self) -> StructureKind {
        self.ghost.kind
    }

    pub fn rotation_offset(&self) -> f32 {
        self.rotation_offset
    }

    pub fn ghost(&self) -> &Ghost {
        &self.ghost
    }

    /// Flip build mode; returns the new state.
    pub fn toggle_build_mode(&mut self) -> bool {
        self.ghost.visible = !self.ghost.visible;
        if self.ghost.visible {
            log::info!("[Planner] Build mode ON ({})", self.ghost.kind);
        } else {
            log::info!("[Planner] Build mode OFF");
        }
        self.ghost.visible
    }

    /// Switch archetype. Ignored outside build mode.
    ///
    /// Returns `true` if the selection changed, in which case the ghost
    /// preview has already been rebuilt.
    pub fn select(&mut self, kind: StructureKind) -> bool {
        if !self.is_active() || kind == self.ghost.kind {
            return false;
        }
        self.ghost.kind = kind;
        self.ghost.shape = kind.shape(self.grid.grid_size);
        self.ghost.revision += 1;
        log::info!("[Planner] Selected {kind}");
        true
    }

    /// Add a quarter turn to the rotation offset. Ignored outside build mode.
    pub fn rotate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.rotation_offset = (self.rotation_offset + FRAC_PI_2).rem_euclid(TAU);
        log::debug!(
            "[Planner] Rotation offset {:.0} deg",
            self.rotation_offset.to_degrees()
        );
        true
    }

    /// Ghost pose for an aim ray starting at `origin`.
    ///
    /// If the ray misses the ground, the point `fallback_distance` along it
    /// is dropped to the ground height below.
    pub fn compute_ghost(
        &self,
        origin: Vec3,
        direction: Vec3,
        yaw: f32,
        ground: &impl Ground,
    ) -> GhostPose {
        let target = match ground.ray_intersect(origin, direction) {
            Some(hit) => hit,
            None => {
                let ahead = origin + direction.normalize_or_zero() * self.fallback_distance;
                Vec3::new(ahead.x, ground.height_at(ahead.x, ahead.z), ahead.z)
            }
        };
        GhostPose {
            position: self.grid.snap_to_grid(target),
            yaw: yaw + self.rotation_offset,
        }
    }

    /// Move the ghost to the pose for the current aim.
    pub fn refresh(&mut self, origin: Vec3, direction: Vec3, yaw: f32, ground: &impl Ground) {
        let pose = self.compute_ghost(origin, direction, yaw, ground);
        self.ghost.position = pose.position;
        self.ghost.yaw = pose.yaw;
    }

    /// Place the selected archetype at the ghost.
    ///
    /// `None` when build mode is off or the tile already holds that kind;
    /// occupied tiles are not an error here.
    pub fn commit(&self, registry: &mut BuildRegistry) -> Option<StructureId> {
        if !self.ghost.visible {
            return None;
        }
        registry
            .place(self.ghost.position, self.ghost.kind, self.ghost.yaw)
            .ok()
    }
}
