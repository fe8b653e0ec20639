//! Render snapshot
//!
//! Read-only view of the simulation handed to the renderer once per frame.
//! The renderer implements [`FrameSink`]; nothing here borrows simulation
//! state, so a sink may keep the frame around.

use glam::{Quat, Vec3};

use crate::game::building::{StructureId, StructureKind};
use crate::physics::Aabb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    /// Unit look direction
    pub direction: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureView {
    pub id: StructureId,
    pub kind: StructureKind,
    pub position: Vec3,
    pub rotation: Quat,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileView {
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostView {
    pub kind: StructureKind,
    pub position: Vec3,
    pub rotation: Quat,
    pub half_extents: Vec3,
    pub visible: bool,
    /// Changes whenever the preview mesh must be rebuilt
    pub revision: u64,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Ticks simulated so far
    pub tick: u64,
    pub actor: ActorView,
    pub camera: CameraView,
    pub structures: Vec<StructureView>,
    pub projectiles: Vec<ProjectileView>,
    pub ghost: GhostView,
}

impl RenderFrame {
    /// Pack structures into instance records for a single instanced draw.
    pub fn structure_instances(&self) -> Vec<StructureInstance> {
        self.structures
            .iter()
            .map(|s| StructureInstance {
                position: s.position.to_array(),
                kind: s.kind.index() as u32,
                rotation: s.rotation.to_array(),
                half_extents: s.bounds.half_extents().to_array(),
                id: s.id.0,
            })
            .collect()
    }
}

/// Per-structure instance data - matches a WGSL struct of three 16-byte rows
///   offset 0:  position (vec3<f32>) = 12 bytes
///   offset 12: kind (u32)           = 4 bytes
///   offset 16: rotation (vec4<f32>) = 16 bytes (quaternion xyzw)
///   offset 32: half_extents (vec3)  = 12 bytes (world AABB)
///   offset 44: id (u32)             = 4 bytes
///   Total: 48 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StructureInstance {
    pub position: [f32; 3],
    pub kind: u32,
    pub rotation: [f32; 4],
    pub half_extents: [f32; 3],
    pub id: u32,
}

static_assertions::assert_eq_size!(StructureInstance, [u8; 48]);

/// Render collaborator.
pub trait FrameSink {
    fn render(&mut self, frame: &RenderFrame);
}

/// Sink that drops every frame. Handy for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn render(&mut self, _frame: &RenderFrame) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_cast_to_bytes() {
        let frame = RenderFrame {
            tick: 0,
            actor: ActorView {
                position: Vec3::ZERO,
                yaw: 0.0,
                pitch: 0.0,
                grounded: true,
            },
            camera: CameraView {
                eye: Vec3::ZERO,
                direction: Vec3::NEG_Z,
            },
            structures: vec![StructureView {
                id: StructureId(3),
                kind: StructureKind::Ramp,
                position: Vec3::new(3.0, 0.0, -3.0),
                rotation: Quat::IDENTITY,
                bounds: Aabb::from_center_half_extents(Vec3::new(3.0, 0.0, -3.0), Vec3::ONE),
            }],
            projectiles: Vec::new(),
            ghost: GhostView {
                kind: StructureKind::Wall,
                position: Vec3::ZERO,
                rotation: Quat::IDENTITY,
                half_extents: Vec3::ONE,
                visible: false,
                revision: 1,
            },
        };

        let instances = frame.structure_instances();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].kind, 2);
        assert_eq!(instances[0].id, 3);
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 48);
    }
}
