//! Look Controller Module
//!
//! Mouse-look for a third-person boom camera. Mouse movement directly
//! rotates yaw and pitch with no smoothing; pitch is clamped to a fixed
//! range so the boom never flips over the actor.
//!
//! # Coordinate System
//! - +X = right, +Y = up
//! - yaw = 0 faces -Z; yaw increases counter-clockwise seen from above
//! - pitch > 0 looks up
//!
//! The camera sits `camera_distance` behind the actor along the planar
//! forward vector and `camera_height` above it, and looks along
//! [`LookController::aim_direction`]. Shots and build rays both start from
//! the camera eye.

use glam::Vec3;

/// Default mouse sensitivity in radians per pixel
pub const DEFAULT_SENSITIVITY: f32 = 0.0025;
/// Default symmetric pitch clamp in radians
pub const DEFAULT_PITCH_LIMIT: f32 = 0.9;

/// Yaw/pitch look state plus boom geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct LookController {
    /// Horizontal angle (radians) - unrestricted
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to `±pitch_limit`
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel
    pub sensitivity: f32,
    pitch_limit: f32,
    /// Boom length behind the actor
    pub camera_distance: f32,
    /// Boom height above the actor
    pub camera_height: f32,
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            camera_distance: 6.0,
            camera_height: 2.0,
        }
    }
}

impl LookController {
    pub fn new(sensitivity: f32, pitch_limit: f32, camera_distance: f32, camera_height: f32) -> Self {
        Self {
            sensitivity,
            pitch_limit: pitch_limit.abs(),
            camera_distance,
            camera_height,
            ..Default::default()
        }
    }

    #[inline]
    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    /// Set the pitch angle directly (clamped to limits)
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Apply a mouse delta in pixels.
    ///
    /// Moving the mouse right turns right (yaw decreases); moving it down
    /// looks down (pitch decreases).
    pub fn apply_delta(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.sensitivity;
        self.set_pitch(self.pitch - dy * self.sensitivity);
    }

    /// Planar forward vector (unit length, y = 0).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        planar_forward(self.yaw)
    }

    /// Planar right vector (unit length, y = 0).
    #[inline]
    pub fn right(&self) -> Vec3 {
        planar_right(self.yaw)
    }

    /// Unit direction the camera looks along, including pitch.
    pub fn aim_direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Camera eye for an actor at `actor_position`.
    pub fn eye_position(&self, actor_position: Vec3) -> Vec3 {
        actor_position - self.forward() * self.camera_distance + Vec3::Y * self.camera_height
    }
}

/// Planar forward for a yaw angle: `(-sin yaw, 0, -cos yaw)`.
#[inline]
pub fn planar_forward(yaw: f32) -> Vec3 {
    let (s, c) = yaw.sin_cos();
    Vec3::new(-s, 0.0, -c)
}

/// Planar right for a yaw angle, perpendicular to [`planar_forward`].
#[inline]
pub fn planar_right(yaw: f32) -> Vec3 {
    let f = planar_forward(yaw);
    Vec3::new(-f.z, 0.0, f.x)
}
