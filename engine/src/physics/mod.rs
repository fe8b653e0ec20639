//! Physics module for the Buildfight engine
//!
//! Hand-rolled physics for the sandbox: no external physics library.
//!
//! # Unit System
//!
//! Distances are world units (1 unit ~ 1 meter). Velocities are expressed
//! **per tick**, not per second: the simulation runs on a fixed step and
//! every tuning constant (gravity, move speed, projectile speed) is a
//! per-tick delta.
//!
//! # Submodules
//!
//! - [`collision`] - Axis-aligned bounding boxes and overlap tests
//! - [`projectile`] - Linear projectile body with range expiry

pub mod collision;
pub mod projectile;

pub use collision::Aabb;
pub use projectile::Projectile;
