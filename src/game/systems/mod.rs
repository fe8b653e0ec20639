//! Game systems - self-contained modules that own state and logic.

pub mod collision_system;
pub mod projectile_system;

pub use collision_system::CollisionSystem;
pub use projectile_system::{ProjectileEvent, ProjectileSystem};
