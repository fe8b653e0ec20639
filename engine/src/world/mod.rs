//! World Module
//!
//! World-space configuration shared by every subsystem: the build grid,
//! tile keys, and the ground query boundary.

pub mod grid;
pub mod ground;

pub use grid::{GridConfig, TileKey, snap_to_grid};
pub use ground::{FlatGround, Ground, ray_to_plane};
