//! Building - grid-snapped build pieces
//!
//! - [`structure`]: archetypes (wall, floor, ramp, cone) and their collision shapes
//! - [`tile_index`]: one-per-kind occupancy per grid tile
//! - [`registry`]: owner of all placed structures

pub mod registry;
pub mod structure;
pub mod tile_index;

pub use registry::{BuildRegistry, PlaceError};
pub use structure::{
    FLOOR_TILT, RAMP_TILT, Structure, StructureId, StructureKind, StructureShape, WALL_THICKNESS,
};
pub use tile_index::{TileIndex, TileSlots};
