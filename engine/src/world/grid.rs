//! Grid Configuration Module
//!
//! Build pieces live on a square grid in the XZ plane. Every placement is
//! snapped to the nearest cell centre on X and Z; Y is never snapped so a
//! piece keeps the height it was anchored at.
//!
//! ## Tile keys
//! A [`TileKey`] names one cell by its integer indices
//! `(round(x / grid_size), round(z / grid_size))`. Its `Display` form is the
//! snapped world coordinate pair joined by an underscore, e.g. `"0_0"` or
//! `"3_-6"` for a grid size of 3.

use std::fmt;

use glam::Vec3;

/// Grid configuration for build placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Edge length of one build cell (world units)
    pub grid_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { grid_size: 3.0 }
    }
}

impl GridConfig {
    pub fn new(grid_size: f32) -> Self {
        Self { grid_size }
    }

    /// Snap a position to the nearest cell centre.
    ///
    /// Only snaps X and Z coordinates; Y is preserved.
    pub fn snap_to_grid(&self, pos: Vec3) -> Vec3 {
        snap_to_grid(pos, self.grid_size)
    }

    /// Tile containing `pos`.
    pub fn tile_key(&self, pos: Vec3) -> TileKey {
        TileKey::from_position(pos, self.grid_size)
    }

    /// World-space XZ centre of `tile` at height `y`.
    pub fn tile_center(&self, tile: TileKey, y: f32) -> Vec3 {
        Vec3::new(
            tile.cell_x as f32 * self.grid_size,
            y,
            tile.cell_z as f32 * self.grid_size,
        )
    }
}

/// Integer cell coordinates of one grid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    pub cell_x: i32,
    pub cell_z: i32,
}

impl TileKey {
    pub fn new(cell_x: i32, cell_z: i32) -> Self {
        Self { cell_x, cell_z }
    }

    pub fn from_position(pos: Vec3, grid_size: f32) -> Self {
        Self {
            cell_x: (pos.x / grid_size).round() as i32,
            cell_z: (pos.z / grid_size).round() as i32,
        }
    }

    /// Render the key in snapped world units, e.g. `"3_-6"`.
    pub fn world_label(&self, grid_size: f32) -> String {
        let x = self.cell_x as f32 * grid_size;
        let z = self.cell_z as f32 * grid_size;
        format!("{x}_{z}")
    }
}

impl fmt::Display for TileKey {
    /// Cell indices; use [`TileKey::world_label`] for world units.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.cell_x, self.cell_z)
    }
}

/// Standalone function to snap a position to a grid.
///
/// Useful when you don't have a GridConfig but need basic snapping.
pub fn snap_to_grid(pos: Vec3, grid_size: f32) -> Vec3 {
    // `+ 0.0` folds -0.0 into 0.0 so snapped keys never print as "-0"
    Vec3::new(
        (pos.x / grid_size).round() * grid_size + 0.0,
        pos.y,
        (pos.z / grid_size).round() * grid_size + 0.0,
    )
}
