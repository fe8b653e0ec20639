//! BuildRegistry - owner of every placed structure.
//!
//! Structures are kept in creation order (the order projectile hit tests
//! walk them) and indexed by tile through [`TileIndex`]. Placement snaps to
//! the nearest cell centre on X/Z and enforces one structure per kind per
//! tile; nothing else is checked.

use std::fmt;

use glam::Vec3;

use super::structure::{Structure, StructureId, StructureKind};
use super::tile_index::{TileIndex, TileSlots};
use crate::world::{GridConfig, TileKey};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The tile already holds a structure of this kind.
    Occupied {
        tile: TileKey,
        existing: StructureId,
    },
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::Occupied { tile, existing } => {
                write!(f, "tile {tile} already holds structure {existing} of this kind")
            }
        }
    }
}

impl std::error::Error for PlaceError {}

/// All placed structures plus their tile index.
#[derive(Debug)]
pub struct BuildRegistry {
    grid: GridConfig,
    structures: Vec<Structure>,
    tiles: TileIndex,
    next_id: u32,
}

impl Default for BuildRegistry {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl BuildRegistry {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            structures: Vec::new(),
            tiles: TileIndex::new(),
            next_id: 1,
        }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn clear(&mut self) {
        self.structures.clear();
        self.tiles.clear();
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Check whether `kind` may be placed on the tile under `position`.
    pub fn can_place(&self, position: Vec3, kind: StructureKind) -> Result<TileKey, PlaceError> {
        let tile = self.grid.tile_key(position);
        match self.tiles.query(tile).get(kind) {
            Some(existing) => Err(PlaceError::Occupied { tile, existing }),
            None => Ok(tile),
        }
    }

    /// Place a structure of `kind` at `position` with `yaw`.
    ///
    /// X/Z are snapped to the cell centre; Y is kept as given.
    pub fn place(
        &mut self,
        position: Vec3,
        kind: StructureKind,
        yaw: f32,
    ) -> Result<StructureId, PlaceError> {
        let tile = match self.can_place(position, kind) {
            Ok(tile) => tile,
            Err(err) => {
                log::debug!("[Build] Rejected {kind}: {err}");
                return Err(err);
            }
        };

        let id = StructureId(self.next_id);
        self.next_id += 1;

        let snapped = self.grid.snap_to_grid(position);
        let structure = Structure::new(id, kind, snapped, yaw, self.grid.grid_size);
        let claimed = self.tiles.claim(tile, kind, id);
        debug_assert!(claimed, "tile slot vanished between check and claim");
        self.structures.push(structure);

        log::debug!(
            "[Build] Placed {kind} {id} at ({:.1}, {:.1}, {:.1}) tile {}",
            snapped.x,
            snapped.y,
            snapped.z,
            tile.world_label(self.grid.grid_size),
        );

        Ok(id)
    }

    /// Remove a structure and clear its tile slot.
    ///
    /// The remaining structures keep their relative order.
    pub fn remove(&mut self, id: StructureId) -> Option<Structure> {
        let index = self.structures.iter().position(|s| s.id == id)?;
        let structure = self.structures.remove(index);
        let tile = self.grid.tile_key(structure.position);
        self.tiles.release(tile, structure.kind, id);

        log::debug!(
            "[Build] Removed {} {} from tile {}",
            structure.kind,
            id,
            tile.world_label(self.grid.grid_size),
        );

        Some(structure)
    }

    pub fn get(&self, id: StructureId) -> Option<&Structure> {
        self.structures.iter().find(|s| s.id == id)
    }

    /// Per-kind occupancy of `tile`.
    pub fn query(&self, tile: TileKey) -> TileSlots {
        self.tiles.query(tile)
    }

    /// Structures in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Structure> {
        self.structures.iter()
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn tile_index(&self) -> &TileIndex {
        &self.tiles
    }
}
