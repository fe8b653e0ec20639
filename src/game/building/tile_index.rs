//! Spatial grid index
//!
//! Maps each occupied tile to the structures standing on it, one slot per
//! archetype. The slot layout is what enforces the placement rule: a tile
//! can hold a wall, a floor, a ramp and a cone at the same time, but never
//! two of the same kind.

use std::collections::HashMap;

use super::structure::{StructureId, StructureKind};
use crate::world::TileKey;

/// Per-kind occupancy of one tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileSlots {
    slots: [Option<StructureId>; StructureKind::ALL.len()],
}

impl TileSlots {
    #[inline]
    pub fn get(&self, kind: StructureKind) -> Option<StructureId> {
        self.slots[kind.index()]
    }

    #[inline]
    pub fn is_occupied(&self, kind: StructureKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied `(kind, id)` pairs in archetype order.
    pub fn iter(&self) -> impl Iterator<Item = (StructureKind, StructureId)> + '_ {
        StructureKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|id| (kind, id)))
    }

    fn set(&mut self, kind: StructureKind, id: Option<StructureId>) {
        self.slots[kind.index()] = id;
    }
}

/// Tile → per-kind occupancy map.
///
/// Tiles are created lazily on first occupancy and dropped again once every
/// slot is empty.
#[derive(Debug, Default)]
pub struct TileIndex {
    tiles: HashMap<TileKey, TileSlots>,
}

impl TileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Occupancy of `tile`; unknown tiles read as empty.
    pub fn query(&self, tile: TileKey) -> TileSlots {
        self.tiles.get(&tile).copied().unwrap_or_default()
    }

    pub fn is_occupied(&self, tile: TileKey, kind: StructureKind) -> bool {
        self.query(tile).is_occupied(kind)
    }

    /// Claim the `kind` slot of `tile` for `id`.
    ///
    /// Returns `false` and leaves the index untouched if the slot is taken.
    pub fn claim(&mut self, tile: TileKey, kind: StructureKind, id: StructureId) -> bool {
        let slots = self.tiles.entry(tile).or_default();
        if slots.is_occupied(kind) {
            return false;
        }
        slots.set(kind, Some(id));
        true
    }

    /// Clear the `kind` slot of `tile` if it still holds `id`.
    pub fn release(&mut self, tile: TileKey, kind: StructureKind, id: StructureId) -> bool {
        let Some(slots) = self.tiles.get_mut(&tile) else {
            return false;
        };
        if slots.get(kind) != Some(id) {
            return false;
        }
        slots.set(kind, None);
        if slots.is_empty() {
            self.tiles.remove(&tile);
        }
        true
    }

    /// Number of tiles holding at least one structure.
    pub fn occupied_tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TileKey, &TileSlots)> {
        self.tiles.iter()
    }
}
