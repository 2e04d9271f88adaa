use serde::{Deserialize, Serialize};

use crate::{
    position::CellPos,
    settings::GridSetting,
    tile::{TileName, TileRecord},
};

// MapOp

/// One incremental instruction in the replicated operation stream.
///
/// The authority distinguishes adding a tile from overwriting one, but both
/// are idempotent on application, so they collapse to `Upsert` on the wire:
/// replaying an `Upsert` against an already-matching cell is a no-op, which
/// is what lets an observer tolerate an overlapping snapshot + delta window
/// after a reconnect.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MapOp {
    /// Drop every cell.
    Clear,
    /// Empty one cell.
    Remove { position: CellPos },
    /// Occupy one cell, inserting or overwriting.
    Upsert { position: CellPos, name: TileName },
}

// GridSnapshot

/// The full current state of the authority, sent once to each newly
/// connecting observer. Deltas follow on the same ordered channel.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub tiles: Vec<TileRecord>,
    pub settings: Vec<GridSetting>,
}

impl GridSnapshot {
    pub fn new(tiles: Vec<TileRecord>, settings: Vec<GridSetting>) -> Self {
        Self { tiles, settings }
    }
}
