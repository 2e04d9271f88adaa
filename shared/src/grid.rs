use crate::{position::CellPos, settings::GridSetting, tile::TileAsset};

// TileGrid

/// The host engine's local grid store, as consumed by replication.
///
/// The store holds the actual cell contents for the current process. The
/// engine glue implementing this trait must also deliver every local edit
/// batch to the authority's server (see `GridServer::sync_changes` in
/// `gridsync-server`). Emitting a batch on every mutation is a hard contract
/// of this abstraction: a mutation path that does not notify will silently
/// diverge the replicated table from the real grid.
pub trait TileGrid {
    type Tile: TileAsset;

    /// Current occupant of the cell, if any.
    fn tile(&self, position: &CellPos) -> Option<Self::Tile>;

    /// Sets or clears one cell. `None` empties the cell.
    fn set_tile(&mut self, position: &CellPos, tile: Option<Self::Tile>);

    /// Empties every cell.
    fn clear_all(&mut self);

    /// Every occupied cell with its handle. Used to pre-populate the tile
    /// registry from current grid contents at configuration time.
    fn occupied_tiles(&self) -> Vec<(CellPos, Self::Tile)>;

    /// Applies one replicated scalar setting to the store's own
    /// configuration (cell size, tint, orientation, ...).
    fn apply_setting(&mut self, setting: &GridSetting);
}

// CellChange

/// One changed cell, as notified by the local grid store after an edit batch.
///
/// Carries the engine handle; the change translator derives the symbolic
/// name from it. `None` means the cell became empty.
#[derive(Clone, Debug)]
pub struct CellChange<T> {
    pub position: CellPos,
    pub tile: Option<T>,
}

impl<T> CellChange<T> {
    pub fn new(position: CellPos, tile: Option<T>) -> Self {
        Self { position, tile }
    }
}
