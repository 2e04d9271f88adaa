use std::collections::HashMap;

use log::{info, warn};

use gridsync_shared::{
    CellPos, GridSetting, GridSnapshot, LogLevel, MapOp, TileAsset, TileGrid, TileName,
    TileRegistry,
};

// OpApplier

/// Replays the incoming operation stream against the local grid store,
/// resolving symbolic names through the tile registry.
///
/// Also maintains the observer's read-only mirror of the authority's table.
/// The mirror records every name the stream delivers, resolvable or not, so
/// it stays equal to the table even when a cell degrades to empty locally.
pub struct OpApplier<T: TileAsset> {
    registry: TileRegistry<T>,
    mirror: HashMap<CellPos, TileName>,
    log_level: LogLevel,
}

impl<T: TileAsset> OpApplier<T> {
    pub fn new(registry: TileRegistry<T>, log_level: LogLevel) -> Self {
        Self {
            registry,
            mirror: HashMap::new(),
            log_level,
        }
    }

    pub fn mirror(&self) -> &HashMap<CellPos, TileName> {
        &self.mirror
    }

    /// Discards the mirror. Called on disconnect; the next snapshot rebuilds
    /// everything from scratch.
    pub fn reset(&mut self) {
        self.mirror.clear();
    }

    /// Applies the initial bulk snapshot: settings, then a full rebuild of
    /// the grid contents.
    pub fn apply_snapshot<G: TileGrid<Tile = T>>(&mut self, grid: &mut G, snapshot: &GridSnapshot) {
        for setting in &snapshot.settings {
            grid.apply_setting(setting);
        }

        grid.clear_all();
        self.mirror.clear();
        for record in &snapshot.tiles {
            self.set_cell(grid, record.position, &record.name);
        }

        if self.log_level >= LogLevel::Verbose {
            info!("OpApplier: applied snapshot of {} tiles", snapshot.tiles.len());
        }
    }

    /// Applies one delta operation. Stale and duplicate operations land as
    /// no-ops, never errors.
    pub fn apply_op<G: TileGrid<Tile = T>>(&mut self, grid: &mut G, op: &MapOp) {
        if self.log_level >= LogLevel::Verbose {
            info!("OpApplier: {:?}", op);
        }

        match op {
            MapOp::Clear => {
                grid.clear_all();
                self.mirror.clear();
            }
            MapOp::Remove { position } => {
                grid.set_tile(position, None);
                self.mirror.remove(position);
            }
            MapOp::Upsert { position, name } => {
                self.set_cell(grid, *position, name);
            }
        }
    }

    /// Applies one replicated scalar setting to the local grid store.
    pub fn apply_setting<G: TileGrid<Tile = T>>(&mut self, grid: &mut G, setting: &GridSetting) {
        if self.log_level >= LogLevel::Verbose {
            info!("OpApplier: setting {} updated", setting.name());
        }
        grid.apply_setting(setting);
    }

    /// Resolves and writes one cell. A resolution miss leaves the cell empty
    /// and is logged as recoverable; the mirror records the name regardless.
    fn set_cell<G: TileGrid<Tile = T>>(&mut self, grid: &mut G, position: CellPos, name: &TileName) {
        match self.registry.resolve(name) {
            Some(tile) => {
                let tile = tile.clone();
                grid.set_tile(&position, Some(tile));
            }
            None => {
                if self.log_level >= LogLevel::Warning {
                    warn!(
                        "OpApplier: no tile named '{}' in registry, leaving {} empty",
                        name, position
                    );
                }
                grid.set_tile(&position, None);
            }
        }
        self.mirror.insert(position, name.clone());
    }
}
