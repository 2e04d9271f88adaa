use std::collections::HashMap;

use log::warn;

use crate::{
    config::{GridSyncConfig, LogLevel},
    grid::TileGrid,
    tile::{TileAsset, TileName},
};

// TileRegistry

/// Per-process mapping from symbolic tile name to engine tile handle.
///
/// Built once from the configured tile list, append-only afterwards; lookup
/// by name is the only runtime operation. A lookup miss returns `None` and
/// is a recoverable condition, never an error.
pub struct TileRegistry<T: TileAsset> {
    tiles: HashMap<TileName, T>,
}

impl<T: TileAsset> TileRegistry<T> {
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    /// Builds the registry for one process: the configured tile list first,
    /// then (if configured) any handles already present in the local grid.
    pub fn build<G: TileGrid<Tile = T>>(config: &GridSyncConfig<T>, grid: &G) -> Self {
        let mut registry = Self::new();

        for tile in &config.tiles {
            registry.register(tile.clone());
        }

        if config.cache_grid_tiles {
            for (_, tile) in grid.occupied_tiles() {
                registry.register(tile);
            }
        }

        if registry.is_empty() && config.log_level >= LogLevel::Warning {
            warn!("TileRegistry: no tiles registered, nothing will resolve");
        }

        registry
    }

    /// Adds one handle under its own name. Returns whether it was added:
    /// unnamed handles cannot be registered, and a duplicate name keeps its
    /// first binding.
    pub fn register(&mut self, tile: T) -> bool {
        let Some(name) = tile.asset_name() else {
            return false;
        };
        let name = TileName::from(name);
        if self.tiles.contains_key(&name) {
            return false;
        }
        self.tiles.insert(name, tile);
        true
    }

    /// Resolves a symbolic name back to a local handle.
    pub fn resolve(&self, name: &TileName) -> Option<&T> {
        self.tiles.get(name)
    }

    pub fn contains(&self, name: &TileName) -> bool {
        self.tiles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
