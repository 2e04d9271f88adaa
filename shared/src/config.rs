// LogLevel

/// Gates per-operation diagnostic output. No operational effect.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    Off,
    /// Recoverable conditions only: resolution misses, dropped payloads.
    Warning,
    /// Every translated and applied operation.
    Verbose,
}

// GridSyncConfig

/// Contains config properties used by both the authority and observer roles.
#[derive(Clone)]
pub struct GridSyncConfig<T> {
    /// Ordered list of tiles available for symbolic resolution. Defines the
    /// process's tile registry; both sides must agree on the names in it.
    pub tiles: Vec<T>,
    /// True to clear the local grid when the authority role starts.
    pub clear_on_start: bool,
    /// True to also pre-populate the tile registry from current grid
    /// contents when the role is constructed.
    pub cache_grid_tiles: bool,
    /// Diagnostic verbosity.
    pub log_level: LogLevel,
}

impl<T> Default for GridSyncConfig<T> {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            clear_on_start: true,
            cache_grid_tiles: true,
            log_level: LogLevel::Warning,
        }
    }
}

impl<T> GridSyncConfig<T> {
    pub fn with_tiles(tiles: Vec<T>) -> Self {
        Self {
            tiles,
            ..Self::default()
        }
    }
}
