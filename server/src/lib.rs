//! # Gridsync Server
//! The authority role: owns the replicated tile table, translates local grid
//! edits into the minimal operation stream, executes owner commands, and
//! bootstraps late-joining observers with snapshots.

#![deny(trivial_casts, trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod shared {
    pub use gridsync_shared::{
        CellChange, CellPos, GridSetting, GridSettings, GridSnapshot, GridSyncConfig, LogLevel,
        MapOp, ObserverKey, SyncMessage, TileAsset, TileGrid, TileName, TileRecord, TileRegistry,
        Transport, WireError,
    };
}

mod server;
mod state_table;
mod translator;

pub use server::GridServer;
pub use state_table::{StateTable, TableDelta};
pub use translator::ChangeTranslator;
