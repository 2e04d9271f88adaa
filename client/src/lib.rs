//! # Gridsync Client
//! The observer role: replays the authority's snapshot + operation stream
//! against the local grid store, maintains a read-only mirror of the
//! replicated table, and originates owner-gated mutation requests.

#![deny(trivial_casts, trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod shared {
    pub use gridsync_shared::{
        CellChange, CellPos, GridSetting, GridSettings, GridSnapshot, GridSyncConfig, LogLevel,
        MapOp, ObserverKey, SyncMessage, TileAsset, TileGrid, TileName, TileRecord, TileRegistry,
        Transport, WireError,
    };
}

mod applier;
mod client;
mod gateway;

pub use applier::OpApplier;
pub use client::GridClient;
pub use gateway::CommandGateway;
