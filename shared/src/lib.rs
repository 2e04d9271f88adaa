//! # Gridsync Shared
//! Common functionality shared between gridsync-server & gridsync-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod config;
mod error;
mod grid;
mod messages;
mod operation;
mod position;
mod registry;
mod settings;
mod tile;
mod transport;

pub use config::{GridSyncConfig, LogLevel};
pub use error::WireError;
pub use grid::{CellChange, TileGrid};
pub use messages::{GridCommand, SyncMessage};
pub use operation::{GridSnapshot, MapOp};
pub use position::CellPos;
pub use registry::TileRegistry;
pub use settings::{
    CellLayout, CellSwizzle, Color, GridSetting, GridSettings, TileOrientation, Vec3,
};
pub use tile::{TileAsset, TileName, TileRecord};
pub use transport::{ObserverKey, Transport};
