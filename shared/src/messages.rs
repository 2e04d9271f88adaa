use serde::{Deserialize, Serialize};

use crate::{
    error::WireError,
    operation::{GridSnapshot, MapOp},
    position::CellPos,
    settings::GridSetting,
    tile::TileName,
};

// SyncMessage

/// Authority → observer payload, delivered over one reliable, ordered
/// channel per observer. Exactly one `Snapshot` opens each observer's
/// stream; `Op` and `Setting` follow in authority order.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum SyncMessage {
    Snapshot(GridSnapshot),
    Op(MapOp),
    Setting(GridSetting),
}

impl SyncMessage {
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        Ok(rmp_serde::to_vec(self)?)
    }

    pub fn decode(payload: &[u8]) -> Result<Self, WireError> {
        Ok(rmp_serde::from_slice(payload)?)
    }
}

// GridCommand

/// Owner → authority mutation request.
///
/// Deliberately a message, not a function call: the three-hop round trip
/// (gateway → authority's grid store → translated broadcast) is asynchronous
/// and unconfirmed, and the type makes that explicit. The authority executes
/// these against its local grid store, never against the replicated table
/// directly.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GridCommand {
    SetTile { position: CellPos, name: TileName },
    RemoveTile { position: CellPos },
    ClearAll,
}

impl GridCommand {
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        Ok(rmp_serde::to_vec(self)?)
    }

    pub fn decode(payload: &[u8]) -> Result<Self, WireError> {
        Ok(rmp_serde::from_slice(payload)?)
    }
}
