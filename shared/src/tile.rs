use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::CellPos;

// TileName

/// The stable symbolic identifier of a tile kind.
///
/// Engine-local tile handles cannot cross a process boundary, so this name is
/// what travels on the wire; each side resolves it back to a handle through
/// its own [`TileRegistry`](crate::TileRegistry).
///
/// The empty name is representable on purpose: a handle with no discoverable
/// name is still tracked positionally by the authority (so its later removal
/// is detectable) even though observers cannot resolve it.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileName(String);

impl TileName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub const fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TileName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for TileName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// TileRecord

/// One occupied cell: a position and the symbolic name of its occupant.
/// A position with no record is implicitly empty.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TileRecord {
    pub position: CellPos,
    pub name: TileName,
}

impl TileRecord {
    pub fn new(position: CellPos, name: TileName) -> Self {
        Self { position, name }
    }
}

impl fmt::Display for TileRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.position)
    }
}

// TileAsset

/// The engine-side tile handle, as seen by this crate.
///
/// Implemented by the host engine's tile type. The only thing replication
/// needs from a handle is its symbolic name; `None` means the handle has no
/// discoverable name and cannot be resolved on remote processes.
pub trait TileAsset: Clone {
    fn asset_name(&self) -> Option<&str>;
}
