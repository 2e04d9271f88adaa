use std::fmt;

use serde::{Deserialize, Serialize};

// CellPos

/// An integer coordinate addressing one cell of the grid.
///
/// The third component conventionally holds a fixed layer value and does not
/// participate in addressing beyond that layer. Equality is exact
/// component-wise equality, which makes this the map key for all replicated
/// tile state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// A position on the default layer (`z = 0`).
    pub const fn flat(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
