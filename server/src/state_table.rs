use std::collections::HashMap;

use gridsync_shared::{CellPos, TileName, TileRecord};

// TableDelta

/// How one change notification altered the table. `Added` and `Updated` are
/// distinguished for diagnostics only; both reach the wire as an upsert.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TableDelta {
    Added(CellPos, TileName),
    Updated(CellPos, TileName),
    Removed(CellPos),
}

// StateTable

/// The authoritative mapping from grid position to symbolic tile name.
///
/// Single source of truth for replication. Invariant: the table's content
/// equals the set of non-empty cells of the authority's local grid store, as
/// observed through the store's own change notifications. Mutated only by
/// the change translator; observers hold a read-only mirror, never this.
pub struct StateTable {
    tiles: HashMap<CellPos, TileName>,
}

impl StateTable {
    pub fn new() -> Self {
        Self {
            tiles: HashMap::new(),
        }
    }

    /// Folds one `(position, occupant)` notification into the table.
    /// Returns `None` when the notification changes nothing.
    ///
    /// An occupant with an empty name is still inserted: the cell is
    /// occupied and its later removal must be detectable, even though the
    /// name cannot resolve on observers.
    pub fn apply_change(
        &mut self,
        position: CellPos,
        occupant: Option<TileName>,
    ) -> Option<TableDelta> {
        match occupant {
            None => {
                if self.tiles.remove(&position).is_some() {
                    Some(TableDelta::Removed(position))
                } else {
                    None
                }
            }
            Some(name) => match self.tiles.get(&position) {
                None => {
                    self.tiles.insert(position, name.clone());
                    Some(TableDelta::Added(position, name))
                }
                Some(existing) if *existing != name => {
                    self.tiles.insert(position, name.clone());
                    Some(TableDelta::Updated(position, name))
                }
                Some(_) => None,
            },
        }
    }

    pub fn get(&self, position: &CellPos) -> Option<&TileName> {
        self.tiles.get(position)
    }

    pub fn contains(&self, position: &CellPos) -> bool {
        self.tiles.contains_key(position)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Current contents as snapshot records, in no particular order.
    pub fn records(&self) -> Vec<TileRecord> {
        self.tiles
            .iter()
            .map(|(position, name)| TileRecord::new(*position, name.clone()))
            .collect()
    }
}
