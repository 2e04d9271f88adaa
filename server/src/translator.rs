use log::{info, warn};

use gridsync_shared::{CellChange, LogLevel, MapOp, TileAsset, TileName};

use crate::state_table::{StateTable, TableDelta};

// ChangeTranslator

/// Consumes the local grid store's change notifications and converts each
/// into a minimal replication operation, folding it into the authoritative
/// state table as it goes.
///
/// The translator is the table's only writer.
pub struct ChangeTranslator {
    table: StateTable,
}

impl ChangeTranslator {
    pub fn new() -> Self {
        Self {
            table: StateTable::new(),
        }
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    /// Translates one notification batch, in delivered order, into the
    /// operations to broadcast. Unchanged cells produce nothing.
    pub fn translate<T: TileAsset>(
        &mut self,
        changes: &[CellChange<T>],
        log_level: LogLevel,
    ) -> Vec<MapOp> {
        let mut ops = Vec::new();

        for change in changes {
            let occupant = change.tile.as_ref().map(|tile| match tile.asset_name() {
                Some(name) => TileName::from(name),
                None => {
                    // still tracked positionally, so later removal is detectable
                    if log_level >= LogLevel::Warning {
                        warn!(
                            "ChangeTranslator: tile at {} has no discoverable name",
                            change.position
                        );
                    }
                    TileName::empty()
                }
            });

            let Some(delta) = self.table.apply_change(change.position, occupant) else {
                continue;
            };

            let op = match delta {
                TableDelta::Added(position, name) => {
                    if log_level >= LogLevel::Verbose {
                        info!("Added tile {} at {}", name, position);
                    }
                    MapOp::Upsert { position, name }
                }
                TableDelta::Updated(position, name) => {
                    if log_level >= LogLevel::Verbose {
                        info!("Set tile {} at {}", name, position);
                    }
                    MapOp::Upsert { position, name }
                }
                TableDelta::Removed(position) => {
                    if log_level >= LogLevel::Verbose {
                        info!("Removed tile at {}", position);
                    }
                    MapOp::Remove { position }
                }
            };
            ops.push(op);
        }

        ops
    }
}
