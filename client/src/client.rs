use std::collections::HashMap;

use log::{debug, warn};

use gridsync_shared::{
    CellPos, GridSyncConfig, LogLevel, SyncMessage, TileAsset, TileGrid, TileName, TileRegistry,
    Transport,
};

use crate::{applier::OpApplier, gateway::CommandGateway};

/// The observer role for one replicated grid.
///
/// Holds the operation applier (with the read-only mirror of the authority's
/// table) and the command gateway. Like the server, it borrows the grid and
/// the transport per call rather than owning them.
pub struct GridClient<T: TileAsset> {
    applier: OpApplier<T>,
    gateway: CommandGateway,
    log_level: LogLevel,
}

impl<T: TileAsset> GridClient<T> {
    /// Creates the observer, building its tile registry the same way the
    /// authority builds its own.
    pub fn new<G: TileGrid<Tile = T>>(config: GridSyncConfig<T>, grid: &G) -> Self {
        let registry = TileRegistry::build(&config, grid);

        Self {
            applier: OpApplier::new(registry, config.log_level),
            gateway: CommandGateway::new(config.log_level),
            log_level: config.log_level,
        }
    }

    // Incoming stream

    /// Applies one incoming payload, strictly in arrival order: the initial
    /// snapshot or a subsequent delta. Invoked while this process is
    /// authoritative, it does nothing: the applier must never feed back
    /// into the authority's change translator.
    pub fn receive<G, X>(&mut self, grid: &mut G, transport: &X, payload: &[u8])
    where
        G: TileGrid<Tile = T>,
        X: Transport,
    {
        if transport.is_authority() {
            debug!("GridClient: payload received while authoritative, ignoring");
            return;
        }

        let message = match SyncMessage::decode(payload) {
            Ok(message) => message,
            Err(e) => {
                if self.log_level >= LogLevel::Warning {
                    warn!("GridClient: dropping malformed payload: {}", e);
                }
                return;
            }
        };

        match message {
            SyncMessage::Snapshot(snapshot) => self.applier.apply_snapshot(grid, &snapshot),
            SyncMessage::Op(op) => self.applier.apply_op(grid, &op),
            SyncMessage::Setting(setting) => self.applier.apply_setting(grid, &setting),
        }
    }

    /// Discards mirrored state after a disconnect. The next connection's
    /// snapshot rebuilds the mirror from scratch.
    pub fn disconnected(&mut self) {
        self.applier.reset();
    }

    // Mirror

    /// The read-only mirror of the authority's table.
    pub fn mirror(&self) -> &HashMap<CellPos, TileName> {
        self.applier.mirror()
    }

    /// Mirrored occupant name of one cell, if any.
    pub fn tile_name(&self, position: &CellPos) -> Option<&TileName> {
        self.applier.mirror().get(position)
    }

    // Ownership & requests

    /// Marks whether the local caller owns the interactive surface.
    pub fn set_owner(&mut self, owner: bool) {
        self.gateway.set_owner(owner);
    }

    pub fn is_owner(&self) -> bool {
        self.gateway.is_owner()
    }

    /// Requests that the authority occupy a cell.
    pub fn request_set_tile<X: Transport>(
        &mut self,
        transport: &mut X,
        position: CellPos,
        name: TileName,
    ) {
        self.gateway.request_set_tile(transport, position, name);
    }

    /// Requests that the authority empty a cell, if the mirror shows it
    /// occupied.
    pub fn request_remove_tile<X: Transport>(&mut self, transport: &mut X, position: CellPos) {
        self.gateway
            .request_remove_tile(transport, self.applier.mirror(), position);
    }

    /// Requests that the authority clear the whole grid.
    pub fn request_clear_all<X: Transport>(&mut self, transport: &mut X) {
        self.gateway.request_clear_all(transport);
    }
}
