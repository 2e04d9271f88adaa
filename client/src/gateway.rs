use std::collections::HashMap;

use log::{debug, error};

use gridsync_shared::{CellPos, GridCommand, LogLevel, TileName, Transport};

// CommandGateway

/// Originates mutation requests toward the authority.
///
/// Only the entity recognized as the owning controller of the interactive
/// surface may issue requests from it; non-owner requests are dropped here,
/// before transmission. That drop is a client-side optimization, not a
/// security boundary, since the authority remains the only place state is
/// actually mutated.
pub struct CommandGateway {
    owner: bool,
    log_level: LogLevel,
}

impl CommandGateway {
    pub fn new(log_level: LogLevel) -> Self {
        Self {
            owner: false,
            log_level,
        }
    }

    /// Marks whether the local caller owns the interactive surface. Set by
    /// the engine glue from the transport's ownership assignment.
    pub fn set_owner(&mut self, owner: bool) {
        self.owner = owner;
    }

    pub fn is_owner(&self) -> bool {
        self.owner
    }

    /// Requests that the authority occupy a cell. Fire-and-forget.
    pub fn request_set_tile<X: Transport>(
        &self,
        transport: &mut X,
        position: CellPos,
        name: TileName,
    ) {
        if !self.authorized("set tile") {
            return;
        }
        self.send(transport, &GridCommand::SetTile { position, name });
    }

    /// Requests that the authority empty a cell. Skips the round trip when
    /// the caller's own mirror shows the cell already empty. A latency
    /// optimization, not required for correctness.
    pub fn request_remove_tile<X: Transport>(
        &self,
        transport: &mut X,
        mirror: &HashMap<CellPos, TileName>,
        position: CellPos,
    ) {
        if !self.authorized("remove tile") {
            return;
        }
        if !mirror.contains_key(&position) {
            return;
        }
        self.send(transport, &GridCommand::RemoveTile { position });
    }

    /// Requests that the authority clear the whole grid. Fire-and-forget.
    pub fn request_clear_all<X: Transport>(&self, transport: &mut X) {
        if !self.authorized("clear all") {
            return;
        }
        self.send(transport, &GridCommand::ClearAll);
    }

    fn authorized(&self, what: &str) -> bool {
        if self.owner {
            return true;
        }
        if self.log_level >= LogLevel::Verbose {
            debug!("CommandGateway: non-owner {} request dropped", what);
        }
        false
    }

    fn send<X: Transport>(&self, transport: &mut X, command: &GridCommand) {
        match command.encode() {
            Ok(payload) => transport.send_command(payload),
            Err(e) => error!("CommandGateway: failed to encode command: {}", e),
        }
    }
}
