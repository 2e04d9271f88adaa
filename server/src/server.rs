use log::{debug, error, warn};

use gridsync_shared::{
    CellChange, GridCommand, GridSetting, GridSettings, GridSnapshot, GridSyncConfig, LogLevel,
    MapOp, ObserverKey, SyncMessage, TileAsset, TileGrid, TileRegistry, Transport,
};

use crate::{state_table::StateTable, translator::ChangeTranslator};

/// The authority role for one replicated grid.
///
/// Owns the replicated state table (via the change translator), the tile
/// registry, the scalar settings, and the set of connected observers. The
/// local grid store and the transport stay outside and are passed into the
/// methods that need them, so the host engine keeps ownership of both.
pub struct GridServer<T: TileAsset> {
    config: GridSyncConfig<T>,
    registry: TileRegistry<T>,
    translator: ChangeTranslator,
    settings: GridSettings,
    observers: Vec<ObserverKey>,
    running: bool,
}

impl<T: TileAsset> GridServer<T> {
    /// Creates the authority for a grid. Builds the tile registry from the
    /// configured tile list (plus current grid contents, if configured).
    pub fn new<G: TileGrid<Tile = T>>(config: GridSyncConfig<T>, grid: &G) -> Self {
        let registry = TileRegistry::build(&config, grid);

        Self {
            config,
            registry,
            translator: ChangeTranslator::new(),
            settings: GridSettings::default(),
            observers: Vec::new(),
            running: false,
        }
    }

    // Lifecycle

    /// Starts the authority role: the table begins empty, and the local grid
    /// is optionally cleared so both agree from the first notification.
    pub fn start<G: TileGrid<Tile = T>>(&mut self, grid: &mut G) {
        if self.running {
            return;
        }
        if self.config.clear_on_start {
            grid.clear_all();
        }
        self.translator.clear_table();
        self.settings = GridSettings::default();
        self.running = true;
    }

    /// Stops the authority role and discards the table. Observer mirrors are
    /// rebuilt from a fresh snapshot if the role ever starts again.
    pub fn stop(&mut self) {
        self.running = false;
        self.translator.clear_table();
        self.observers.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read access to the authoritative table.
    pub fn table(&self) -> &StateTable {
        self.translator.table()
    }

    /// The authority's current scalar settings.
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    // Observers

    /// Registers a newly connected observer and sends it the initial bulk
    /// snapshot: the table's current contents plus the current settings, not
    /// the operation history.
    pub fn observer_connected<X: Transport>(&mut self, transport: &mut X, observer: &ObserverKey) {
        if !self.running {
            warn!("GridServer: observer connected while authority not started, ignoring");
            return;
        }
        if !self.observers.contains(observer) {
            self.observers.push(*observer);
        }

        let snapshot = GridSnapshot::new(self.table().records(), self.settings.all());
        if let Some(payload) = encode(&SyncMessage::Snapshot(snapshot)) {
            transport.send_to(observer, payload);
        }
    }

    /// Forgets a disconnected observer. Its stream just stops; no cleanup is
    /// needed on either side.
    pub fn observer_disconnected(&mut self, observer: &ObserverKey) {
        self.observers.retain(|key| key != observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // Change translation

    /// Processes one batch of change notifications from the local grid
    /// store, in delivered order: folds each into the table and broadcasts
    /// the resulting operations to every connected observer.
    ///
    /// Batches observed while this process is not authoritative (or the
    /// role is stopped) are ignored.
    pub fn sync_changes<X: Transport>(&mut self, transport: &mut X, changes: &[CellChange<T>]) {
        if !transport.is_authority() {
            debug!("GridServer: change notifications while not authoritative, ignoring");
            return;
        }
        if !self.running || changes.is_empty() {
            return;
        }

        let ops = self.translator.translate(changes, self.config.log_level);
        for op in ops {
            self.broadcast(transport, &SyncMessage::Op(op));
        }
    }

    // Commands

    /// Executes a mutation request received from an owning controller.
    ///
    /// Requests mutate the local grid store, never the table: the store's
    /// change notifications then drive replication like any local edit.
    /// Malformed payloads and unresolvable names are logged and dropped.
    pub fn receive_command<G, X>(&mut self, grid: &mut G, transport: &mut X, payload: &[u8])
    where
        G: TileGrid<Tile = T>,
        X: Transport,
    {
        if !self.running {
            return;
        }
        let command = match GridCommand::decode(payload) {
            Ok(command) => command,
            Err(e) => {
                if self.config.log_level >= LogLevel::Warning {
                    warn!("GridServer: dropping malformed command: {}", e);
                }
                return;
            }
        };

        match command {
            GridCommand::SetTile { position, name } => match self.registry.resolve(&name) {
                Some(tile) => {
                    let tile = tile.clone();
                    grid.set_tile(&position, Some(tile));
                }
                None => {
                    if self.config.log_level >= LogLevel::Warning {
                        warn!(
                            "GridServer: cannot resolve tile '{}' for set at {}",
                            name, position
                        );
                    }
                }
            },
            GridCommand::RemoveTile { position } => {
                grid.set_tile(&position, None);
            }
            GridCommand::ClearAll => {
                self.clear_all(grid, transport);
            }
        }
    }

    /// Clears the grid everywhere: one `Clear` operation to every observer,
    /// then the local store. The store's own removal notifications that
    /// follow find an already-empty table and translate to nothing.
    pub fn clear_all<G, X>(&mut self, grid: &mut G, transport: &mut X)
    where
        G: TileGrid<Tile = T>,
        X: Transport,
    {
        if !self.running {
            return;
        }
        self.translator.clear_table();
        self.broadcast(transport, &SyncMessage::Op(MapOp::Clear));
        grid.clear_all();
    }

    // Settings

    /// Assigns one scalar setting: applied to the authority's own grid and
    /// broadcast to observers as a full replacement value. Assignments while
    /// not authoritative are ignored.
    pub fn set_setting<G, X>(&mut self, grid: &mut G, transport: &mut X, setting: GridSetting)
    where
        G: TileGrid<Tile = T>,
        X: Transport,
    {
        if !transport.is_authority() {
            debug!(
                "GridServer: setting {} assigned while not authoritative, ignoring",
                setting.name()
            );
            return;
        }
        self.settings.apply(&setting);
        grid.apply_setting(&setting);
        self.broadcast(transport, &SyncMessage::Setting(setting));
    }

    // Internal

    /// Sends one message to every connected observer. The send order is
    /// shuffled per broadcast so no observer is consistently serviced first.
    fn broadcast<X: Transport>(&self, transport: &mut X, message: &SyncMessage) {
        let Some(payload) = encode(message) else {
            return;
        };

        let mut keys = self.observers.clone();
        fastrand::shuffle(&mut keys);
        for key in keys {
            transport.send_to(&key, payload.clone());
        }
    }
}

fn encode(message: &SyncMessage) -> Option<Vec<u8>> {
    match message.encode() {
        Ok(payload) => Some(payload),
        Err(e) => {
            error!("GridServer: failed to encode outgoing message: {}", e);
            None
        }
    }
}
