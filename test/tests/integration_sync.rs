/// Integration tests for the authority → observer operation stream:
/// edit translation, batch ordering, unnamed-handle tracking, and role
/// guards.
use gridsync_server::GridServer;
use gridsync_shared::{CellChange, CellPos, GridSyncConfig, TileGrid, TileName};
use gridsync_test::{LocalHub, MemoryGrid, TestRig, TestTile};

#[test]
fn edits_replicate_to_observer() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rig = TestRig::new(&["grass", "wall"]);
    let key = rig.connect_observer();
    rig.flush();

    let p = CellPos::flat(0, 0);

    // add
    rig.server_grid.set_tile(&p, Some(TestTile::named("grass")));
    rig.flush();
    assert_eq!(
        rig.observer(&key).grid.name_at(&p),
        Some("grass".to_string()),
        "observer should see the added tile"
    );

    // overwrite
    rig.server_grid.set_tile(&p, Some(TestTile::named("wall")));
    rig.flush();
    assert_eq!(
        rig.observer(&key).grid.name_at(&p),
        Some("wall".to_string()),
        "observer should see the overwritten tile"
    );
    assert_eq!(
        rig.observer(&key).client.tile_name(&p),
        Some(&TileName::from("wall")),
        "mirror should track the overwrite"
    );

    // remove
    rig.server_grid.set_tile(&p, None);
    rig.flush();
    assert!(rig.observer(&key).grid.is_empty());
    assert!(rig.observer(&key).client.mirror().is_empty());
}

#[test]
fn table_equals_non_empty_cells_of_authority_grid() {
    let mut rig = TestRig::new(&["grass", "wall"]);

    rig.server_grid
        .set_tile(&CellPos::flat(0, 0), Some(TestTile::named("grass")));
    rig.server_grid
        .set_tile(&CellPos::flat(1, 0), Some(TestTile::named("wall")));
    rig.server_grid
        .set_tile(&CellPos::flat(1, 0), Some(TestTile::named("wall"))); // rewrite, no-op
    rig.server_grid.set_tile(&CellPos::flat(2, 0), None); // already empty, no-op
    rig.flush();

    let grid_names = rig.server_grid.cell_names();
    assert_eq!(rig.server.table().len(), grid_names.len());
    for record in rig.server.table().records() {
        assert_eq!(
            grid_names.get(&record.position).map(String::as_str),
            Some(record.name.as_str()),
            "table and grid disagree at {}",
            record.position
        );
    }
}

/// Two writes to the same position in one batch must apply in batch order on
/// every observer: last write wins.
#[test]
fn same_position_writes_apply_in_order() {
    let mut rig = TestRig::new(&["a", "b"]);
    let key = rig.connect_observer();
    rig.flush();

    let p = CellPos::flat(3, 3);
    rig.server_grid.set_tile(&p, Some(TestTile::named("a")));
    rig.server_grid.set_tile(&p, Some(TestTile::named("b")));
    rig.flush();

    assert_eq!(
        rig.observer(&key).grid.name_at(&p),
        Some("b".to_string()),
        "observer must end with the second write, never the first"
    );
}

/// A handle with no discoverable name is tracked positionally so its later
/// removal still replicates, even though observers cannot resolve it.
#[test]
fn unnamed_tile_is_tracked_and_removable() {
    let mut rig = TestRig::new(&["grass"]);
    let key = rig.connect_observer();
    rig.flush();

    let p = CellPos::flat(7, 7);
    rig.server_grid.set_tile(&p, Some(TestTile::unnamed()));
    rig.flush();

    assert!(rig.server.table().contains(&p), "authority tracks the cell");
    assert_eq!(
        rig.observer(&key).grid.name_at(&p),
        None,
        "observer cannot resolve an empty name"
    );
    assert_eq!(
        rig.observer(&key).client.tile_name(&p),
        Some(&TileName::empty()),
        "mirror still records the occupied cell"
    );

    rig.server_grid.set_tile(&p, None);
    rig.flush();
    assert!(!rig.server.table().contains(&p));
    assert!(rig.observer(&key).client.mirror().is_empty());
}

/// Change notifications observed while not authoritative are ignored.
#[test]
fn changes_without_authority_are_ignored() {
    let mut rig = TestRig::new(&["grass"]);
    let mut not_authority = rig.hub.endpoint(false);

    let changes = vec![CellChange::new(
        CellPos::flat(0, 0),
        Some(TestTile::named("grass")),
    )];
    rig.server.sync_changes(&mut not_authority, &changes);

    assert!(rig.server.table().is_empty(), "table must not move");
}

/// The full scenario: clear-on-start, two edits, a late joiner's snapshot,
/// then an authority-wide clear.
#[test]
fn authority_lifecycle_scenario() {
    let hub = LocalHub::new();
    let mut transport = hub.endpoint(true);

    // the grid already holds stale content before the authority starts
    let mut grid = MemoryGrid::new();
    grid.set_tile(&CellPos::flat(5, 5), Some(TestTile::named("stale")));

    let config = GridSyncConfig {
        tiles: vec![TestTile::named("wall"), TestTile::named("floor")],
        clear_on_start: true,
        cache_grid_tiles: false,
        ..GridSyncConfig::default()
    };
    let mut server = GridServer::new(config.clone(), &grid);
    server.start(&mut grid);
    assert!(grid.is_empty(), "clear_on_start must empty the grid");
    grid.take_changes(); // glue subscribes after start

    grid.set_tile(&CellPos::flat(0, 0), Some(TestTile::named("wall")));
    grid.set_tile(&CellPos::flat(1, 0), Some(TestTile::named("floor")));
    let changes = grid.take_changes();
    server.sync_changes(&mut transport, &changes);

    // a new observer connects and bootstraps
    let observer_key = gridsync_shared::ObserverKey::from_u64(1);
    let mut observer_grid = MemoryGrid::new();
    let mut observer =
        gridsync_client::GridClient::new(config, &observer_grid);
    let observer_transport = hub.endpoint(false);
    server.observer_connected(&mut transport, &observer_key);

    for payload in hub.drain_observer(&observer_key) {
        observer.receive(&mut observer_grid, &observer_transport, &payload);
    }
    assert_eq!(
        observer_grid.name_at(&CellPos::flat(0, 0)),
        Some("wall".to_string())
    );
    assert_eq!(
        observer_grid.name_at(&CellPos::flat(1, 0)),
        Some("floor".to_string())
    );
    assert_eq!(observer_grid.occupied_count(), 2);

    // authority clears; the observer's mirror must become empty
    server.clear_all(&mut grid, &mut transport);
    for payload in hub.drain_observer(&observer_key) {
        observer.receive(&mut observer_grid, &observer_transport, &payload);
    }
    assert!(observer_grid.is_empty());
    assert!(observer.mirror().is_empty());

    // the clear's own notifications translate to nothing further
    let changes = grid.take_changes();
    server.sync_changes(&mut transport, &changes);
    assert_eq!(hub.pending_for(&observer_key), 0);
}

/// The grid double must record a notification for every mutation, the
/// emit-on-every-mutation contract replication depends on.
#[test]
fn grid_double_notifies_every_mutation() {
    let mut grid = MemoryGrid::new();
    grid.set_tile(&CellPos::flat(0, 0), Some(TestTile::named("a")));
    grid.set_tile(&CellPos::flat(1, 0), Some(TestTile::named("b")));
    grid.set_tile(&CellPos::flat(0, 0), None);
    assert_eq!(grid.take_changes().len(), 3);

    grid.clear_all();
    assert_eq!(
        grid.take_changes().len(),
        1,
        "one removal notification per occupied cell"
    );
}
