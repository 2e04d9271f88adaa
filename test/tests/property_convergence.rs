/// PROPERTY-BASED TESTS: convergence invariants
///
/// Uses proptest to verify the replication invariants hold across random
/// edit scripts:
/// 1. The table always equals the set of non-empty cells of the authority's
///    grid, as observed through its notifications.
/// 2. Every observer's grid and mirror converge to the table.
/// 3. Replaying operations an observer already holds changes nothing.
use proptest::prelude::*;

use gridsync_shared::{CellPos, MapOp, SyncMessage, TileGrid};
use gridsync_test::{TestRig, TestTile};

const TILES: &[&str] = &["grass", "wall", "floor", "water"];

// Strategy for one edit: a position in a small square, and either one of
// the configured tiles or an erase.
fn edit_strategy() -> impl Strategy<Value = (i32, i32, Option<usize>)> {
    (0i32..4, 0i32..4, prop::option::of(0usize..TILES.len()))
}

proptest! {
    #[test]
    fn prop_table_and_observers_track_the_grid(
        edits in prop::collection::vec(edit_strategy(), 0..48),
    ) {
        let mut rig = TestRig::new(TILES);
        let key = rig.connect_observer();
        rig.flush();

        // apply in small batches so snapshots and deltas both participate
        for chunk in edits.chunks(5) {
            for &(x, y, tile) in chunk {
                let position = CellPos::flat(x, y);
                let tile = tile.map(|index| TestTile::named(TILES[index]));
                rig.server_grid.set_tile(&position, tile);
            }
            rig.flush();
        }

        let grid_names = rig.server_grid.cell_names();
        prop_assert_eq!(rig.server.table().len(), grid_names.len());
        for record in rig.server.table().records() {
            prop_assert_eq!(
                grid_names.get(&record.position).map(String::as_str),
                Some(record.name.as_str()),
                "table and authority grid disagree at {}",
                record.position
            );
        }

        let observer = rig.observer(&key);
        prop_assert_eq!(observer.grid.cell_names(), grid_names);
        prop_assert_eq!(observer.client.mirror().len(), rig.server.table().len());
    }

    #[test]
    fn prop_replaying_held_state_changes_nothing(
        edits in prop::collection::vec(edit_strategy(), 1..32),
    ) {
        let mut rig = TestRig::new(TILES);
        let key = rig.connect_observer();
        rig.flush();

        for &(x, y, tile) in &edits {
            let position = CellPos::flat(x, y);
            let tile = tile.map(|index| TestTile::named(TILES[index]));
            rig.server_grid.set_tile(&position, tile);
        }
        rig.flush();

        let records = rig.server.table().records();
        let observer = rig.observer_mut(&key);
        let before = observer.grid.cell_names();

        // an overlapping delta window: re-deliver an upsert per held cell,
        // plus a remove for a cell that was never occupied
        for record in records {
            let payload = SyncMessage::Op(MapOp::Upsert {
                position: record.position,
                name: record.name.clone(),
            })
            .encode()
            .unwrap();
            observer
                .client
                .receive(&mut observer.grid, &observer.transport, &payload);
        }
        let stale = SyncMessage::Op(MapOp::Remove {
            position: CellPos::flat(99, 99),
        })
        .encode()
        .unwrap();
        observer
            .client
            .receive(&mut observer.grid, &observer.transport, &stale);

        prop_assert_eq!(observer.grid.cell_names(), before);
    }
}
