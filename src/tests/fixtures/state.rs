use crate::modules::workshops::adapters::outbound::workshop_record::{to_item, workshop_key_schema};
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::workshops::workshop_builder::seed_workshops;
use std::sync::Arc;

pub const TEST_TABLE: &str = "workshop_test";

/// A store holding the test table, filled with the seed workshops.
pub fn make_seeded_store() -> InMemoryKeyValueStore {
    let mut store = InMemoryKeyValueStore::new().with_table(TEST_TABLE, workshop_key_schema());
    store
        .seed(TEST_TABLE, seed_workshops().iter().map(to_item))
        .expect("seeding failed");
    store
}

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(make_seeded_store()), TEST_TABLE)
}

pub fn make_offline_state() -> AppState {
    let mut store = make_seeded_store();
    store.toggle_offline();
    AppState::new(Arc::new(store), TEST_TABLE)
}
