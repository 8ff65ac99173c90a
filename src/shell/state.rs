use crate::modules::workshops::adapters::outbound::workshop_repository::WorkshopRepository;
use crate::modules::workshops::use_cases::manage_membership::handler::MembershipService;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub workshops: Arc<WorkshopRepository<InMemoryKeyValueStore>>,
    pub membership: Arc<MembershipService<InMemoryKeyValueStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryKeyValueStore>, table: impl Into<String>) -> Self {
        let workshops = Arc::new(WorkshopRepository::new(store, table));
        let membership = Arc::new(MembershipService::new(workshops.clone()));
        Self {
            workshops,
            membership,
        }
    }
}
