use crate::modules::workshops::adapters::outbound::workshop_repository::WorkshopRepository;
use crate::modules::workshops::core::errors::WorkshopError;
use crate::modules::workshops::core::membership::{
    DecideError, MembershipSnapshot, decide_join, decide_leave,
};
use crate::modules::workshops::core::workshop::WorkshopKey;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct MembershipService<TStore>
where
    TStore: KeyValueStore + 'static,
{
    repository: Arc<WorkshopRepository<TStore>>,
}

impl<TStore> MembershipService<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(repository: Arc<WorkshopRepository<TStore>>) -> Self {
        Self { repository }
    }

    /// Registers `participant_id` and takes one vacancy.
    #[instrument(skip(self, key), fields(workshop = %key))]
    pub async fn join(
        &self,
        key: &WorkshopKey,
        participant_id: &str,
    ) -> Result<MembershipSnapshot, WorkshopError> {
        self.apply(key, participant_id, decide_join).await
    }

    /// Withdraws `participant_id` and frees one vacancy.
    #[instrument(skip(self, key), fields(workshop = %key))]
    pub async fn leave(
        &self,
        key: &WorkshopKey,
        participant_id: &str,
    ) -> Result<MembershipSnapshot, WorkshopError> {
        self.apply(key, participant_id, decide_leave).await
    }

    async fn apply(
        &self,
        key: &WorkshopKey,
        participant_id: &str,
        decide: fn(&MembershipSnapshot, &str) -> Result<MembershipSnapshot, DecideError>,
    ) -> Result<MembershipSnapshot, WorkshopError> {
        let loaded = self.repository.load_membership(key).await?;
        let next = decide(&loaded.snapshot, participant_id).inspect_err(|reason| {
            info!(%reason, "membership change rejected");
        })?;
        self.repository
            .save_membership(key, &loaded.guard, &next)
            .await?;
        info!(
            vacancies = next.vacancies,
            attendees = next.attendees.len(),
            "membership changed"
        );
        Ok(next)
    }
}
