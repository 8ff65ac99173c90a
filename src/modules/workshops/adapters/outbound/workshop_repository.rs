use crate::modules::workshops::adapters::outbound::workshop_record::{
    self, RecordError, from_item, item_key, to_item,
};
use crate::modules::workshops::core::errors::WorkshopError;
use crate::modules::workshops::core::field_patch::FieldPatch;
use crate::modules::workshops::core::membership::MembershipSnapshot;
use crate::modules::workshops::core::workshop::{
    NewWorkshop, Workshop, WorkshopKey, creation_timestamp,
};
use crate::shared::infrastructure::key_value_store::{
    Expected, Item, KeyValueStore, StoreError,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

/// Membership state as read from the store, together with the precondition
/// that the replacing write must satisfy.
#[derive(Debug, Clone)]
pub struct LoadedMembership {
    pub snapshot: MembershipSnapshot,
    pub guard: Expected,
}

impl From<RecordError> for WorkshopError {
    fn from(error: RecordError) -> Self {
        WorkshopError::Decode(error.to_string())
    }
}

pub struct WorkshopRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    table: String,
    store: Arc<TStore>,
}

impl<TStore> WorkshopRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>, table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            store,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub async fn find_by_key(&self, key: &WorkshopKey) -> Result<Workshop, WorkshopError> {
        let item = self.get_item(key).await?;
        Ok(from_item(&item)?)
    }

    pub async fn list_all(&self) -> Result<Vec<Workshop>, WorkshopError> {
        let items = self
            .store
            .scan(&self.table)
            .await
            .map_err(|error| store_failure("scan", error))?;
        decode_all(&items)
    }

    pub async fn list_by_organizer(
        &self,
        organizer_id: &str,
    ) -> Result<Vec<Workshop>, WorkshopError> {
        let items = self
            .store
            .query(&self.table, organizer_id)
            .await
            .map_err(|error| store_failure("query", error))?;
        decode_all(&items)
    }

    pub async fn create(&self, new_workshop: NewWorkshop) -> Result<Workshop, WorkshopError> {
        self.create_at(new_workshop, Utc::now()).await
    }

    pub async fn create_at(
        &self,
        new_workshop: NewWorkshop,
        now: DateTime<Utc>,
    ) -> Result<Workshop, WorkshopError> {
        if new_workshop.organizer_id.is_empty() {
            return Err(WorkshopError::Validation("Missing creator_ID".into()));
        }
        if new_workshop.vacancies < 0 {
            return Err(WorkshopError::Validation(
                "Vacancies must not be negative.".into(),
            ));
        }
        let workshop = new_workshop.into_workshop(creation_timestamp(now));
        self.store
            .put(&self.table, to_item(&workshop))
            .await
            .map_err(|error| {
                warn!(%error, workshop = %workshop.key(), "failed to insert workshop");
                WorkshopError::Store("Error inserting workshop data into the database.".into())
            })?;
        Ok(workshop)
    }

    /// Writes the given fields as-is; the workshop schema and its vacancy
    /// invariant are not checked.
    pub async fn patch_fields(
        &self,
        key: &WorkshopKey,
        patch: FieldPatch,
    ) -> Result<(), WorkshopError> {
        self.store
            .update(
                &self.table,
                &item_key(key),
                workshop_record::patch_update(patch),
                None,
            )
            .await
            .map_err(|error| {
                warn!(%error, workshop = %key, "failed to patch workshop");
                WorkshopError::Store("Error updating the database".into())
            })
    }

    pub async fn delete(&self, key: &WorkshopKey) -> Result<(), WorkshopError> {
        self.store
            .delete(&self.table, &item_key(key))
            .await
            .map_err(|error| {
                warn!(%error, workshop = %key, "failed to delete workshop");
                WorkshopError::Store(
                    "Unable to delete item. Check if creatorID and creationTimestamp is correct?"
                        .into(),
                )
            })
    }

    pub async fn load_membership(
        &self,
        key: &WorkshopKey,
    ) -> Result<LoadedMembership, WorkshopError> {
        let item = self.get_item(key).await?;
        Ok(LoadedMembership {
            snapshot: workshop_record::membership_snapshot(&item)?,
            guard: workshop_record::membership_guard(&item),
        })
    }

    /// Replaces attendees and vacancies in one write, provided both still hold
    /// the values described by `guard`.
    pub async fn save_membership(
        &self,
        key: &WorkshopKey,
        guard: &Expected,
        next: &MembershipSnapshot,
    ) -> Result<(), WorkshopError> {
        self.store
            .update(
                &self.table,
                &item_key(key),
                workshop_record::membership_update(next),
                Some(guard.clone()),
            )
            .await
            .map_err(|error| match error {
                StoreError::ConditionFailed => WorkshopError::Conflict,
                error => {
                    warn!(%error, workshop = %key, "failed to save membership");
                    WorkshopError::Store("Error updating the database".into())
                }
            })
    }

    async fn get_item(&self, key: &WorkshopKey) -> Result<Item, WorkshopError> {
        self.store
            .get(&self.table, &item_key(key))
            .await
            .map_err(|error| store_failure("get", error))?
            .ok_or(WorkshopError::NotFound)
    }
}

fn store_failure(operation: &str, error: StoreError) -> WorkshopError {
    warn!(%error, operation, "key-value store request failed");
    WorkshopError::Store(error.to_string())
}

fn decode_all(items: &[Item]) -> Result<Vec<Workshop>, WorkshopError> {
    items
        .iter()
        .map(|item| from_item(item).map_err(WorkshopError::from))
        .collect()
}
