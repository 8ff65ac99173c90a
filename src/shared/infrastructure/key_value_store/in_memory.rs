// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Back the service in local development and tests without an external database.
//
// Responsibilities
// - Keep named tables of items addressed by a partition key and a sort key.
// - Honour conditional updates so membership writes can detect concurrent changes.

use crate::shared::infrastructure::key_value_store::{
    AttributeValue, Expected, Item, ItemKey, KeySchema, KeyValueStore, StoreError,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Table {
    schema: KeySchema,
    items: BTreeMap<ItemKey, Item>,
}

impl Table {
    fn key_of(&self, item: &Item) -> Result<ItemKey, StoreError> {
        let attribute = |name: &str| {
            item.get(name)
                .and_then(|value| value.as_s())
                .map(str::to_string)
                .ok_or_else(|| {
                    StoreError::Validation(format!(
                        "missing the key {name} in the item, or it is not a string"
                    ))
                })
        };
        Ok(ItemKey {
            partition: attribute(&self.schema.partition_key)?,
            sort: attribute(&self.schema.sort_key)?,
        })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    tables: RwLock<HashMap<String, Table>>,
    is_offline: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: impl Into<String>, schema: KeySchema) -> Self {
        self.tables.get_mut().insert(
            name.into(),
            Table {
                schema,
                items: BTreeMap::new(),
            },
        );
        self
    }

    /// Inserts items directly, bypassing the offline switch and write delay.
    pub fn seed(
        &mut self,
        table: &str,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<(), StoreError> {
        let table_ref = self
            .tables
            .get_mut()
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        for item in items {
            let key = table_ref.key_of(&item)?;
            table_ref.items.insert(key, item);
        }
        Ok(())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_write_ms(&self, delay_ms: u64) {
        self.delay_write_ms.store(delay_ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Key-value store offline".into()));
        }
        Ok(())
    }

    async fn delay_write(&self) {
        let delay_ms = self.delay_write_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

fn conditions_hold(current: Option<&Item>, expected: &Expected) -> bool {
    expected.iter().all(|(name, wanted)| {
        let actual = current.and_then(|item| item.get(name));
        actual == wanted.as_ref()
    })
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, table: &str, key: &ItemKey) -> Result<Option<Item>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        let table_ref = guard
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        Ok(table_ref.items.get(key).cloned())
    }

    async fn scan(&self, table: &str) -> Result<Vec<Item>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        let table_ref = guard
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        Ok(table_ref.items.values().cloned().collect())
    }

    async fn query(&self, table: &str, partition: &str) -> Result<Vec<Item>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        let table_ref = guard
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        Ok(table_ref
            .items
            .iter()
            .filter(|(key, _)| key.partition == partition)
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn put(&self, table: &str, item: Item) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.tables.write().await;
        let table_ref = guard
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        let key = table_ref.key_of(&item)?;
        table_ref.items.insert(key, item);
        Ok(())
    }

    async fn update(
        &self,
        table: &str,
        key: &ItemKey,
        set: Item,
        expected: Option<Expected>,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        if set.is_empty() {
            return Err(StoreError::Validation(
                "an update must set at least one attribute".into(),
            ));
        }
        self.delay_write().await;
        let mut guard = self.tables.write().await;
        let table_ref = guard
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        if let Some(name) = set.keys().find(|name| table_ref.schema.is_key_attribute(name)) {
            return Err(StoreError::Validation(format!(
                "cannot update attribute {name}, this attribute is part of the key"
            )));
        }
        if let Some(expected) = &expected {
            if !conditions_hold(table_ref.items.get(key), expected) {
                return Err(StoreError::ConditionFailed);
            }
        }

        let partition_key = table_ref.schema.partition_key.clone();
        let sort_key = table_ref.schema.sort_key.clone();
        let item = table_ref.items.entry(key.clone()).or_insert_with(|| {
            Item::from([
                (partition_key, AttributeValue::S(key.partition.clone())),
                (sort_key, AttributeValue::S(key.sort.clone())),
            ])
        });
        item.extend(set);
        Ok(())
    }

    async fn delete(&self, table: &str, key: &ItemKey) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.tables.write().await;
        let table_ref = guard
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        table_ref.items.remove(key);
        Ok(())
    }
}
