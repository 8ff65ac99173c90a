use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    S(String),
    N(i64),
    L(Vec<AttributeValue>),
}

impl AttributeValue {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<i64> {
        match self {
            AttributeValue::N(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_l(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::L(values) => Some(values),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::S(_) => "S",
            AttributeValue::N(_) => "N",
            AttributeValue::L(_) => "L",
        }
    }
}

pub type Item = BTreeMap<String, AttributeValue>;

/// Attribute preconditions for a conditional update. `None` requires the
/// attribute to be absent, `Some(v)` requires it to currently equal `v`.
pub type Expected = BTreeMap<String, Option<AttributeValue>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    pub partition_key: String,
    pub sort_key: String,
}

impl KeySchema {
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
        }
    }

    pub fn is_key_attribute(&self, name: &str) -> bool {
        name == self.partition_key || name == self.sort_key
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
    pub partition: String,
    pub sort: String,
}

impl ItemKey {
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("the conditional request failed")]
    ConditionFailed,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, table: &str, key: &ItemKey) -> Result<Option<Item>, StoreError>;

    async fn scan(&self, table: &str) -> Result<Vec<Item>, StoreError>;

    async fn query(&self, table: &str, partition: &str) -> Result<Vec<Item>, StoreError>;

    async fn put(&self, table: &str, item: Item) -> Result<(), StoreError>;

    /// Sets the given attributes on the item, creating it if absent. When
    /// `expected` is given the write only happens if every precondition holds.
    async fn update(
        &self,
        table: &str,
        key: &ItemKey,
        set: Item,
        expected: Option<Expected>,
    ) -> Result<(), StoreError>;

    /// Deleting an absent key is not an error.
    async fn delete(&self, table: &str, key: &ItemKey) -> Result<(), StoreError>;
}

pub mod in_memory;
