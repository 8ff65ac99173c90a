use crate::modules::workshops::core::errors::WorkshopError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A scalar written verbatim to a workshop record by a field patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
}

pub type FieldPatch = BTreeMap<String, FieldValue>;

impl FieldValue {
    /// Strings and numbers are accepted; numbers with a fractional part are
    /// truncated towards zero.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(FieldValue::String(text.clone())),
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|float| float as i64))
                .map(FieldValue::Integer),
            _ => None,
        }
    }
}

pub fn parse_field_patch(fields: Map<String, Value>) -> Result<FieldPatch, WorkshopError> {
    if fields.is_empty() {
        return Err(WorkshopError::Validation("No fields to update.".into()));
    }
    fields
        .into_iter()
        .map(|(name, value)| match FieldValue::from_json(&value) {
            Some(field_value) => Ok((name, field_value)),
            None => Err(WorkshopError::UnsupportedFieldType(name)),
        })
        .collect()
}
