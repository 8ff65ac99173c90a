// Mapping between workshops and key-value store items.
//
// Responsibilities
// - Name the stored attributes and the table's key schema.
// - Encode a Workshop as an Item and decode it back.
// - Decoding is lenient about absent attributes and strict about their types,
//   since field patches may write arbitrary scalars into a record.

use crate::modules::workshops::core::field_patch::{FieldPatch, FieldValue};
use crate::modules::workshops::core::membership::MembershipSnapshot;
use crate::modules::workshops::core::workshop::{Workshop, WorkshopKey};
use crate::shared::infrastructure::key_value_store::{
    AttributeValue, Expected, Item, ItemKey, KeySchema,
};
use thiserror::Error;

pub const CREATOR_ID: &str = "Creator_Id";
pub const CREATION_TIMESTAMP: &str = "Creation_Timestamp";
pub const TITLE: &str = "Title";
pub const DESCRIPTION: &str = "Description";
pub const LOCATION: &str = "Location";
pub const VACANCIES: &str = "Vacancies";
pub const ATTENDEES: &str = "Attendees";
pub const REGISTRATION_DEADLINE: &str = "Registration_Deadline";
pub const START_TIMESTAMP: &str = "Start_Timestamp";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing key attribute {0}")]
    MissingKey(&'static str),

    #[error("attribute {name} is of type {actual}, expected {expected}")]
    UnexpectedType {
        name: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

pub fn workshop_key_schema() -> KeySchema {
    KeySchema::new(CREATOR_ID, CREATION_TIMESTAMP)
}

pub fn item_key(key: &WorkshopKey) -> ItemKey {
    ItemKey::new(&key.organizer_id, &key.creation_timestamp)
}

pub fn to_item(workshop: &Workshop) -> Item {
    let text = |value: &String| AttributeValue::S(value.clone());
    Item::from([
        (CREATOR_ID.to_string(), text(&workshop.organizer_id)),
        (CREATION_TIMESTAMP.to_string(), text(&workshop.creation_timestamp)),
        (TITLE.to_string(), text(&workshop.title)),
        (DESCRIPTION.to_string(), text(&workshop.description)),
        (LOCATION.to_string(), text(&workshop.location)),
        (VACANCIES.to_string(), AttributeValue::N(workshop.vacancies)),
        (ATTENDEES.to_string(), attendees_attribute(&workshop.attendees)),
        (
            REGISTRATION_DEADLINE.to_string(),
            text(&workshop.registration_deadline),
        ),
        (START_TIMESTAMP.to_string(), text(&workshop.start_timestamp)),
    ])
}

pub fn from_item(item: &Item) -> Result<Workshop, RecordError> {
    let organizer_id = string(item, CREATOR_ID)?.ok_or(RecordError::MissingKey(CREATOR_ID))?;
    let creation_timestamp =
        string(item, CREATION_TIMESTAMP)?.ok_or(RecordError::MissingKey(CREATION_TIMESTAMP))?;
    let membership = membership_snapshot(item)?;
    Ok(Workshop {
        organizer_id,
        creation_timestamp,
        title: string(item, TITLE)?.unwrap_or_default(),
        description: string(item, DESCRIPTION)?.unwrap_or_default(),
        location: string(item, LOCATION)?.unwrap_or_default(),
        vacancies: membership.vacancies,
        attendees: membership.attendees,
        registration_deadline: string(item, REGISTRATION_DEADLINE)?.unwrap_or_default(),
        start_timestamp: string(item, START_TIMESTAMP)?.unwrap_or_default(),
    })
}

pub fn membership_snapshot(item: &Item) -> Result<MembershipSnapshot, RecordError> {
    let vacancies = match item.get(VACANCIES) {
        None => 0,
        Some(value) => value.as_n().ok_or_else(|| unexpected(VACANCIES, "N", value))?,
    };
    let attendees = match item.get(ATTENDEES) {
        None => Vec::new(),
        Some(value) => value
            .as_l()
            .ok_or_else(|| unexpected(ATTENDEES, "L", value))?
            .iter()
            .map(|attendee| {
                attendee
                    .as_s()
                    .map(str::to_string)
                    .ok_or_else(|| unexpected(ATTENDEES, "L of S", attendee))
            })
            .collect::<Result<Vec<_>, _>>()?,
    };
    Ok(MembershipSnapshot::new(attendees, vacancies))
}

/// The attendee and vacancy attributes exactly as read, used as the
/// precondition of the write that replaces them.
pub fn membership_guard(item: &Item) -> Expected {
    [ATTENDEES, VACANCIES]
        .into_iter()
        .map(|name| (name.to_string(), item.get(name).cloned()))
        .collect()
}

pub fn membership_update(snapshot: &MembershipSnapshot) -> Item {
    Item::from([
        (ATTENDEES.to_string(), attendees_attribute(&snapshot.attendees)),
        (VACANCIES.to_string(), AttributeValue::N(snapshot.vacancies)),
    ])
}

pub fn patch_update(patch: FieldPatch) -> Item {
    patch
        .into_iter()
        .map(|(name, value)| {
            let attribute = match value {
                FieldValue::String(text) => AttributeValue::S(text),
                FieldValue::Integer(number) => AttributeValue::N(number),
            };
            (name, attribute)
        })
        .collect()
}

fn attendees_attribute(attendees: &[String]) -> AttributeValue {
    AttributeValue::L(attendees.iter().cloned().map(AttributeValue::S).collect())
}

fn string(item: &Item, name: &'static str) -> Result<Option<String>, RecordError> {
    item.get(name)
        .map(|value| {
            value
                .as_s()
                .map(str::to_string)
                .ok_or_else(|| unexpected(name, "S", value))
        })
        .transpose()
}

fn unexpected(name: &'static str, expected: &'static str, actual: &AttributeValue) -> RecordError {
    RecordError::UnexpectedType {
        name,
        expected,
        actual: actual.type_name(),
    }
}
