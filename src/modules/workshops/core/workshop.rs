use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `YYYY-MM-DD-HH:MM:SS.mmm`
pub const CREATION_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S%.3f";

// Creation timestamps are stamped on a fixed UTC+8 wall clock.
const CREATION_CLOCK_OFFSET_HOURS: i64 = 8;

pub fn creation_timestamp(now: DateTime<Utc>) -> String {
    (now + TimeDelta::hours(CREATION_CLOCK_OFFSET_HOURS))
        .format(CREATION_TIMESTAMP_FORMAT)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkshopKey {
    pub organizer_id: String,
    pub creation_timestamp: String,
}

impl WorkshopKey {
    pub fn new(organizer_id: impl Into<String>, creation_timestamp: impl Into<String>) -> Self {
        Self {
            organizer_id: organizer_id.into(),
            creation_timestamp: creation_timestamp.into(),
        }
    }
}

impl fmt::Display for WorkshopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organizer_id, self.creation_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    #[serde(rename = "Creator_Id")]
    pub organizer_id: String,
    #[serde(rename = "Creation_Timestamp")]
    pub creation_timestamp: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Vacancies")]
    pub vacancies: i64,
    #[serde(rename = "Attendees")]
    pub attendees: Vec<String>,
    #[serde(rename = "Registration_Deadline")]
    pub registration_deadline: String,
    #[serde(rename = "Start_Timestamp")]
    pub start_timestamp: String,
}

impl Workshop {
    pub fn key(&self) -> WorkshopKey {
        WorkshopKey::new(&self.organizer_id, &self.creation_timestamp)
    }
}

/// Fields supplied by the caller when creating a workshop. A
/// `Creation_Timestamp` or `Attendees` value in the request is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewWorkshop {
    #[serde(rename = "Creator_Id")]
    pub organizer_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Vacancies")]
    pub vacancies: i64,
    #[serde(rename = "Registration_Deadline")]
    pub registration_deadline: String,
    #[serde(rename = "Start_Timestamp")]
    pub start_timestamp: String,
}

impl NewWorkshop {
    /// Wire names of the fields a create request may carry.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "Creator_Id",
        "Title",
        "Description",
        "Location",
        "Vacancies",
        "Registration_Deadline",
        "Start_Timestamp",
    ];

    pub fn into_workshop(self, creation_timestamp: String) -> Workshop {
        Workshop {
            organizer_id: self.organizer_id,
            creation_timestamp,
            title: self.title,
            description: self.description,
            location: self.location,
            vacancies: self.vacancies,
            attendees: Vec::new(),
            registration_deadline: self.registration_deadline,
            start_timestamp: self.start_timestamp,
        }
    }
}
