// Shared test fixture for workshops.
// Compiled into the crate only during tests, exposed under
// `crate::tests::fixtures::workshops`.

use crate::modules::workshops::core::workshop::{NewWorkshop, Workshop};
use std::fs;

const HERBS_GALORE_JSON: &str = "./src/tests/fixtures/workshops/json/herbs_galore.json";
const SEED_WORKSHOPS_JSON: &str = "./src/tests/fixtures/workshops/json/seed_workshops.json";

/// The records every seeded test table starts with: "Herbs Galore!" of
/// organizer "2", then "Mr Lee fan repair!" of organizer "1".
pub fn seed_workshops() -> Vec<Workshop> {
    let json_str = fs::read_to_string(SEED_WORKSHOPS_JSON).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub struct WorkshopBuilder {
    inner: Workshop,
}

impl Default for WorkshopBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkshopBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(HERBS_GALORE_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn organizer_id(mut self, v: impl Into<String>) -> Self {
        self.inner.organizer_id = v.into();
        self
    }

    pub fn creation_timestamp(mut self, v: impl Into<String>) -> Self {
        self.inner.creation_timestamp = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn vacancies(mut self, v: i64) -> Self {
        self.inner.vacancies = v;
        self
    }

    pub fn attendees(mut self, v: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.inner.attendees = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Workshop {
        self.inner
    }

    /// The create request for this workshop; timestamp and attendees are
    /// dropped.
    pub fn build_new(self) -> NewWorkshop {
        NewWorkshop {
            organizer_id: self.inner.organizer_id,
            title: self.inner.title,
            description: self.inner.description,
            location: self.inner.location,
            vacancies: self.inner.vacancies,
            registration_deadline: self.inner.registration_deadline,
            start_timestamp: self.inner.start_timestamp,
        }
    }
}

#[cfg(test)]
mod workshop_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = WorkshopBuilder::default().build();
        assert_eq!(built.organizer_id, "2");
        assert_eq!(built.creation_timestamp, "2023-10-20-21:22:22.080");
        assert_eq!(built.title, "Herbs Galore!");
        assert_eq!(built.location, "123 Circle Road");
        assert_eq!(built.vacancies, 11);
        assert_eq!(built.attendees, vec!["64"]);
        assert_eq!(built, seed_workshops()[0]);
    }

    #[rstest]
    fn setters_override_fields_and_build_new_drops_server_fields() {
        let custom = WorkshopBuilder::new()
            .organizer_id("9")
            .creation_timestamp("2024-01-01-00:00:00.000")
            .title("Bread")
            .location("Hall B")
            .vacancies(3)
            .attendees(["a", "b"]);
        let new_workshop = WorkshopBuilder::new().organizer_id("9").build_new();
        let built = custom.build();

        assert_eq!(built.organizer_id, "9");
        assert_eq!(built.creation_timestamp, "2024-01-01-00:00:00.000");
        assert_eq!(built.title, "Bread");
        assert_eq!(built.location, "Hall B");
        assert_eq!(built.vacancies, 3);
        assert_eq!(built.attendees, vec!["a", "b"]);
        assert_eq!(new_workshop.organizer_id, "9");
        assert_eq!(new_workshop.title, "Herbs Galore!");
    }

    #[rstest]
    fn seed_workshops_are_keyed_by_distinct_organizers() {
        let seeded = seed_workshops();
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[1].organizer_id, "1");
        assert_eq!(seeded[1].title, "Mr Lee fan repair!");
        assert_eq!(seeded[1].attendees, vec!["999"]);
    }
}
