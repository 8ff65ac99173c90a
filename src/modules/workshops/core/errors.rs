use crate::modules::workshops::core::membership::DecideError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkshopError {
    #[error("Workshop not found.")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("User is already in attendees list!")]
    AlreadyRegistered,

    #[error("UserID not found in the attendees list!")]
    NotRegistered,

    #[error("There is 0 vacancy!")]
    NoVacancy,

    /// Carries the rejected field name for logs; the message omits it.
    #[error("You may not patch this field")]
    UnsupportedFieldType(String),

    #[error("Workshop was modified concurrently, please retry.")]
    Conflict,

    /// A stored record that can no longer be read back as a workshop.
    #[error("Error decoding stored workshop record: {0}")]
    Decode(String),

    #[error("{0}")]
    Store(String),
}

impl From<DecideError> for WorkshopError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::AlreadyRegistered => WorkshopError::AlreadyRegistered,
            DecideError::NoVacancy => WorkshopError::NoVacancy,
            DecideError::NotRegistered => WorkshopError::NotRegistered,
        }
    }
}
