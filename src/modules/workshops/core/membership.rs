// Pure membership rules for joining and leaving a workshop.
//
// Responsibilities
// - Reject duplicate registrations, joins without vacancy, and withdrawals of non-attendees.
// - Produce the next (attendees, vacancies) pair; the caller persists it.
// - Never perform input or output.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSnapshot {
    pub attendees: Vec<String>,
    pub vacancies: i64,
}

impl MembershipSnapshot {
    pub fn new(attendees: Vec<String>, vacancies: i64) -> Self {
        Self {
            attendees,
            vacancies,
        }
    }

    pub fn is_attending(&self, participant_id: &str) -> bool {
        self.attendees.iter().any(|attendee| attendee == participant_id)
    }

    /// Vacancies plus attendees; unchanged by join and leave.
    pub fn seats(&self) -> i64 {
        self.vacancies + self.attendees.len() as i64
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("participant is already registered")]
    AlreadyRegistered,

    #[error("workshop has no vacancy left")]
    NoVacancy,

    #[error("participant is not registered")]
    NotRegistered,
}

pub fn decide_join(
    snapshot: &MembershipSnapshot,
    participant_id: &str,
) -> Result<MembershipSnapshot, DecideError> {
    if snapshot.is_attending(participant_id) {
        return Err(DecideError::AlreadyRegistered);
    }
    // A count driven negative by a field patch still admits joins.
    if snapshot.vacancies == 0 {
        return Err(DecideError::NoVacancy);
    }
    let mut attendees = snapshot.attendees.clone();
    attendees.push(participant_id.to_string());
    Ok(MembershipSnapshot::new(attendees, snapshot.vacancies - 1))
}

/// The leaving attendee's slot is filled by the last attendee, so order is
/// not preserved.
pub fn decide_leave(
    snapshot: &MembershipSnapshot,
    participant_id: &str,
) -> Result<MembershipSnapshot, DecideError> {
    let Some(index) = snapshot
        .attendees
        .iter()
        .position(|attendee| attendee == participant_id)
    else {
        return Err(DecideError::NotRegistered);
    };
    let mut attendees = snapshot.attendees.clone();
    attendees.swap_remove(index);
    Ok(MembershipSnapshot::new(attendees, snapshot.vacancies + 1))
}
