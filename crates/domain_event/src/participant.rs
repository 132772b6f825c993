//! Participants attached to events
//!
//! A participant is a named party who can pay for expenses. Display names
//! are presentation payload only; identity is carried by [`ParticipantId`],
//! so two participants may legitimately share a name.

use core_kernel::{ParticipantId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::EventResult;
use crate::validation::validate_name;

/// A named party that can be attached to events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    creator: Option<UserId>,
}

impl Participant {
    /// Maximum display name length in characters
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Creates a participant with a fresh identifier
    ///
    /// `creator` records the registered user who added the participant;
    /// participants added through anonymous sessions have none.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is empty or longer than
    /// [`Self::MAX_NAME_LENGTH`] characters.
    pub fn new(name: impl Into<String>, creator: Option<UserId>) -> EventResult<Self> {
        Self::with_id(ParticipantId::new(), name, creator)
    }

    /// Creates a participant with a caller-supplied identifier
    pub fn with_id(
        id: ParticipantId,
        name: impl Into<String>,
        creator: Option<UserId>,
    ) -> EventResult<Self> {
        let name = name.into();
        validate_name("participant", &name, Self::MAX_NAME_LENGTH)?;
        Ok(Self { id, name, creator })
    }

    /// Returns the participant identifier
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registered user who created the participant, if any
    pub fn creator(&self) -> Option<UserId> {
        self.creator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;

    #[test]
    fn test_new_participant_gets_fresh_id() {
        let first = Participant::new("Ann", None).unwrap();
        let second = Participant::new("Ann", None).unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(first.name(), second.name());
    }

    #[test]
    fn test_with_id_keeps_supplied_id() {
        let id = ParticipantId::new();
        let participant = Participant::with_id(id, "Bea", None).unwrap();
        assert_eq!(participant.id(), id);
    }

    #[test]
    fn test_creator_is_recorded() {
        let user = UserId::new();
        let participant = Participant::new("Cat", Some(user)).unwrap();
        assert_eq!(participant.creator(), Some(user));

        let anonymous = Participant::new("Dan", None).unwrap();
        assert!(anonymous.creator().is_none());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = Participant::new("", None);
        assert!(matches!(
            result,
            Err(EventError::EmptyName {
                entity: "participant"
            })
        ));
    }

    #[test]
    fn test_name_at_maximum_length_is_accepted() {
        let name = "a".repeat(Participant::MAX_NAME_LENGTH);
        assert!(Participant::new(name, None).is_ok());

        let too_long = "a".repeat(Participant::MAX_NAME_LENGTH + 1);
        assert!(matches!(
            Participant::new(too_long, None),
            Err(EventError::NameTooLong { max: 100, .. })
        ));
    }
}
