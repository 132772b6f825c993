//! Newtype identifiers for every entity in the system
//!
//! Each identifier wraps a [`Uuid`] so the compiler rejects a `ParticipantId`
//! where an `ExpenseId` belongs. Identity-sensitive operations (roster
//! matching, debt calculation) key on these identifiers, never on display
//! names, so participants sharing a name stay distinct.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random (v4) identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Generates a v7 identifier that sorts by creation time
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an already-known UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Borrows the wrapped UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Display prefix for this identifier type
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Both prefixed and bare UUID forms parse
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(UserId, "USR");
define_id!(EventId, "EVT");
define_id!(ParticipantId, "PTC");
define_id!(ExpenseId, "EXP");

/// Opaque session key identifying an anonymous owner
///
/// Session keys come from the surrounding application's session layer and are
/// not UUIDs; they are carried verbatim. A key is non-empty and at most 255
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(String);

impl SessionKey {
    /// Maximum length of a session key
    pub const MAX_LENGTH: usize = 255;

    /// Creates a session key, validating it is non-empty and within bounds
    pub fn new(key: impl Into<String>) -> CoreResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CoreError::validation("session key cannot be empty"));
        }
        if key.chars().count() > Self::MAX_LENGTH {
            return Err(CoreError::validation(format!(
                "session key exceeds {} characters",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(key))
    }

    /// Returns the raw key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
