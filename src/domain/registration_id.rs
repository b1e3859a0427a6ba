//! Type-safe registration identifier.
//!
//! [`RegistrationId`] is a newtype wrapper around [`uuid::Uuid`] so that
//! registration identifiers cannot be confused with session tokens or
//! other UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored registration.
///
/// Assigned by the registration store on insert and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(uuid::Uuid);

impl RegistrationId {
    /// Creates a new random `RegistrationId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `RegistrationId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for RegistrationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for RegistrationId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<RegistrationId> for uuid::Uuid {
    fn from(id: RegistrationId) -> Self {
        id.0
    }
}
