use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a Domain
///
/// DomainId wraps the catalog's UUID so that domain ids cannot be mixed up
/// with other identifiers flowing through the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(Uuid);

impl DomainId {
    /// Generate a fresh DomainId (used by fixtures and local catalogs)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a DomainId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for DomainId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DomainId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

