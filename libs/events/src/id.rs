//! Event identifiers.
//!
//! Ids minted by this process are `evt_<ULID>` for sortability and
//! uniqueness. Ids received off the wire are kept verbatim: the wire
//! contract round-trips the id slot literally, so no prefix or ULID
//! validation is applied when wrapping an existing string.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// An opaque event identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// The prefix for ids minted by this process.
    pub const PREFIX: &'static str = "evt";

    /// Mints a fresh id with a new ULID.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{}_{}", Self::PREFIX, Ulid::new()))
    }

    /// Wraps an existing id string verbatim.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
