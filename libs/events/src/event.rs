//! Event type definitions for the secrets domain.
//!
//! Each kind has a payload struct with the kind-specific fields plus the
//! common identity fields (`id`, `previous_event_ids`). The closed
//! [`SecretsEvent`] enum gives dispatch code a uniform view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::EventId;

/// All event kind names as constants.
pub mod event_kinds {
    pub const CREDENTIAL_ISSUED: &str = "credential-issued";
    pub const CREDENTIAL_REQUESTED: &str = "credential-requested";
}

/// Structured metadata attached to a credential event.
///
/// An arbitrary JSON object; the adapter layer encodes it canonically for
/// the wire, so insertion order here is not significant.
pub type Metadata = Map<String, Value>;

/// A credential value was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialIssued {
    /// The credential name.
    pub name: String,

    /// The credential value.
    pub value: String,

    /// Structured metadata (environment, rotation policy, ...).
    pub metadata: Metadata,

    /// Identity assigned at construction, immutable.
    pub id: EventId,

    /// Ids of causally preceding events, oldest first. Order is
    /// significant: these are happens-before links, not a set.
    pub previous_event_ids: Vec<EventId>,
}

impl CredentialIssued {
    /// Creates a new event with a freshly minted id.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        metadata: Metadata,
        previous_event_ids: Vec<EventId>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            metadata,
            id: EventId::generate(),
            previous_event_ids,
        }
    }

    /// Rebuilds an event whose identity already exists, e.g. when
    /// reconstructing from the wire.
    pub fn from_parts(
        name: String,
        value: String,
        metadata: Metadata,
        id: EventId,
        previous_event_ids: Vec<EventId>,
    ) -> Self {
        Self {
            name,
            value,
            metadata,
            id,
            previous_event_ids,
        }
    }
}

/// A credential was asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRequested {
    /// The credential name.
    pub name: String,

    /// Structured metadata describing the request context.
    pub metadata: Metadata,

    /// Identity assigned at construction, immutable.
    pub id: EventId,

    /// Ids of causally preceding events, oldest first.
    pub previous_event_ids: Vec<EventId>,
}

impl CredentialRequested {
    /// Creates a new event with a freshly minted id.
    pub fn new(
        name: impl Into<String>,
        metadata: Metadata,
        previous_event_ids: Vec<EventId>,
    ) -> Self {
        Self {
            name: name.into(),
            metadata,
            id: EventId::generate(),
            previous_event_ids,
        }
    }

    /// Rebuilds an event whose identity already exists.
    pub fn from_parts(
        name: String,
        metadata: Metadata,
        id: EventId,
        previous_event_ids: Vec<EventId>,
    ) -> Self {
        Self {
            name,
            metadata,
            id,
            previous_event_ids,
        }
    }
}

/// The closed set of secrets domain events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SecretsEvent {
    CredentialIssued(CredentialIssued),
    CredentialRequested(CredentialRequested),
}

impl SecretsEvent {
    /// The stable kind name, used for routing and addressing.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SecretsEvent::CredentialIssued(_) => event_kinds::CREDENTIAL_ISSUED,
            SecretsEvent::CredentialRequested(_) => event_kinds::CREDENTIAL_REQUESTED,
        }
    }

    /// The event's identity.
    #[must_use]
    pub fn id(&self) -> &EventId {
        match self {
            SecretsEvent::CredentialIssued(e) => &e.id,
            SecretsEvent::CredentialRequested(e) => &e.id,
        }
    }

    /// Ids of causally preceding events, in order.
    #[must_use]
    pub fn previous_event_ids(&self) -> &[EventId] {
        match self {
            SecretsEvent::CredentialIssued(e) => &e.previous_event_ids,
            SecretsEvent::CredentialRequested(e) => &e.previous_event_ids,
        }
    }
}

impl From<CredentialIssued> for SecretsEvent {
    fn from(event: CredentialIssued) -> Self {
        SecretsEvent::CredentialIssued(event)
    }
}

impl From<CredentialRequested> for SecretsEvent {
    fn from(event: CredentialRequested) -> Self {
        SecretsEvent::CredentialRequested(event)
    }
}
