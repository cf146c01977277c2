//! # credbus-events
//!
//! Domain event types for the credbus secrets bus.
//!
//! ## Design Principles
//!
//! - Events are immutable records; nothing downstream mutates them
//! - Every event carries its identity (`id`) and its causal history
//!   (`previous_event_ids`, ordered happens-before links)
//! - Event kinds are stable strings used for routing and addressing
//!
//! ## Event Kinds
//!
//! - `credential-issued`: a credential value was issued
//! - `credential-requested`: a credential was asked for

mod event;
mod id;

pub use event::*;
pub use id::EventId;
