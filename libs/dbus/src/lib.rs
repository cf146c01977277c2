//! # credbus-dbus
//!
//! D-Bus signal adapter for secrets domain events: publishes typed events
//! as bus signals and rebuilds events from received messages.
//!
//! ## Pieces
//!
//! - [`SignalDescriptor`]: per-kind addressing and wire shape (interface
//!   name, path suffix, wire signature)
//! - [`SignalCodec`]: the transform/parse pair for one kind
//! - [`SignalRegistry`]: kind and interface routing tables, built once at
//!   startup by an explicit initializer
//! - [`SignalPublisher`] / [`SignalReceiver`]: glue between the registry
//!   and a [`SignalSink`] / [`SignalStream`] transport
//!
//! ## Wire contract
//!
//! Signal bodies are positional sequences of primitive values, each slot
//! tagged by a [`WireType`]. Structured fields (the metadata object, the
//! ordered predecessor id list) ride string slots as canonical JSON; see
//! [`canonical`] for the byte-level rules. The signature per kind is
//! fixed: producers and consumers built independently stay compatible as
//! long as both register the same descriptors.
//!
//! Adding a new event kind means writing a descriptor and a codec and
//! registering them; dispatch code does not change.

pub mod canonical;
mod codec;
mod descriptor;
mod error;
mod path;
mod publish;
mod registry;
mod transport;
mod wire;

pub use codec::*;
pub use descriptor::*;
pub use error::SignalError;
pub use path::*;
pub use publish::*;
pub use registry::SignalRegistry;
pub use transport::*;
pub use wire::*;
