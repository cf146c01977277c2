//! Error types for the signal adapter.

use thiserror::Error;

/// Errors raised by the codec, registry, and transport-facing glue.
///
/// The adapter never hides these; policy (drop, log, escalate) belongs to
/// the caller. Retries, if any, belong to the transport.
#[derive(Debug, Error)]
pub enum SignalError {
    /// A codec and its descriptor disagree, or a codec was handed an
    /// event of a kind it does not handle. Programming error; fails fast
    /// at registration or test time, never in steady state.
    #[error("contract violation on {interface}: {detail}")]
    ContractViolation {
        interface: &'static str,
        detail: String,
    },

    /// An inbound body failed the positional-length check, carried a
    /// wrong-typed slot, or a structured slot did not decode. Recoverable
    /// by the caller; never crashes the receive loop.
    #[error("malformed payload on {interface}: {reason}")]
    MalformedPayload { interface: String, reason: String },

    /// No codec registered for this event kind.
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),

    /// No codec registered for this interface name. Indicates schema
    /// drift between producer and consumer.
    #[error("unknown interface: {0}")]
    UnknownInterface(String),

    /// Two codecs claimed the same interface name at registration.
    #[error("interface registered twice: {0}")]
    DuplicateInterface(String),

    /// The transport collaborator failed to emit a signal.
    #[error("transport failure: {0}")]
    Transport(String),
}
