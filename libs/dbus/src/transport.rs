//! Transport collaborator contract.
//!
//! The adapter core never touches the bus itself: it hands fully
//! addressed signals to a [`SignalSink`] and pulls raw messages from a
//! [`SignalStream`]. Connection setup, delivery guarantees, and retries
//! all live behind these traits.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::SignalError;
use crate::wire::WireValue;

/// A fully addressed signal ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundSignal {
    /// Bus object path, e.g. `/org/credbus/secrets/credential_issued`.
    pub path: String,
    /// Bus interface name.
    pub interface: String,
    /// D-Bus signature string for the body, e.g. `"sssss"`.
    pub signature: String,
    /// Positional body values.
    pub body: Vec<WireValue>,
}

/// A signal as delivered by the bus: interface name plus positional body.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub interface: String,
    pub body: Vec<WireValue>,
}

/// Outbound half of the bus connection.
#[async_trait]
pub trait SignalSink: Send + Sync {
    /// Emits one signal. Delivery guarantees are the bus daemon's, not
    /// ours.
    async fn publish(&self, signal: OutboundSignal) -> Result<(), SignalError>;
}

/// Inbound half of the bus connection.
///
/// `recv` yields messages in delivery order. `None` means the stream has
/// ended and will not resume.
#[async_trait]
pub trait SignalStream: Send {
    async fn recv(&mut self) -> Option<InboundMessage>;
}

/// In-process bus pair: whatever goes into the sink comes out of the
/// stream, with the addressing stripped down to what a real bus delivers
/// to a subscriber (interface name and body).
pub fn loopback() -> (LoopbackSink, LoopbackStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (LoopbackSink { tx }, LoopbackStream { rx })
}

/// Sink half of [`loopback`]. Cloneable; all clones feed one stream.
#[derive(Debug, Clone)]
pub struct LoopbackSink {
    tx: mpsc::UnboundedSender<InboundMessage>,
}

#[async_trait]
impl SignalSink for LoopbackSink {
    async fn publish(&self, signal: OutboundSignal) -> Result<(), SignalError> {
        let message = InboundMessage {
            interface: signal.interface,
            body: signal.body,
        };
        self.tx
            .send(message)
            .map_err(|_| SignalError::Transport("loopback receiver dropped".to_owned()))
    }
}

/// Stream half of [`loopback`].
#[derive(Debug)]
pub struct LoopbackStream {
    rx: mpsc::UnboundedReceiver<InboundMessage>,
}

#[async_trait]
impl SignalStream for LoopbackStream {
    async fn recv(&mut self) -> Option<InboundMessage> {
        self.rx.recv().await
    }
}
