//! Publisher and receiver glue between registry, codec, and transport.

use std::sync::Arc;

use credbus_events::SecretsEvent;

use crate::error::SignalError;
use crate::registry::SignalRegistry;
use crate::transport::{InboundMessage, OutboundSignal, SignalSink, SignalStream};

/// Publishes domain events as bus signals.
pub struct SignalPublisher<S> {
    registry: Arc<SignalRegistry>,
    sink: S,
}

impl<S: SignalSink> SignalPublisher<S> {
    pub fn new(registry: Arc<SignalRegistry>, sink: S) -> Self {
        Self { registry, sink }
    }

    /// Emits one event as a signal at its kind's path and interface.
    pub async fn publish(&self, event: &SecretsEvent) -> Result<(), SignalError> {
        let codec = self.registry.codec_for_kind(event.kind())?;
        let descriptor = codec.descriptor();
        let body = codec.transform(event)?;
        debug_assert_eq!(body.len(), descriptor.wire_signature().len());
        let signal = OutboundSignal {
            path: self.registry.path_for(event),
            interface: descriptor.interface_name().to_owned(),
            signature: descriptor.signature_string(),
            body,
        };
        tracing::debug!(
            interface = %signal.interface,
            path = %signal.path,
            event_id = %event.id(),
            "publishing signal"
        );
        self.sink.publish(signal).await
    }
}

/// Reconstructs domain events from inbound bus messages.
///
/// Errors are returned, not swallowed: the caller decides whether to
/// drop, log, or escalate a bad message, and the stream stays usable for
/// the next one.
pub struct SignalReceiver<S> {
    registry: Arc<SignalRegistry>,
    stream: S,
}

impl<S: SignalStream> SignalReceiver<S> {
    pub fn new(registry: Arc<SignalRegistry>, stream: S) -> Self {
        Self { registry, stream }
    }

    /// Next event off the bus. `None` when the stream has ended.
    pub async fn next_event(&mut self) -> Option<Result<SecretsEvent, SignalError>> {
        let message = self.stream.recv().await?;
        Some(self.decode(message))
    }

    fn decode(&self, message: InboundMessage) -> Result<SecretsEvent, SignalError> {
        let codec = match self.registry.codec_for_interface(&message.interface) {
            Ok(codec) => codec,
            Err(err) => {
                tracing::warn!(
                    interface = %message.interface,
                    error = %err,
                    "signal from unregistered interface"
                );
                return Err(err);
            }
        };
        codec.parse(&message.body).inspect_err(|err| {
            tracing::warn!(
                interface = %message.interface,
                error = %err,
                "failed to parse signal body"
            );
        })
    }
}
