//! Kind and interface routing tables.

use std::collections::HashMap;
use std::sync::Arc;

use credbus_events::SecretsEvent;

use crate::codec::{CredentialIssuedCodec, CredentialRequestedCodec, SignalCodec};
use crate::error::SignalError;
use crate::path::{signal_path, DBUS_PATH};

/// Maps event kinds and interface names to their codecs.
///
/// Built once during startup by an explicit initializer; lookups after
/// that are read-only, so the registry is shared as
/// `Arc<SignalRegistry>` without locking. Registering a new kind is the
/// only change needed to route it; dispatch code stays untouched.
pub struct SignalRegistry {
    base_path: String,
    by_kind: HashMap<&'static str, Arc<dyn SignalCodec>>,
    by_interface: HashMap<&'static str, Arc<dyn SignalCodec>>,
}

impl SignalRegistry {
    /// Creates an empty registry rooted at `base_path`.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            by_kind: HashMap::new(),
            by_interface: HashMap::new(),
        }
    }

    /// Registry with every secrets event kind registered, rooted at
    /// [`DBUS_PATH`].
    pub fn secrets() -> Result<Self, SignalError> {
        let mut registry = Self::new(DBUS_PATH);
        registry.register(Arc::new(CredentialIssuedCodec))?;
        registry.register(Arc::new(CredentialRequestedCodec))?;
        Ok(registry)
    }

    /// Registers a codec under its descriptor's kind and interface name.
    ///
    /// Fails when the interface name or kind is already taken, or when
    /// the codec's declared arity disagrees with the descriptor's wire
    /// signature length. All three are startup-time programming errors.
    pub fn register(&mut self, codec: Arc<dyn SignalCodec>) -> Result<(), SignalError> {
        let descriptor = codec.descriptor();
        let expected = descriptor.wire_signature().len();
        if codec.arity() != expected {
            return Err(SignalError::ContractViolation {
                interface: descriptor.interface_name(),
                detail: format!(
                    "codec arity {} does not match wire signature length {}",
                    codec.arity(),
                    expected
                ),
            });
        }
        if self.by_interface.contains_key(descriptor.interface_name()) {
            return Err(SignalError::DuplicateInterface(
                descriptor.interface_name().to_owned(),
            ));
        }
        if self.by_kind.contains_key(descriptor.kind()) {
            return Err(SignalError::ContractViolation {
                interface: descriptor.interface_name(),
                detail: format!("kind '{}' already registered", descriptor.kind()),
            });
        }
        self.by_kind.insert(descriptor.kind(), Arc::clone(&codec));
        self.by_interface.insert(descriptor.interface_name(), codec);
        Ok(())
    }

    /// Codec for an event kind, used on the publish path.
    pub fn codec_for_kind(&self, kind: &str) -> Result<&dyn SignalCodec, SignalError> {
        self.by_kind
            .get(kind)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| SignalError::UnknownEventKind(kind.to_owned()))
    }

    /// Codec for an inbound message's interface name.
    pub fn codec_for_interface(&self, interface: &str) -> Result<&dyn SignalCodec, SignalError> {
        self.by_interface
            .get(interface)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| SignalError::UnknownInterface(interface.to_owned()))
    }

    /// Bus object path for an event.
    #[must_use]
    pub fn path_for(&self, event: &SecretsEvent) -> String {
        signal_path(&self.base_path, event.kind())
    }

    /// The base object path this registry was rooted at.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_kind.len()
    }

    /// True when no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}
