//! Static per-kind signal metadata.

use crate::wire::{signature_string, WireType};

/// Which bus the signal travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusScope {
    /// The system-wide bus.
    #[default]
    System,
    /// A per-login-session bus.
    Session,
}

/// Addressing and wire shape for one event kind.
///
/// Descriptors are process-wide constants: pure data, no I/O, never
/// mutated after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalDescriptor {
    kind: &'static str,
    interface: &'static str,
    scope: BusScope,
    signature: &'static [WireType],
}

impl SignalDescriptor {
    /// Creates a descriptor on the system bus.
    #[must_use]
    pub const fn new(
        kind: &'static str,
        interface: &'static str,
        signature: &'static [WireType],
    ) -> Self {
        Self {
            kind,
            interface,
            scope: BusScope::System,
            signature,
        }
    }

    /// The stable event kind name this descriptor belongs to.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The bus interface name. Unique per kind across the registry.
    #[must_use]
    pub const fn interface_name(&self) -> &'static str {
        self.interface
    }

    /// The bus this kind's signals travel on.
    #[must_use]
    pub const fn scope(&self) -> BusScope {
        self.scope
    }

    /// The ordered slot type tags for this kind's signal body.
    #[must_use]
    pub const fn wire_signature(&self) -> &'static [WireType] {
        self.signature
    }

    /// The object path suffix: the kind with `-` replaced by `_`.
    #[must_use]
    pub fn path_suffix(&self) -> String {
        self.kind.replace('-', "_")
    }

    /// The D-Bus signature string, e.g. `"sssss"`.
    #[must_use]
    pub fn signature_string(&self) -> String {
        signature_string(self.signature)
    }
}
