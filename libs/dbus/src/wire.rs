//! Wire-level value and type-tag definitions.
//!
//! A signal body is a positional sequence of primitive values. Each slot
//! is tagged by an explicit [`WireType`] rather than an ad hoc string
//! marker, so a codec whose output disagrees with its descriptor fails at
//! registration instead of on the bus.

/// Type tag for one positional slot of a signal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// UTF-8 string (D-Bus `s`).
    Str,
    /// Boolean (D-Bus `b`).
    Bool,
    /// Unsigned 32-bit integer (D-Bus `u`).
    U32,
    /// Signed 64-bit integer (D-Bus `x`).
    I64,
    /// IEEE 754 double (D-Bus `d`).
    F64,
}

impl WireType {
    /// The D-Bus type code for this tag.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            WireType::Str => 's',
            WireType::Bool => 'b',
            WireType::U32 => 'u',
            WireType::I64 => 'x',
            WireType::F64 => 'd',
        }
    }
}

/// One positional value in a signal body.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Str(String),
    Bool(bool),
    U32(u32),
    I64(i64),
    F64(f64),
}

impl WireValue {
    /// The type tag for this value.
    #[must_use]
    pub fn wire_type(&self) -> WireType {
        match self {
            WireValue::Str(_) => WireType::Str,
            WireValue::Bool(_) => WireType::Bool,
            WireValue::U32(_) => WireType::U32,
            WireValue::I64(_) => WireType::I64,
            WireValue::F64(_) => WireType::F64,
        }
    }

    /// Borrows the string payload, if this is a string slot.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        WireValue::Str(s)
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        WireValue::Str(s.to_owned())
    }
}

/// Renders a wire signature as a D-Bus signature string (e.g. `"sssss"`).
#[must_use]
pub fn signature_string(signature: &[WireType]) -> String {
    signature.iter().map(|t| t.code()).collect()
}
