//! Per-kind transform/parse codecs.
//!
//! One codec per event kind. `transform` flattens a typed event into the
//! positional body matching the kind's wire signature; `parse` rebuilds
//! the event by destructuring the body in the exact inverse order.
//! Codecs are stateless and freely shared across tasks.

use credbus_events::{
    event_kinds, CredentialIssued, CredentialRequested, EventId, Metadata, SecretsEvent,
};
use serde_json::Value;

use crate::canonical::{object_to_canonical, to_canonical};
use crate::descriptor::SignalDescriptor;
use crate::error::SignalError;
use crate::wire::{WireType, WireValue};

/// Converts one event kind to and from its positional signal body.
///
/// The registry dispatches by kind on the way out and by interface name
/// on the way in, so a codec never re-validates kind; being handed a
/// different kind is a wiring bug and reported as a contract violation.
pub trait SignalCodec: Send + Sync {
    /// Static metadata for this codec's kind.
    fn descriptor(&self) -> &SignalDescriptor;

    /// Number of wire values `transform` produces. Checked against the
    /// descriptor's signature length at registration.
    fn arity(&self) -> usize;

    /// Flattens an event into its positional wire body.
    fn transform(&self, event: &SecretsEvent) -> Result<Vec<WireValue>, SignalError>;

    /// Rebuilds an event from a positional wire body.
    fn parse(&self, body: &[WireValue]) -> Result<SecretsEvent, SignalError>;
}

impl std::fmt::Debug for dyn SignalCodec + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalCodec")
            .field("kind", &self.descriptor().kind())
            .finish()
    }
}

const CREDENTIAL_ISSUED_DESCRIPTOR: SignalDescriptor = SignalDescriptor::new(
    event_kinds::CREDENTIAL_ISSUED,
    "Credbus_Secrets_CredentialIssued",
    &[
        WireType::Str, // name
        WireType::Str, // value
        WireType::Str, // metadata, canonical JSON object
        WireType::Str, // id
        WireType::Str, // previous event ids, canonical JSON array
    ],
);

const CREDENTIAL_REQUESTED_DESCRIPTOR: SignalDescriptor = SignalDescriptor::new(
    event_kinds::CREDENTIAL_REQUESTED,
    "Credbus_Secrets_CredentialRequested",
    &[
        WireType::Str, // name
        WireType::Str, // metadata, canonical JSON object
        WireType::Str, // id
        WireType::Str, // previous event ids, canonical JSON array
    ],
);

/// Codec for the `credential-issued` kind.
///
/// Body order is fixed by the wire contract: name, value, metadata, id,
/// previous event ids.
pub struct CredentialIssuedCodec;

impl SignalCodec for CredentialIssuedCodec {
    fn descriptor(&self) -> &SignalDescriptor {
        &CREDENTIAL_ISSUED_DESCRIPTOR
    }

    fn arity(&self) -> usize {
        5
    }

    fn transform(&self, event: &SecretsEvent) -> Result<Vec<WireValue>, SignalError> {
        let SecretsEvent::CredentialIssued(event) = event else {
            return Err(wrong_kind(self.descriptor(), event));
        };
        Ok(vec![
            WireValue::Str(event.name.clone()),
            WireValue::Str(event.value.clone()),
            WireValue::Str(object_to_canonical(&event.metadata)),
            WireValue::Str(event.id.as_str().to_owned()),
            WireValue::Str(encode_id_list(&event.previous_event_ids)),
        ])
    }

    fn parse(&self, body: &[WireValue]) -> Result<SecretsEvent, SignalError> {
        let descriptor = self.descriptor();
        let [name, value, metadata, id, previous] = expect_body::<5>(descriptor, body)?;
        Ok(SecretsEvent::CredentialIssued(CredentialIssued::from_parts(
            expect_str(descriptor, "name", name)?.to_owned(),
            expect_str(descriptor, "value", value)?.to_owned(),
            decode_metadata(descriptor, expect_str(descriptor, "metadata", metadata)?)?,
            EventId::new(expect_str(descriptor, "id", id)?),
            decode_id_list(
                descriptor,
                expect_str(descriptor, "previous_event_ids", previous)?,
            )?,
        )))
    }
}

/// Codec for the `credential-requested` kind.
///
/// Body order: name, metadata, id, previous event ids.
pub struct CredentialRequestedCodec;

impl SignalCodec for CredentialRequestedCodec {
    fn descriptor(&self) -> &SignalDescriptor {
        &CREDENTIAL_REQUESTED_DESCRIPTOR
    }

    fn arity(&self) -> usize {
        4
    }

    fn transform(&self, event: &SecretsEvent) -> Result<Vec<WireValue>, SignalError> {
        let SecretsEvent::CredentialRequested(event) = event else {
            return Err(wrong_kind(self.descriptor(), event));
        };
        Ok(vec![
            WireValue::Str(event.name.clone()),
            WireValue::Str(object_to_canonical(&event.metadata)),
            WireValue::Str(event.id.as_str().to_owned()),
            WireValue::Str(encode_id_list(&event.previous_event_ids)),
        ])
    }

    fn parse(&self, body: &[WireValue]) -> Result<SecretsEvent, SignalError> {
        let descriptor = self.descriptor();
        let [name, metadata, id, previous] = expect_body::<4>(descriptor, body)?;
        Ok(SecretsEvent::CredentialRequested(
            CredentialRequested::from_parts(
                expect_str(descriptor, "name", name)?.to_owned(),
                decode_metadata(descriptor, expect_str(descriptor, "metadata", metadata)?)?,
                EventId::new(expect_str(descriptor, "id", id)?),
                decode_id_list(
                    descriptor,
                    expect_str(descriptor, "previous_event_ids", previous)?,
                )?,
            ),
        ))
    }
}

fn wrong_kind(descriptor: &SignalDescriptor, event: &SecretsEvent) -> SignalError {
    SignalError::ContractViolation {
        interface: descriptor.interface_name(),
        detail: format!(
            "codec for '{}' handed a '{}' event",
            descriptor.kind(),
            event.kind()
        ),
    }
}

fn malformed(descriptor: &SignalDescriptor, reason: String) -> SignalError {
    SignalError::MalformedPayload {
        interface: descriptor.interface_name().to_owned(),
        reason,
    }
}

fn expect_body<'a, const N: usize>(
    descriptor: &SignalDescriptor,
    body: &'a [WireValue],
) -> Result<&'a [WireValue; N], SignalError> {
    body.try_into()
        .map_err(|_| malformed(descriptor, format!("expected {} values, got {}", N, body.len())))
}

fn expect_str<'a>(
    descriptor: &SignalDescriptor,
    slot: &str,
    value: &'a WireValue,
) -> Result<&'a str, SignalError> {
    value.as_str().ok_or_else(|| {
        malformed(
            descriptor,
            format!("{} slot is not a string (got {:?})", slot, value.wire_type()),
        )
    })
}

fn encode_id_list(ids: &[EventId]) -> String {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| Value::String(id.as_str().to_owned()))
        .collect();
    to_canonical(&Value::Array(items))
}

fn decode_metadata(descriptor: &SignalDescriptor, raw: &str) -> Result<Metadata, SignalError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| malformed(descriptor, format!("metadata slot is not valid JSON: {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(malformed(
            descriptor,
            format!(
                "metadata slot decoded to {}, expected an object",
                json_type_name(&other)
            ),
        )),
    }
}

fn decode_id_list(descriptor: &SignalDescriptor, raw: &str) -> Result<Vec<EventId>, SignalError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        malformed(
            descriptor,
            format!("previous_event_ids slot is not valid JSON: {e}"),
        )
    })?;
    let Value::Array(items) = value else {
        return Err(malformed(
            descriptor,
            format!(
                "previous_event_ids slot decoded to {}, expected an array",
                json_type_name(&value)
            ),
        ));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(EventId::new(s)),
            other => Err(malformed(
                descriptor,
                format!(
                    "previous_event_ids entry is {}, expected a string",
                    json_type_name(&other)
                ),
            )),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn issued(
        name: &str,
        value: &str,
        metadata: Metadata,
        id: &str,
        previous: &[&str],
    ) -> SecretsEvent {
        SecretsEvent::CredentialIssued(CredentialIssued::from_parts(
            name.to_owned(),
            value.to_owned(),
            metadata,
            EventId::new(id),
            previous.iter().map(|s| EventId::new(*s)).collect(),
        ))
    }

    fn prod_metadata() -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("env".to_owned(), json!("prod"));
        metadata
    }

    fn strs(values: &[&str]) -> Vec<WireValue> {
        values.iter().map(|v| WireValue::from(*v)).collect()
    }

    #[test]
    fn test_transform_concrete_vector() {
        let event = issued("db-pass", "s3cr3t", prod_metadata(), "evt-1", &["evt-0"]);
        let body = CredentialIssuedCodec.transform(&event).unwrap();
        assert_eq!(
            body,
            strs(&[
                "db-pass",
                "s3cr3t",
                r#"{"env":"prod"}"#,
                "evt-1",
                r#"["evt-0"]"#,
            ])
        );
    }

    #[test]
    fn test_parse_concrete_vector() {
        let body = strs(&[
            "db-pass",
            "s3cr3t",
            r#"{"env":"prod"}"#,
            "evt-1",
            r#"["evt-0"]"#,
        ]);
        let event = CredentialIssuedCodec.parse(&body).unwrap();
        assert_eq!(
            event,
            issued("db-pass", "s3cr3t", prod_metadata(), "evt-1", &["evt-0"])
        );
    }

    #[test]
    fn test_transform_length_matches_signature() {
        let event = issued("k", "v", Metadata::new(), "evt-1", &[]);
        let body = CredentialIssuedCodec.transform(&event).unwrap();
        assert_eq!(
            body.len(),
            CredentialIssuedCodec.descriptor().wire_signature().len()
        );
        for (slot, tag) in body
            .iter()
            .zip(CredentialIssuedCodec.descriptor().wire_signature())
        {
            assert_eq!(slot.wire_type(), *tag);
        }
    }

    #[test]
    fn test_empty_previous_ids_roundtrip() {
        let event = issued("k", "v", Metadata::new(), "evt-1", &[]);
        let body = CredentialIssuedCodec.transform(&event).unwrap();
        assert_eq!(body[4], WireValue::from("[]"));
        assert_eq!(CredentialIssuedCodec.parse(&body).unwrap(), event);
    }

    #[test]
    fn test_previous_ids_order_survives() {
        let event = issued("k", "v", Metadata::new(), "evt-9", &["evt-2", "evt-0", "evt-1"]);
        let body = CredentialIssuedCodec.transform(&event).unwrap();
        let parsed = CredentialIssuedCodec.parse(&body).unwrap();
        assert_eq!(
            parsed.previous_event_ids(),
            event.previous_event_ids(),
            "causal order must survive the wire"
        );
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        let body = strs(&["only", "four", "values", "here"]);
        let err = CredentialIssuedCodec.parse(&body).unwrap_err();
        assert!(matches!(err, SignalError::MalformedPayload { .. }), "{err}");
    }

    #[test]
    fn test_invalid_metadata_json_is_malformed() {
        let body = strs(&["db-pass", "s3cr3t", "{not json", "evt-1", "[]"]);
        let err = CredentialIssuedCodec.parse(&body).unwrap_err();
        assert!(matches!(err, SignalError::MalformedPayload { .. }), "{err}");
    }

    #[test]
    fn test_non_object_metadata_is_malformed() {
        let body = strs(&["db-pass", "s3cr3t", r#"["not","an","object"]"#, "evt-1", "[]"]);
        let err = CredentialIssuedCodec.parse(&body).unwrap_err();
        assert!(matches!(err, SignalError::MalformedPayload { .. }), "{err}");
    }

    #[test]
    fn test_non_array_previous_ids_is_malformed() {
        let body = strs(&["db-pass", "s3cr3t", "{}", "evt-1", r#"{"bad":true}"#]);
        let err = CredentialIssuedCodec.parse(&body).unwrap_err();
        assert!(matches!(err, SignalError::MalformedPayload { .. }), "{err}");
    }

    #[test]
    fn test_non_string_previous_id_entry_is_malformed() {
        let body = strs(&["db-pass", "s3cr3t", "{}", "evt-1", "[1,2]"]);
        let err = CredentialIssuedCodec.parse(&body).unwrap_err();
        assert!(matches!(err, SignalError::MalformedPayload { .. }), "{err}");
    }

    #[test]
    fn test_non_string_slot_is_malformed() {
        let body = vec![
            WireValue::from("db-pass"),
            WireValue::U32(42),
            WireValue::from("{}"),
            WireValue::from("evt-1"),
            WireValue::from("[]"),
        ];
        let err = CredentialIssuedCodec.parse(&body).unwrap_err();
        assert!(matches!(err, SignalError::MalformedPayload { .. }), "{err}");
    }

    #[test]
    fn test_wrong_kind_is_contract_violation() {
        let event = SecretsEvent::CredentialRequested(CredentialRequested::from_parts(
            "db-pass".to_owned(),
            Metadata::new(),
            EventId::new("evt-1"),
            vec![],
        ));
        let err = CredentialIssuedCodec.transform(&event).unwrap_err();
        assert!(matches!(err, SignalError::ContractViolation { .. }), "{err}");
    }

    #[test]
    fn test_requested_roundtrip() {
        let event = SecretsEvent::CredentialRequested(CredentialRequested::from_parts(
            "db-pass".to_owned(),
            prod_metadata(),
            EventId::new("evt-5"),
            vec![EventId::new("evt-4")],
        ));
        let body = CredentialRequestedCodec.transform(&event).unwrap();
        assert_eq!(body.len(), 4);
        assert_eq!(CredentialRequestedCodec.parse(&body).unwrap(), event);
    }

    #[test]
    fn test_metadata_key_order_is_canonical() {
        let mut metadata = Metadata::new();
        metadata.insert("zone".to_owned(), json!("eu"));
        metadata.insert("env".to_owned(), json!("prod"));
        let event = issued("k", "v", metadata, "evt-1", &[]);
        let body = CredentialIssuedCodec.transform(&event).unwrap();
        assert_eq!(body[2], WireValue::from(r#"{"env":"prod","zone":"eu"}"#));
    }

    proptest! {
        #[test]
        fn prop_issued_roundtrip(
            name in ".*",
            value in ".*",
            metadata in prop::collection::btree_map("[a-z]{1,8}", ".*", 0..6),
            id in ".*",
            previous in prop::collection::vec(".*", 0..5),
        ) {
            let metadata: Metadata = metadata
                .into_iter()
                .map(|(k, v)| (k, json!(v)))
                .collect();
            let event = SecretsEvent::CredentialIssued(CredentialIssued::from_parts(
                name,
                value,
                metadata,
                EventId::new(id),
                previous.into_iter().map(EventId::new).collect(),
            ));
            let body = CredentialIssuedCodec.transform(&event).unwrap();
            prop_assert_eq!(body.len(), 5);
            let parsed = CredentialIssuedCodec.parse(&body).unwrap();
            prop_assert_eq!(parsed, event);
        }
    }
}
