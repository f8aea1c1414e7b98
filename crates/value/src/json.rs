//! JSON codec for [`Value`]
//!
//! Scalars map to their direct JSON forms, [`Value::Sequence`] to arrays with
//! element order preserved, [`Value::Mapping`] to objects. Decoding is a
//! standard recursive parse: arrays and objects are unambiguous in JSON, so
//! no classification is involved on this path.

use crate::error::DecodeError;
use crate::Value;

/// Encodes a structured value to JSON bytes.
pub fn encode(value: &Value) -> Vec<u8> {
    // a Value tree is acyclic with string mapping keys, so serialization
    // cannot fail
    serde_json::to_vec(value).expect("structured value always encodes")
}

/// Decodes JSON bytes into a structured value.
pub fn decode(bytes: &[u8]) -> Result<Value, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::collections::BTreeMap;

    fn roundtrip(value: Value) {
        let bytes = encode(&value);
        let decoded = decode(&bytes).expect("encoded value should decode");
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_scalar_roundtrips() {
        roundtrip(Value::Null);
        roundtrip(Value::Bool(true));
        roundtrip(Value::Bool(false));
        roundtrip(Value::Number(0.0));
        roundtrip(Value::Number(-17.5));
        roundtrip(Value::String(String::new()));
        roundtrip(Value::String("hello world".to_string()));
    }

    #[test]
    fn test_sequence_roundtrip_preserves_order() {
        roundtrip(Value::Sequence(vec![
            Value::Number(3.0),
            Value::Number(1.0),
            Value::Number(2.0),
        ]));
    }

    #[test]
    fn test_mapping_roundtrip() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), Value::String("thomas".to_string()));
        fields.insert("admin".to_string(), Value::Bool(false));
        roundtrip(Value::Mapping(fields));
    }

    #[test]
    fn test_decode_nested_document() {
        let bytes = indoc! {br#"
            {
                "status": "ok",
                "count": 2,
                "items": [
                    {"id": 1, "tags": []},
                    {"id": 2, "tags": ["x"]}
                ]
            }
        "#};

        let value = decode(bytes).expect("document should decode");
        let mapping = value.as_mapping().expect("top level is an object");
        assert_eq!(mapping.get("status").and_then(Value::as_str), Some("ok"));
        assert_eq!(mapping.get("count").and_then(Value::as_number), Some(2.0));

        let items = mapping.get("items").and_then(Value::as_sequence).expect("items is an array");
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[1].as_mapping().and_then(|item| item.get("id")).and_then(Value::as_number),
            Some(2.0)
        );
    }

    #[test]
    fn test_decode_integer_becomes_double() {
        let value = decode(b"42").expect("integer literal should decode");
        assert_eq!(value, Value::Number(42.0));
    }

    #[test]
    fn test_decode_malformed_input() {
        assert!(decode(b"{not json").is_err());
        assert!(decode(b"").is_err());
        assert!(decode(b"[1, 2,").is_err());
    }

    #[test]
    fn test_encode_shapes() {
        assert_eq!(encode(&Value::Null), b"null");
        assert_eq!(encode(&Value::Bool(true)), b"true");
        assert_eq!(encode(&Value::String("a\"b".to_string())), br#""a\"b""#);

        let mut fields = BTreeMap::new();
        fields.insert("k".to_string(), Value::Sequence(vec![Value::Null]));
        assert_eq!(encode(&Value::Mapping(fields)), br#"{"k":[null]}"#);
    }
}
