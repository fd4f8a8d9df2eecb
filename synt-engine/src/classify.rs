//! Shape classifier
//!
//! Decides how a value should be presented: tagged variant, plain
//! record, scalar, or null. Classification is a pure, total function of
//! the value alone - every input, however malformed relative to any
//! assumed grammar, maps to exactly one variant.
//!
//! The variant heuristic: a mapping with exactly one entry whose key
//! starts with an uppercase ASCII letter reads as a tagged variant;
//! every other mapping reads as a record. A one-field record whose
//! field name happens to be uppercase-initial is therefore
//! indistinguishable from a variant. The heuristic is kept exactly as
//! the analyzer's encoding implies it; disambiguation would need an
//! explicit discriminator on the wire.

use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Z]").expect("valid pattern"));

/// True when a string reads as a bare tag token (uppercase ASCII initial).
pub fn is_tag_like(s: &str) -> bool {
    TAG_PATTERN.is_match(s)
}

/// A scalar as carried by a classified node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Number(&'a serde_json::Number),
    String(&'a str),
}

/// The fields of a record node.
///
/// A sequence encountered as a node of its own (an element of another
/// sequence, for instance) presents as a record keyed by element index,
/// so records come in two flavors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSet<'a> {
    /// Named fields of a mapping, in document order.
    Named(&'a [(String, Value)]),
    /// Sequence elements addressed by index.
    Indexed(&'a [Value]),
}

impl FieldSet<'_> {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            FieldSet::Named(entries) => entries.len(),
            FieldSet::Indexed(items) => items.len(),
        }
    }
}

/// Payload carried by a tagged variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnumPayload<'a> {
    /// Mapping payload: the variant's named fields, in order.
    Fields(&'a [(String, Value)]),
    /// Non-mapping payload: the synthetic single `value` field,
    /// rendered inline on the variant's own row.
    Value(&'a Value),
}

/// A value as the presentation layer interprets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifiedNode<'a> {
    /// Explicit null marker.
    Null,
    /// A single literal row.
    Scalar(Scalar<'a>),
    /// Tagged variant derived from a single uppercase-keyed mapping.
    Enum {
        tag: &'a str,
        payload: EnumPayload<'a>,
    },
    /// Plain record of fields; no tag marker of its own.
    Struct { fields: FieldSet<'a> },
}

/// Classify a value.
///
/// Total over the whole `Value` domain: empty mappings, empty
/// sequences, and single non-identifier keys all have a defined answer,
/// so the surrounding application can always show something even for a
/// partial or surprising analyzer result.
pub fn classify(value: &Value) -> ClassifiedNode<'_> {
    match value {
        Value::Null => ClassifiedNode::Null,
        Value::Bool(b) => ClassifiedNode::Scalar(Scalar::Bool(*b)),
        Value::Number(n) => ClassifiedNode::Scalar(Scalar::Number(n)),
        Value::String(s) => ClassifiedNode::Scalar(Scalar::String(s)),
        Value::Sequence(items) => ClassifiedNode::Struct {
            fields: FieldSet::Indexed(items),
        },
        Value::Mapping(entries) => match entries.as_slice() {
            [(key, payload)] if is_tag_like(key) => ClassifiedNode::Enum {
                tag: key,
                payload: match payload {
                    Value::Mapping(fields) => EnumPayload::Fields(fields),
                    other => EnumPayload::Value(other),
                },
            },
            fields => ClassifiedNode::Struct {
                fields: FieldSet::Named(fields),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).expect("test JSON should parse")
    }

    #[test]
    fn test_null_classifies_as_null() {
        assert_eq!(classify(&Value::Null), ClassifiedNode::Null);
    }

    #[test]
    fn test_scalars_classify_as_scalar() {
        assert!(matches!(
            classify(&parse("true")),
            ClassifiedNode::Scalar(Scalar::Bool(true))
        ));
        assert!(matches!(
            classify(&parse("42")),
            ClassifiedNode::Scalar(Scalar::Number(_))
        ));
        assert!(matches!(
            classify(&parse("\"x\"")),
            ClassifiedNode::Scalar(Scalar::String("x"))
        ));
    }

    #[test]
    fn test_single_uppercase_key_is_enum() {
        let value = parse(r#"{"If": {"cond": "X"}}"#);
        match classify(&value) {
            ClassifiedNode::Enum { tag, payload } => {
                assert_eq!(tag, "If");
                assert!(matches!(payload, EnumPayload::Fields(fields) if fields.len() == 1));
            }
            other => panic!("expected Enum, got {:?}", other),
        }
    }

    #[test]
    fn test_single_lowercase_key_is_struct() {
        let value = parse(r#"{"cond": "X"}"#);
        assert!(matches!(classify(&value), ClassifiedNode::Struct { .. }));
    }

    #[test]
    fn test_two_keys_are_struct_regardless_of_casing() {
        let value = parse(r#"{"Tipo": "int", "Nome": "x"}"#);
        match classify(&value) {
            ClassifiedNode::Struct { fields } => assert_eq!(fields.len(), 2),
            other => panic!("expected Struct, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_mapping_is_struct() {
        let value = parse("{}");
        match classify(&value) {
            ClassifiedNode::Struct { fields } => assert!(fields.is_empty()),
            other => panic!("expected Struct, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_payload_is_synthetic_value() {
        let value = parse(r#"{"Num": 42}"#);
        match classify(&value) {
            ClassifiedNode::Enum { tag, payload } => {
                assert_eq!(tag, "Num");
                assert!(matches!(payload, EnumPayload::Value(Value::Number(_))));
            }
            other => panic!("expected Enum, got {:?}", other),
        }
    }

    #[test]
    fn test_sequence_payload_is_synthetic_value() {
        let value = parse(r#"{"Block": [1, 2]}"#);
        match classify(&value) {
            ClassifiedNode::Enum { payload, .. } => {
                assert!(matches!(payload, EnumPayload::Value(Value::Sequence(_))));
            }
            other => panic!("expected Enum, got {:?}", other),
        }
    }

    #[test]
    fn test_sequence_presents_as_indexed_record() {
        let value = parse(r#"[1, 2, 3]"#);
        match classify(&value) {
            ClassifiedNode::Struct {
                fields: FieldSet::Indexed(items),
            } => assert_eq!(items.len(), 3),
            other => panic!("expected indexed Struct, got {:?}", other),
        }
    }

    #[test]
    fn test_non_identifier_single_key_is_struct() {
        let value = parse(r#"{"1abc": null}"#);
        assert!(matches!(classify(&value), ClassifiedNode::Struct { .. }));
    }

    #[test]
    fn test_is_tag_like() {
        assert!(is_tag_like("If"));
        assert!(is_tag_like("X"));
        assert!(!is_tag_like("if"));
        assert!(!is_tag_like("1If"));
        assert!(!is_tag_like(""));
        assert!(!is_tag_like("Ä")); // uppercase, but not ASCII
    }

    #[test]
    fn test_classify_is_pure() {
        let value = parse(r#"{"If": {"cond": "X", "then": ["A"]}}"#);
        assert_eq!(classify(&value), classify(&value));
    }
}
