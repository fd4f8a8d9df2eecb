//! Value model for analyzer output trees
//!
//! The analyzer reports its syntax tree as JSON, and the shape of each
//! node depends on the grammar production that emitted it. There is no
//! fixed schema to deserialize into, so the input domain is the closed
//! set of JSON shapes itself.
//!
//! `Mapping` keeps its entries as an ordered vector rather than a map
//! type: keys are unique, and their document order is significant for
//! display. The hand-written `Deserialize` visitor preserves that order
//! straight from the parser.

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically shaped tree value produced by the external analyzer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// Ordered key/value entries; keys are unique, insertion order is
    /// significant for display.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// True for the explicit null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The elements of a sequence, or `None` for any other shape.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The entries of a mapping, or `None` for any other shape.
    pub fn as_mapping(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Number(v.into()))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Number(v.into()))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                // JSON cannot carry NaN or infinities; reject rather than guess
                serde_json::Number::from_f64(v)
                    .map(Value::Number)
                    .ok_or_else(|| E::custom("non-finite number"))
            }

            fn visit_str<E>(self, v: &str) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::String(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::String(v))
            }

            fn visit_unit<E>(self) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Entries arrive in document order and are kept that way
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.push((key, value));
                }
                Ok(Value::Mapping(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).expect("test JSON should parse")
    }

    #[test]
    fn test_deserialize_scalars() {
        assert_eq!(parse("null"), Value::Null);
        assert_eq!(parse("true"), Value::Bool(true));
        assert_eq!(parse("42"), Value::Number(42.into()));
        assert_eq!(parse("\"x\""), Value::String("x".to_string()));
    }

    #[test]
    fn test_deserialize_preserves_mapping_order() {
        let value = parse(r#"{"z": 1, "a": 2, "m": 3}"#);
        let entries = value.as_mapping().expect("should be a mapping");
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_deserialize_nested() {
        let value = parse(r#"{"If": {"cond": "X", "then": ["A", "B"]}}"#);
        let entries = value.as_mapping().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "If");

        let payload = entries[0].1.as_mapping().unwrap();
        assert_eq!(payload[0].0, "cond");
        assert_eq!(payload[1].0, "then");
        assert_eq!(payload[1].1.as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_serialize_round_trip_keeps_order() {
        let value = parse(r#"{"tipo": "int", "nome": "x"}"#);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"tipo":"int","nome":"x"}"#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("[]"), Value::Sequence(vec![]));
        assert_eq!(parse("{}"), Value::Mapping(vec![]));
    }
}
