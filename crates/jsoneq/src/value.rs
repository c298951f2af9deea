//! Decoded JSON value model and the serde_json decoder adapter.
//!
//! Numbers are held as `f64`: JSON has a single number type, so `1`, `1.0`
//! and `1e0` decode to the same value.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// A decoded JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(HashMap<String, JsonValue>),
}

/// Variant tag of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl JsonValue {
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }
}

/// Decode one JSON text.
///
/// Nesting depth is not capped: valid documents nested deeper than
/// serde_json's default limit of 128 still decode.
pub fn decode(text: &str) -> Result<JsonValue, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = JsonValue::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    tracing::trace!(kind = %value.kind(), "decoded json document");
    Ok(value)
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_unit<E>(self) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<JsonValue, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_bool<E>(self, value: bool) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::String(value.to_owned()))
            }

            fn visit_string<E>(self, value: String) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                Ok(JsonValue::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<JsonValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(JsonValue::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<JsonValue, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Duplicate keys: the last occurrence wins.
                let mut entries = HashMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
                    entries.insert(key, value);
                }
                Ok(JsonValue::Object(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<&serde_json::Value> for JsonValue {
    /// # Panics
    ///
    /// Panics if a number has no `f64` representation. Such a value cannot be
    /// expressed in this model and is treated as a broken caller contract,
    /// not as a mismatch.
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => JsonValue::Number(f),
                None => panic!("json number {n} has no f64 representation"),
            },
            serde_json::Value::String(s) => JsonValue::String(s.clone()),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(entries) => JsonValue::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        JsonValue::from(&value)
    }
}
