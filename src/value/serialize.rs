//! JSON rendering and conversion for [`Value`].
//!
//! Serialization follows `JSON.stringify` conventions where JSON has no
//! equivalent: undefined object entries are skipped and undefined array
//! elements become `null`. Shapes JSON cannot carry at all are rendered as
//! descriptive strings.

use super::Value;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_none(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Number(number) if is_integral(*number) => serializer.serialize_i64(*number as i64),
            Value::Number(number) => serializer.serialize_f64(*number),
            Value::BigInt(number) => serializer.collect_str(number),
            Value::String(text) => serializer.serialize_str(text),
            Value::Symbol(symbol) => serializer.collect_str(&format_args!(
                "Symbol({})",
                symbol.description().unwrap_or_default()
            )),
            Value::Function(_) => serializer.serialize_str("[Function]"),
            Value::Date(date) => serializer.serialize_str(&date.to_rfc3339()),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let defined = entries.iter().filter(|(_, value)| !value.is_undefined());
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in defined {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Instance(instance) => {
                serializer.collect_str(&format_args!("[{}]", instance.class_name()))
            }
        }
    }
}

/// Whole numbers render without a fraction so integer fields deserialize.
fn is_integral(number: f64) -> bool {
    number.fract() == 0.0 && number.abs() < i64::MAX as f64
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Value {
    /// Convert into a `serde_json::Value` for typed deserialization.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => {
                Value::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_undefined_entries_are_skipped() {
        let value = Value::from(object! {
            "name" => "Alice",
            "nickname" => Value::Undefined,
            "slots" => vec![Value::Undefined, Value::from(1)],
        });
        assert_eq!(value.to_string(), r#"{"name":"Alice","slots":[null,1]}"#);
    }

    #[test]
    fn test_non_json_shapes_render_as_strings() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let value = Value::from(object! {
            "at" => date,
            "big" => 12_i128,
            "callback" => Value::function(|_| Value::Null),
            "tag" => Value::symbol("tag"),
            "regex" => Value::instance("RegExp", ()),
        });
        assert_eq!(
            value.to_json().unwrap(),
            json!({
                "at": "2024-01-02T03:04:05+00:00",
                "big": "12",
                "callback": "[Function]",
                "tag": "Symbol(tag)",
                "regex": "[RegExp]",
            })
        );
    }

    #[test]
    fn test_from_json_converts_nested_values() {
        let value = Value::from(json!({ "b": 1, "a": [true, null] }));
        let Value::Object(entries) = &value else {
            panic!("expected object");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(value["a"], Value::from(vec![Value::Bool(true), Value::Null]));
    }
}
