//! Conversions between [`WddxValue`] and `serde_json::Value`.

use serde_json::{Map, Number, Value as JsonValue};

use crate::constants::CLASS_TAG;
use crate::WddxValue;

/// Converts a JSON value into the codec's value model.
///
/// JSON objects become ordered structs (map insertion order is
/// preserved); no object reconstruction happens on this path. Numbers
/// that fit `i64` become integral, everything else floating.
pub fn from_json(value: &JsonValue) -> WddxValue {
    match value {
        JsonValue::Null => WddxValue::Null,
        JsonValue::Bool(flag) => WddxValue::Bool(*flag),
        JsonValue::Number(number) => match number.as_i64() {
            Some(n) => WddxValue::Integer(n),
            None => WddxValue::Float(number.as_f64().unwrap_or(0.0)),
        },
        JsonValue::String(text) => WddxValue::Str(text.clone()),
        JsonValue::Array(items) => WddxValue::Array(items.iter().map(from_json).collect()),
        JsonValue::Object(map) => WddxValue::Struct(
            map.iter()
                .map(|(name, value)| (name.clone(), from_json(value)))
                .collect(),
        ),
    }
}

/// Converts a value into JSON.
///
/// Objects become a JSON object with a leading `php_class_name` key
/// followed by their fields, mirroring the wire shape. For duplicate
/// struct member names the first occurrence wins. Non-finite floats
/// have no JSON representation and become null.
pub fn to_json(value: &WddxValue) -> JsonValue {
    match value {
        WddxValue::Null => JsonValue::Null,
        WddxValue::Str(text) => JsonValue::String(text.clone()),
        WddxValue::Integer(n) => JsonValue::Number(Number::from(*n)),
        WddxValue::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        WddxValue::Bool(flag) => JsonValue::Bool(*flag),
        WddxValue::Array(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        WddxValue::Struct(members) => {
            let mut map = Map::new();
            for (name, value) in members {
                map.entry(name.clone()).or_insert_with(|| to_json(value));
            }
            JsonValue::Object(map)
        }
        WddxValue::Object(object) => {
            let mut map = Map::new();
            map.insert(CLASS_TAG.to_string(), JsonValue::String(object.class_name()));
            for (name, value) in object.fields() {
                map.entry(name).or_insert_with(|| to_json(&value));
            }
            JsonValue::Object(map)
        }
    }
}
