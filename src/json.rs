//! JSON ↔ boundary value conversion.
//!
//! Harnesses build argument bags from JSON literals and snapshot results
//! back out. Only the JSON-representable subset converts: dates and object
//! references refuse to leave, and arrays never enter (the boundary has no
//! sequence type).

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value as Json;

use crate::bag::Bag;
use crate::error::BridgeError;
use crate::value::Value;

/// Convert a JSON value into a boundary value.
///
/// Objects become bags, recursively. Arrays are rejected.
pub fn json_to_value(json: &Json) -> Result<Value, BridgeError> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| BridgeError::type_mismatch("representable number", "number")),
        Json::String(s) => Ok(Value::from(s.as_str())),
        Json::Object(_) => json_to_bag(json).map(Value::Bag),
        Json::Array(_) => Err(BridgeError::type_mismatch("non-array JSON value", "array")),
    }
}

/// Convert a JSON object into a bag. Rejects every other JSON shape.
pub fn json_to_bag(json: &Json) -> Result<Bag, BridgeError> {
    let Json::Object(map) = json else {
        return Err(BridgeError::type_mismatch("JSON object", json_type_name(json)));
    };
    let mut bag = Bag::new();
    for (key, value) in map {
        bag.insert(key.as_str(), json_to_value(value)?);
    }
    Ok(bag)
}

/// Convert a boundary value to JSON.
///
/// Dates and object references have no faithful JSON form and are refused;
/// non-finite numbers likewise.
pub fn value_to_json(value: &Value) -> Result<Json, BridgeError> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::Bool(b) => Ok(Json::Bool(*b)),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(Json::Number)
            .ok_or_else(|| BridgeError::type_mismatch("finite number", "number")),
        Value::String(s) => Ok(Json::String(s.as_str().to_owned())),
        Value::Bag(bag) => bag_to_json(bag),
        Value::Date(_) => Err(BridgeError::type_mismatch(
            "JSON-representable value",
            "date",
        )),
        Value::Object(_) => Err(BridgeError::type_mismatch(
            "JSON-representable value",
            "object",
        )),
    }
}

/// Convert a bag to a JSON object, preserving entry order.
pub fn bag_to_json(bag: &Bag) -> Result<Json, BridgeError> {
    let mut map = serde_json::Map::with_capacity(bag.len());
    for (key, value) in bag.iter() {
        map.insert(key.as_str().to_owned(), value_to_json(value)?);
    }
    Ok(Json::Object(map))
}

fn json_type_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match value_to_json(self) {
            Ok(json) => json.serialize(serializer),
            Err(err) => Err(S::Error::custom(err)),
        }
    }
}

impl Serialize for Bag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
