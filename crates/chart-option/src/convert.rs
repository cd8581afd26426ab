//! Conversions between option values and JSON / TOML documents
//!
//! JSON `null` maps to the `Null` tombstone. The placeholder has no
//! native JSON form, so it is written as the reserved single-key object
//! `{"$placeholder": true}`; the same table shape is recognized in TOML.
//! JSON has no NaN or infinity either. Those are written as the strings
//! `"NaN"`, `"Infinity"` and `"-Infinity"` so that they never read back as
//! a tombstone.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::value::{OptionMap, OptionValue};
use crate::PLACEHOLDER_KEY;

fn is_placeholder_object(map: &Map<String, Value>) -> bool {
    map.len() == 1 && map.get(PLACEHOLDER_KEY) == Some(&Value::Bool(true))
}

fn number_to_json(n: f64) -> Value {
    if n.is_nan() {
        return Value::String("NaN".to_string());
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return Value::String(text.to_string());
    }
    // Integral values print as integers so `4` round-trips as `4`, not `4.0`
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return Value::Number((n as i64).into());
    }
    Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}

impl OptionValue {
    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            OptionValue::Null => Value::Null,
            OptionValue::Bool(b) => Value::Bool(*b),
            OptionValue::Number(n) => number_to_json(*n),
            OptionValue::String(s) => Value::String(s.clone()),
            OptionValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            OptionValue::Map(map) => map.to_json(),
            OptionValue::Placeholder => {
                let mut marker = Map::new();
                marker.insert(PLACEHOLDER_KEY.to_string(), Value::Bool(true));
                Value::Object(marker)
            }
        }
    }
}

impl OptionMap {
    /// Convert to a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Build from a JSON value, which must be an object
    pub fn from_json(value: Value) -> Option<Self> {
        match OptionValue::from(value) {
            OptionValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Build from a TOML value, which must be a table
    pub fn from_toml(value: toml::Value) -> Option<Self> {
        match OptionValue::from(value) {
            OptionValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => OptionValue::Null,
            Value::Bool(b) => OptionValue::Bool(b),
            Value::Number(n) => n.as_f64().map(OptionValue::Number).unwrap_or_default(),
            Value::String(s) => OptionValue::String(s),
            Value::Array(items) => {
                OptionValue::Array(items.into_iter().map(OptionValue::from).collect())
            }
            Value::Object(map) if is_placeholder_object(&map) => OptionValue::Placeholder,
            Value::Object(map) => OptionValue::Map(map.into_iter().collect()),
        }
    }
}

impl From<toml::Value> for OptionValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => OptionValue::String(s),
            toml::Value::Integer(i) => OptionValue::Number(i as f64),
            toml::Value::Float(f) => OptionValue::Number(f),
            toml::Value::Boolean(b) => OptionValue::Bool(b),
            toml::Value::Datetime(dt) => OptionValue::String(dt.to_string()),
            toml::Value::Array(items) => {
                OptionValue::Array(items.into_iter().map(OptionValue::from).collect())
            }
            toml::Value::Table(table) => {
                let is_placeholder = table.len() == 1
                    && table.get(PLACEHOLDER_KEY) == Some(&toml::Value::Boolean(true));
                if is_placeholder {
                    OptionValue::Placeholder
                } else {
                    OptionValue::Map(table.into_iter().collect())
                }
            }
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(OptionValue::from)
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OptionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(object.into_iter().collect())
    }
}
