//! Scalars with more than one wire representation

use chrono::DateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a string field that some servers send as a number
///
/// `null` decodes as an empty string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(value) => Ok(value),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}

/// Decode a timestamp into epoch milliseconds
///
/// Legacy payloads carry epoch milliseconds, newer ones RFC 3339 strings.
/// `null` decodes as `0`.
pub fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {n}"))),
        Value::String(value) => DateTime::parse_from_rfc3339(&value)
            .map(|time| time.timestamp_millis())
            .map_err(|e| D::Error::custom(format!("invalid timestamp `{value}`: {e}"))),
        other => Err(D::Error::custom(format!(
            "expected a timestamp, found {other}"
        ))),
    }
}
