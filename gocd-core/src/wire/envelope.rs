//! Collection envelopes
//!
//! Newer endpoints wrap collections as `{"_embedded": {"<key>": [...]}}`,
//! older ones return a bare array. [`decode_collection`] accepts both.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

const EMBEDDED: &str = "_embedded";

/// Decode a collection from either a bare array or an `_embedded` envelope
///
/// A missing or `null` collection inside the envelope is an empty list. Any
/// other top-level shape is an error.
pub fn decode_collection<T: DeserializeOwned>(
    value: Value,
    key: &str,
) -> Result<Vec<T>, serde_json::Error> {
    match value {
        Value::Array(_) => serde_json::from_value(value),
        Value::Object(mut object) => {
            let embedded = object.remove(EMBEDDED).ok_or_else(|| {
                serde_json::Error::custom(format!("missing `{EMBEDDED}` envelope"))
            })?;
            match embedded {
                Value::Object(mut collections) => match collections.remove(key) {
                    None | Some(Value::Null) => Ok(Vec::new()),
                    Some(items) => serde_json::from_value(items),
                },
                Value::Null => Ok(Vec::new()),
                other => Err(serde_json::Error::custom(format!(
                    "`{EMBEDDED}` must be an object, found {other}"
                ))),
            }
        }
        other => Err(serde_json::Error::custom(format!(
            "expected a collection of `{key}`, found {other}"
        ))),
    }
}

/// Parse `body` and decode the collection named `key`
pub fn decode_collection_str<T: DeserializeOwned>(
    body: &str,
    key: &str,
) -> Result<Vec<T>, serde_json::Error> {
    decode_collection(serde_json::from_str(body)?, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embedded_envelope() {
        let items: Vec<String> =
            decode_collection(json!({"_links": {}, "_embedded": {"agents": ["a", "b"]}}), "agents")
                .unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_bare_array() {
        let items: Vec<u32> = decode_collection(json!([1, 2, 3]), "ignored").unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let items: Vec<String> = decode_collection(json!({"_embedded": {}}), "agents").unwrap();
        assert!(items.is_empty());

        let items: Vec<String> =
            decode_collection(json!({"_embedded": {"agents": null}}), "agents").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_unexpected_shapes() {
        assert!(decode_collection::<String>(json!({"agents": []}), "agents").is_err());
        assert!(decode_collection::<String>(json!("agents"), "agents").is_err());
        assert!(decode_collection::<String>(json!({"_embedded": []}), "agents").is_err());
    }
}
