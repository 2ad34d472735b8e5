//! Decoding for the backend's inconsistent list envelopes.
//!
//! Different endpoints wrap collections differently: some return
//! `{"favorites": [...]}`, some a bare array, some an empty object when the
//! collection is empty, and the order endpoints wrap under `"data"`. Rather
//! than sniffing shapes ad hoc at every call site, the known set of shapes
//! is decoded here into one canonical `Vec<T>`, and anything outside that
//! set is rejected with a typed error.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response payload that matched none of the known envelope shapes.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// The payload was not a list, a known wrapper object, or empty.
    #[error("expected a {expected} list, got a {found} payload")]
    Unexpected {
        /// What the caller was decoding (e.g. "favorites").
        expected: &'static str,
        /// JSON kind of the payload that was received.
        found: &'static str,
    },
    /// The envelope was recognized but an entry inside it was malformed.
    #[error("malformed {expected} entry: {source}")]
    Entry {
        /// What the caller was decoding.
        expected: &'static str,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a list payload that may be bare, wrapped, or empty.
///
/// Accepted shapes, tried in order:
/// - `null` or `{}` - an absent collection, decoded as an empty list
/// - `[...]` - a bare array of entries
/// - an object carrying the array under one of `fields`
///
/// # Errors
///
/// Returns [`ShapeError::Unexpected`] for any payload outside the known
/// set, and [`ShapeError::Entry`] when an entry fails to deserialize.
pub fn decode_list<T: DeserializeOwned>(
    value: Value,
    expected: &'static str,
    fields: &[&str],
) -> Result<Vec<T>, ShapeError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(entries) => decode_entries(entries, expected),
        Value::Object(mut map) => {
            if map.is_empty() {
                return Ok(Vec::new());
            }
            for field in fields {
                match map.remove(*field) {
                    Some(Value::Array(entries)) => return decode_entries(entries, expected),
                    Some(Value::Null) | None => {}
                    Some(other) => {
                        return Err(ShapeError::Unexpected {
                            expected,
                            found: json_kind(&other),
                        });
                    }
                }
            }
            Err(ShapeError::Unexpected {
                expected,
                found: "object",
            })
        }
        other => Err(ShapeError::Unexpected {
            expected,
            found: json_kind(&other),
        }),
    }
}

fn decode_entries<T: DeserializeOwned>(
    entries: Vec<Value>,
    expected: &'static str,
) -> Result<Vec<T>, ShapeError> {
    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value(entry).map_err(|source| ShapeError::Entry { expected, source })
        })
        .collect()
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        id: String,
    }

    #[test]
    fn decodes_wrapped_list() {
        let items: Vec<Entry> =
            decode_list(json!({"favorites": [{"id": "p1"}]}), "favorites", &["favorites"])
                .expect("wrapped shape");
        assert_eq!(items, vec![Entry { id: "p1".into() }]);
    }

    #[test]
    fn decodes_bare_list() {
        let items: Vec<Entry> =
            decode_list(json!([{"id": "p2"}]), "favorites", &["favorites"]).expect("bare shape");
        assert_eq!(items, vec![Entry { id: "p2".into() }]);
    }

    #[test]
    fn empty_object_and_null_decode_to_empty() {
        let items: Vec<Entry> =
            decode_list(json!({}), "favorites", &["favorites"]).expect("empty object");
        assert!(items.is_empty());

        let items: Vec<Entry> =
            decode_list(Value::Null, "favorites", &["favorites"]).expect("null payload");
        assert!(items.is_empty());
    }

    #[test]
    fn falls_through_to_alternate_field() {
        let items: Vec<Entry> =
            decode_list(json!({"data": [{"id": "o1"}]}), "orders", &["orders", "data"])
                .expect("alternate field");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn rejects_unknown_object_shape() {
        let err = decode_list::<Entry>(json!({"count": 3}), "favorites", &["favorites"])
            .expect_err("unknown wrapper");
        assert!(matches!(err, ShapeError::Unexpected { found: "object", .. }));
    }

    #[test]
    fn rejects_scalar_payload() {
        let err =
            decode_list::<Entry>(json!(42), "favorites", &["favorites"]).expect_err("scalar");
        assert!(matches!(err, ShapeError::Unexpected { found: "number", .. }));
    }

    #[test]
    fn rejects_malformed_entry() {
        let err = decode_list::<Entry>(json!([{"id": 7}]), "favorites", &["favorites"])
            .expect_err("entry with wrong type");
        assert!(matches!(err, ShapeError::Entry { .. }));
    }
}
