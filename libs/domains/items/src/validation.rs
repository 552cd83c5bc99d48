//! Presence checks for `PUT /items` bodies.

use serde_json::Value;
use tracing::warn;

use crate::error::{ItemError, ItemResult};

/// Fields every put body must carry, in check order.
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "price"];

/// Message returned whenever any required field is absent.
///
/// Always names the full set, not only the missing subset.
pub fn missing_fields_message() -> String {
    format!("Missing required fields: {}", REQUIRED_FIELDS.join(", "))
}

/// Fields of [`REQUIRED_FIELDS`] absent from `body`, in check order.
///
/// A body that is not a JSON object carries none of them. A key that is present
/// with a `null` value counts as present.
pub fn missing_fields(body: &Value) -> Vec<&'static str> {
    match body.as_object() {
        Some(object) => REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !object.contains_key(*field))
            .collect(),
        None => REQUIRED_FIELDS.to_vec(),
    }
}

/// Fail with a validation error when any required field is missing.
///
/// Only presence is checked here; field types are the codec's concern.
pub fn validate_put(body: &Value) -> ItemResult<()> {
    let missing = missing_fields(body);
    if missing.is_empty() {
        return Ok(());
    }

    warn!(
        missing = ?missing,
        "Request body is missing one or more required fields: id, name, price"
    );
    Err(ItemError::Validation(missing_fields_message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_body_passes() {
        assert!(validate_put(&json!({ "id": "1", "name": "widget", "price": 9.99 })).is_ok());
    }

    #[test]
    fn test_every_proper_subset_reports_full_set() {
        let full = json!({ "id": "1", "name": "widget", "price": 9.99 });
        // Each mask selects which fields to drop; 0 keeps all, 7 drops all.
        for mask in 1..8u8 {
            let mut body = full.clone();
            let object = body.as_object_mut().unwrap();
            for (bit, field) in REQUIRED_FIELDS.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    object.remove(*field);
                }
            }

            match validate_put(&body) {
                Err(ItemError::Validation(msg)) => {
                    assert_eq!(msg, "Missing required fields: id, name, price")
                }
                other => panic!("mask {mask}: expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_fields_in_check_order() {
        assert_eq!(missing_fields(&json!({ "name": "widget" })), vec!["id", "price"]);
    }

    #[test]
    fn test_null_values_count_as_present() {
        assert!(validate_put(&json!({ "id": null, "name": null, "price": null })).is_ok());
    }

    #[test]
    fn test_non_object_body_is_missing_everything() {
        assert_eq!(missing_fields(&json!(["id", "name", "price"])), REQUIRED_FIELDS.to_vec());
        assert!(validate_put(&json!("id name price")).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = json!({ "id": "1", "name": "widget", "price": 1, "colour": "red" });
        assert!(validate_put(&body).is_ok());
    }
}
