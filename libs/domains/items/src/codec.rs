//! Conversions between the wire JSON form, the domain [`Item`], and the
//! DynamoDB attribute map.
//!
//! Write path: request bytes → [`PutBody`] → [`Item`] → attribute map, with the
//! price carried as decimal text the whole way (stored as a DynamoDB `N`). A
//! numeric price keeps the literal the client sent.
//!
//! Read path: attribute map → [`Item`] → [`ItemResponse`], where the price
//! becomes a JSON number. That last step goes through `f64` and may round
//! decimals that carry more precision than a double.

use aws_sdk_dynamodb::types::AttributeValue;
use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;
use std::collections::HashMap;

use crate::error::{ItemError, ItemResult, StorageError, StorageResult};
use crate::models::{Item, ItemResponse};
use crate::price::Price;

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const PRICE: &str = "price";

pub type Attributes = HashMap<String, AttributeValue>;

/// A decoded `PUT /items` body.
///
/// `serde_json` reads numbers into `f64`, so the literal text of a numeric
/// `price` is kept beside the value.
#[derive(Debug, Clone, PartialEq)]
pub struct PutBody {
    value: Value,
    price_literal: Option<String>,
}

impl PutBody {
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Literal text of a numeric `price`, exactly as it appeared in the request.
    pub fn price_literal(&self) -> Option<&str> {
        self.price_literal.as_deref()
    }
}

impl From<Value> for PutBody {
    fn from(value: Value) -> Self {
        Self {
            value,
            price_literal: None,
        }
    }
}

#[derive(Deserialize)]
struct RawPrice {
    price: Option<Box<RawValue>>,
}

/// Parse a request body as JSON.
pub fn parse_body(bytes: &[u8]) -> ItemResult<PutBody> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ItemError::Malformed(format!("request body is not valid JSON: {}", e)))?;

    let price_literal = match value.get(PRICE) {
        Some(Value::Number(_)) => serde_json::from_slice::<RawPrice>(bytes)
            .map_err(|e| ItemError::Malformed(format!("field '{}': {}", PRICE, e)))?
            .price
            .map(|raw| raw.get().to_string()),
        _ => None,
    };

    Ok(PutBody {
        value,
        price_literal,
    })
}

/// Build an [`Item`] from a put body that already passed validation.
pub fn item_from_body(body: &PutBody) -> ItemResult<Item> {
    let id = string_field(&body.value, ID)?;
    let name = string_field(&body.value, NAME)?;

    let price = match (body.price_literal(), body.value.get(PRICE)) {
        (Some(literal), _) => Price::parse(literal),
        (None, Some(value)) => Price::from_json(value),
        (None, None) => {
            return Err(ItemError::Malformed(format!("field '{}' is missing", PRICE)));
        }
    }
    .map_err(|e| ItemError::Malformed(format!("field '{}': {}", PRICE, e)))?;

    Ok(Item { id, name, price })
}

fn string_field(body: &Value, field: &str) -> ItemResult<String> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ItemError::Malformed(format!(
            "field '{}' must be a string",
            field
        ))),
        None => Err(ItemError::Malformed(format!("field '{}' is missing", field))),
    }
}

/// Primary key attribute for `id`.
pub fn key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

/// Attribute map for `PutItem`.
pub fn item_to_attributes(item: &Item) -> Attributes {
    HashMap::from([
        (ID.to_string(), AttributeValue::S(item.id.clone())),
        (NAME.to_string(), AttributeValue::S(item.name.clone())),
        (
            PRICE.to_string(),
            AttributeValue::N(item.price.as_str().to_string()),
        ),
    ])
}

/// Decode a stored attribute map.
///
/// `price` is accepted as `N` or as a numeric `S`.
pub fn item_from_attributes(attributes: &Attributes) -> StorageResult<Item> {
    let id = string_attribute(attributes, ID)?;
    let name = string_attribute(attributes, NAME)?;
    let price = match attributes.get(PRICE) {
        Some(AttributeValue::N(text)) | Some(AttributeValue::S(text)) => Price::parse(text)
            .map_err(|e| StorageError::Decode(format!("attribute '{}': {}", PRICE, e)))?,
        Some(_) => {
            return Err(StorageError::Decode(format!(
                "attribute '{}' must be a number",
                PRICE
            )));
        }
        None => {
            return Err(StorageError::Decode(format!(
                "attribute '{}' is missing",
                PRICE
            )));
        }
    };

    Ok(Item { id, name, price })
}

fn string_attribute(attributes: &Attributes, name: &str) -> StorageResult<String> {
    attributes
        .get(name)
        .ok_or_else(|| StorageError::Decode(format!("attribute '{}' is missing", name)))?
        .as_s()
        .map(|value| value.to_string())
        .map_err(|_| StorageError::Decode(format!("attribute '{}' must be a string", name)))
}

/// Render an item for a response body.
pub fn item_to_response(item: &Item) -> ItemResult<ItemResponse> {
    let price = item
        .price
        .to_f64()
        .ok_or_else(|| StorageError::Decode(format!("price '{}' is out of range", item.price)))?;

    Ok(ItemResponse {
        id: item.id.clone(),
        name: item.name.clone(),
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Item {
        Item::new("1", "widget", Price::parse("9.99").unwrap())
    }

    fn body(value: Value) -> PutBody {
        PutBody::from(value)
    }

    #[test]
    fn test_item_from_body_numeric_price() {
        let body = body(json!({ "id": "1", "name": "widget", "price": 9.99 }));
        let item = item_from_body(&body).unwrap();
        assert_eq!(item, widget());
    }

    #[test]
    fn test_item_from_body_string_price_keeps_precision() {
        let body = body(json!({ "id": "2", "name": "gadget", "price": "0.1000000000000000000001" }));
        let item = item_from_body(&body).unwrap();
        assert_eq!(item.price.as_str(), "0.1000000000000000000001");
    }

    #[test]
    fn test_item_from_body_wrong_types_are_malformed() {
        let bodies = [
            json!({ "id": 1, "name": "widget", "price": 9.99 }),
            json!({ "id": "1", "name": null, "price": 9.99 }),
            json!({ "id": "1", "name": "widget", "price": "lots" }),
            json!({ "id": "1", "name": "widget", "price": [1] }),
        ];
        for body in bodies {
            assert!(
                matches!(
                    item_from_body(&PutBody::from(body.clone())),
                    Err(ItemError::Malformed(_))
                ),
                "{body} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_body_rejects_invalid_json() {
        assert!(matches!(parse_body(b"{not json"), Err(ItemError::Malformed(_))));
        assert!(matches!(parse_body(b""), Err(ItemError::Malformed(_))));
        assert_eq!(parse_body(br#"{"id":"1"}"#).unwrap().value(), &json!({ "id": "1" }));
    }

    #[test]
    fn test_parse_body_keeps_numeric_price_literal() {
        let parsed =
            parse_body(br#"{"id":"1","name":"widget","price": 12345678901234567890.12 }"#).unwrap();
        assert_eq!(parsed.price_literal(), Some("12345678901234567890.12"));

        let item = item_from_body(&parsed).unwrap();
        assert_eq!(item.price.as_str(), "12345678901234567890.12");
    }

    #[test]
    fn test_parse_body_only_records_numeric_prices() {
        let parsed = parse_body(br#"{"id":"1","name":"widget","price":"9.99"}"#).unwrap();
        assert_eq!(parsed.price_literal(), None);

        let parsed = parse_body(br#"[1, 2, 3]"#).unwrap();
        assert_eq!(parsed.price_literal(), None);
    }

    #[test]
    fn test_item_from_body_rejects_prices_beyond_storage_limits() {
        // A numeric 1e400 is already refused by the JSON reader.
        assert!(parse_body(br#"{"id":"1","name":"huge","price":1e400}"#).is_err());

        let bodies: [&[u8]; 3] = [
            br#"{"id":"1","name":"huge","price":"1e400"}"#,
            br#"{"id":"1","name":"tiny","price":1e-131}"#,
            br#"{"id":"1","name":"long","price":1.23456789012345678901234567890123456789}"#,
        ];
        for bytes in bodies {
            let parsed = parse_body(bytes).unwrap();
            assert!(matches!(item_from_body(&parsed), Err(ItemError::Malformed(_))));
        }
    }

    #[test]
    fn test_attributes_store_price_as_number_text() {
        let attributes = item_to_attributes(&widget());
        assert_eq!(attributes.get(ID), Some(&AttributeValue::S("1".into())));
        assert_eq!(attributes.get(NAME), Some(&AttributeValue::S("widget".into())));
        assert_eq!(attributes.get(PRICE), Some(&AttributeValue::N("9.99".into())));
    }

    #[test]
    fn test_attributes_decode_back_to_item() {
        let decoded = item_from_attributes(&item_to_attributes(&widget())).unwrap();
        assert_eq!(decoded, widget());
    }

    #[test]
    fn test_attributes_decode_accepts_string_price() {
        let attributes = HashMap::from([
            (ID.to_string(), AttributeValue::S("3".into())),
            (NAME.to_string(), AttributeValue::S("bolt".into())),
            (PRICE.to_string(), AttributeValue::S("0.25".into())),
        ]);
        assert_eq!(item_from_attributes(&attributes).unwrap().price.as_str(), "0.25");
    }

    #[test]
    fn test_attributes_decode_reports_missing_and_mistyped() {
        let mut attributes = item_to_attributes(&widget());
        attributes.remove(NAME);
        assert!(matches!(
            item_from_attributes(&attributes),
            Err(StorageError::Decode(msg)) if msg.contains("name")
        ));

        let mut attributes = item_to_attributes(&widget());
        attributes.insert(PRICE.to_string(), AttributeValue::Bool(true));
        assert!(item_from_attributes(&attributes).is_err());
    }

    #[test]
    fn test_response_renders_price_as_json_number() {
        let response = item_to_response(&widget()).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "id": "1", "name": "widget", "price": 9.99 })
        );
    }

    #[test]
    fn test_response_price_loses_digits_beyond_f64() {
        let item = Item::new("4", "precise", Price::parse("1.00000000000000000001").unwrap());
        let response = item_to_response(&item).unwrap();
        assert_eq!(response.price, 1.0);
        assert_eq!(serde_json::to_string(&response.price).unwrap(), "1.0");
    }

    #[test]
    fn test_response_renders_largest_storable_price() {
        let item = Item::new("5", "huge", Price::parse("9.9e125").unwrap());
        assert_eq!(item_to_response(&item).unwrap().price, 9.9e125);
    }
}
