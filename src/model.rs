//! # Item Model
//!
//! The single persisted record type and the request payloads that create or
//! replace it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One stock-keeping unit as stored in the `items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

impl Item {
    /// Stock value of this item (quantity times unit price)
    pub fn total_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Request body for create and update, exactly as received.
///
/// Every field is optional so that absence can be reported as a
/// validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A payload that passed validation. The store only accepts this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Reasons a payload is rejected before reaching the store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Name, quantity and price are required")]
    MissingFields,

    #[error("Quantity must be greater than or equal to zero")]
    NegativeQuantity,

    #[error("Price must be greater than or equal to zero")]
    NegativePrice,

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Invalid item id: {0}")]
    InvalidId(String),
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            price: Some(price),
        }
    }

    /// Check presence and range of every field.
    ///
    /// A blank name counts as missing. Presence is checked before range so
    /// a body missing any field always yields `MissingFields`.
    pub fn validate(self) -> Result<NewItem, ValidationError> {
        let (name, quantity, price) = match (self.name, self.quantity, self.price) {
            (Some(name), Some(quantity), Some(price)) if !name.trim().is_empty() => {
                (name, quantity, price)
            }
            _ => return Err(ValidationError::MissingFields),
        };

        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }
        if price.is_nan() || price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }

        Ok(NewItem {
            name,
            quantity,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload() {
        let item = ItemPayload::new("Widget", 5, 9.99).validate().unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity, 5);
        assert_eq!(item.price, 9.99);
    }

    #[test]
    fn test_zero_values_are_accepted() {
        assert!(ItemPayload::new("Empty shelf", 0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let missing_name = ItemPayload {
            name: None,
            quantity: Some(1),
            price: Some(1.0),
        };
        let missing_quantity = ItemPayload {
            quantity: None,
            ..ItemPayload::new("Bolt", 1, 1.0)
        };
        let missing_price = ItemPayload {
            price: None,
            ..ItemPayload::new("Bolt", 1, 1.0)
        };

        for payload in [missing_name, missing_quantity, missing_price] {
            assert_eq!(payload.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_blank_name_is_missing() {
        assert_eq!(
            ItemPayload::new("   ", 1, 1.0).validate(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            ItemPayload::new("", 1, 1.0).validate(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_negative_values_rejected() {
        assert_eq!(
            ItemPayload::new("Bolt", -1, 1.0).validate(),
            Err(ValidationError::NegativeQuantity)
        );
        assert_eq!(
            ItemPayload::new("Bolt", 1, -0.5).validate(),
            Err(ValidationError::NegativePrice)
        );
    }

    #[test]
    fn test_payload_deserializes_with_absent_fields() {
        let payload: ItemPayload = serde_json::from_str(r#"{"quantity": 3}"#).unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.quantity, Some(3));
        assert_eq!(payload.price, None);
    }

    #[test]
    fn test_total_value() {
        let item = Item {
            id: 1,
            name: "Widget".to_string(),
            quantity: 4,
            price: 2.5,
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        };
        assert_eq!(item.total_value(), 10.0);
    }
}
