//! # Response Bodies
//!
//! JSON bodies returned by the item endpoints. The client decodes the same
//! types.

use serde::{Deserialize, Serialize};

use crate::model::Item;

pub const CREATED_MESSAGE: &str = "Item created successfully";
pub const UPDATED_MESSAGE: &str = "Item updated successfully";
pub const DELETED_MESSAGE: &str = "Item deleted successfully";
pub const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned after a create or an update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSaved {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub message: String,
}

impl ItemSaved {
    pub fn new(item: Item, message: impl Into<String>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            price: item.price,
            message: message.into(),
        }
    }

    pub fn created(item: Item) -> Self {
        Self::new(item, CREATED_MESSAGE)
    }

    pub fn updated(item: Item) -> Self {
        Self::new(item, UPDATED_MESSAGE)
    }
}

/// Confirmation without a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}
