//! Create/edit form state

use crate::model::{Item, ItemPayload};

use super::errors::FormError;

/// Contents of the item form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl ItemForm {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Populate the form from an existing item
    pub fn from_item(item: &Item) -> Self {
        Self::new(item.name.clone(), item.quantity, item.price)
    }

    /// Sanity checks run before any network call. The name is trimmed.
    pub fn validate(&self) -> Result<ItemPayload, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        if self.quantity < 0 {
            return Err(FormError::NegativeQuantity);
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(FormError::NegativePrice);
        }
        Ok(ItemPayload::new(name, self.quantity, self.price))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_name() {
        let payload = ItemForm::new("  Widget  ", 5, 9.99).validate().unwrap();
        assert_eq!(payload, ItemPayload::new("Widget", 5, 9.99));
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert_eq!(
            ItemForm::new(" ", 1, 1.0).validate(),
            Err(FormError::EmptyName)
        );
        assert_eq!(
            ItemForm::new("Bolt", -3, 1.0).validate(),
            Err(FormError::NegativeQuantity)
        );
        assert_eq!(
            ItemForm::new("Bolt", 3, -1.0).validate(),
            Err(FormError::NegativePrice)
        );
    }

    #[test]
    fn test_reset() {
        let mut form = ItemForm::new("Bolt", 3, 1.0);
        form.reset();
        assert_eq!(form, ItemForm::default());
    }
}
