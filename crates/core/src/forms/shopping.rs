use super::{DraftError, optional_text, required_name};
use crate::models::NewShoppingItem;
use crate::types::ShoppingCategory;

/// The add-item row at the top of the shopping list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingItemDraft {
    pub name: String,
    pub quantity: String,
    pub category: ShoppingCategory,
    pub notes: String,
}

impl ShoppingItemDraft {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// # Errors
    ///
    /// Returns [`DraftError::MissingName`] when the name is blank.
    pub fn to_request(&self) -> Result<NewShoppingItem, DraftError> {
        Ok(NewShoppingItem {
            name: required_name(&self.name)?,
            quantity: optional_text(&self.quantity),
            category: self.category,
            notes: optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request() {
        let draft = ShoppingItemDraft {
            name: "Greek yogurt".to_string(),
            quantity: "2 tubs".to_string(),
            category: ShoppingCategory::Dairy,
            notes: String::new(),
        };

        let request = draft.to_request().unwrap();
        assert_eq!(request.quantity.as_deref(), Some("2 tubs"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["category"], "dairy");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_blank_name_is_inert() {
        let draft = ShoppingItemDraft {
            name: " \n".to_string(),
            ..ShoppingItemDraft::default()
        };
        assert!(!draft.can_submit());
        assert_eq!(draft.to_request(), Err(DraftError::MissingName));
    }

    #[test]
    fn test_default_category_is_other() {
        let draft = ShoppingItemDraft {
            name: "Batteries".to_string(),
            ..ShoppingItemDraft::default()
        };
        assert_eq!(draft.to_request().unwrap().category, ShoppingCategory::Other);
    }
}
