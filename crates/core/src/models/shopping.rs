//! Shopping list records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ShoppingCategory, ShoppingItemId};

/// An entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    pub quantity: Option<String>,
    #[serde(default)]
    pub category: ShoppingCategory,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_purchased: bool,
}

/// Request body for adding an item to the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShoppingItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default)]
    pub category: ShoppingCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Pre-aggregated shopping list counters, computed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingSummary {
    pub total_items: u32,
    pub purchased_items: u32,
    pub pending_items: u32,
    #[serde(default)]
    pub items_by_category: BTreeMap<ShoppingCategory, u32>,
}
