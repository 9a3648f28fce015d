//! Grouping of flat gateway lists into display buckets.
//!
//! Every function here is a single pass that partitions its input: each
//! record lands in exactly one bucket, buckets keep the input's relative
//! order, and no bucket exists for a key that never occurred.
//!
//! Buckets are `BTreeMap`s keyed by the closed enums, whose `Ord` follows the
//! canonical display order (breakfast, lunch, dinner, snack; produce first
//! and other last). Iterating a map therefore visits present keys in display
//! order and skips absent ones.
//!
//! The functions accept anything that borrows as the record type, so both
//! `Vec<Meal>` and `meals.iter()` work and the buckets hold whichever was
//! passed in.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::models::{Meal, ShoppingItem};
use crate::types::{MealType, ShoppingCategory};

/// Meals bucketed by meal type.
pub type MealsByType<T> = BTreeMap<MealType, Vec<T>>;

/// Shopping items bucketed by category.
pub type ItemsByCategory<T> = BTreeMap<ShoppingCategory, Vec<T>>;

/// Group records by a key, preserving relative order within each bucket.
pub fn group_by<K, T, I, F>(items: I, key: F) -> BTreeMap<K, Vec<T>>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let mut buckets: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        buckets.entry(key(&item)).or_default().push(item);
    }
    buckets
}

/// Group meals by their meal type.
pub fn group_meals_by_type<T, I>(meals: I) -> MealsByType<T>
where
    T: Borrow<Meal>,
    I: IntoIterator<Item = T>,
{
    group_by(meals, |meal| meal.borrow().meal_type)
}

/// Group shopping items by their category.
pub fn group_by_category<T, I>(items: I) -> ItemsByCategory<T>
where
    T: Borrow<ShoppingItem>,
    I: IntoIterator<Item = T>,
{
    group_by(items, |item| item.borrow().category)
}

/// The shopping list split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingPartition<T> {
    /// Items still to buy, grouped by category.
    pub pending_by_category: ItemsByCategory<T>,
    /// Purchased items as one flat list in input order.
    pub purchased: Vec<T>,
}

impl<T> ShoppingPartition<T> {
    /// Number of items still to buy.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending_by_category.values().map(Vec::len).sum()
    }

    /// Whether neither partition has any item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending_by_category.is_empty() && self.purchased.is_empty()
    }
}

impl<T> Default for ShoppingPartition<T> {
    fn default() -> Self {
        Self {
            pending_by_category: BTreeMap::new(),
            purchased: Vec::new(),
        }
    }
}

/// Split the shopping list by the purchased flag, then group the pending side
/// by category. The purchased side is not grouped.
pub fn partition_shopping<T, I>(items: I) -> ShoppingPartition<T>
where
    T: Borrow<ShoppingItem>,
    I: IntoIterator<Item = T>,
{
    let (purchased, pending): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|item| item.borrow().is_purchased);

    ShoppingPartition {
        pending_by_category: group_by_category(pending),
        purchased,
    }
}
