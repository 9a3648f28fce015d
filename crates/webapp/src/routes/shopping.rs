//! Shopping list route handlers.
//!
//! Every action posts and redirects back to the list, which is then read
//! fresh from the gateway because the mutation invalidated it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use lifeguard_core::forms::{DraftError, ShoppingItemDraft};
use lifeguard_core::models::{ShoppingItem, ShoppingSummary};
use lifeguard_core::view::partition_shopping;
use lifeguard_core::{ShoppingCategory, ShoppingItemId};
use serde::Deserialize;
use tracing::instrument;

use super::{KindOption, PageMeta, kind_options};
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// A shopping list row.
#[derive(Clone)]
pub struct ItemView {
    pub id: ShoppingItemId,
    pub name: String,
    pub quantity: Option<String>,
    pub notes: Option<String>,
    pub emoji: &'static str,
}

impl From<&ShoppingItem> for ItemView {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            notes: item.notes.clone(),
            emoji: item.category.emoji(),
        }
    }
}

/// Pending items of one category.
#[derive(Clone)]
pub struct CategorySection {
    pub emoji: &'static str,
    pub label: &'static str,
    pub items: Vec<ItemView>,
}

/// The list as displayed: pending grouped by category, purchased flat.
#[derive(Clone, Default)]
pub struct ShoppingListView {
    pub pending: Vec<CategorySection>,
    pub pending_count: usize,
    pub purchased: Vec<ItemView>,
}

impl ShoppingListView {
    fn new(items: &[ShoppingItem]) -> Self {
        let partition = partition_shopping(items);
        let pending_count = partition.pending_count();

        Self {
            pending: partition
                .pending_by_category
                .into_iter()
                .map(|(category, items)| CategorySection {
                    emoji: category.emoji(),
                    label: category.label(),
                    items: items.into_iter().map(ItemView::from).collect(),
                })
                .collect(),
            pending_count,
            purchased: partition.purchased.into_iter().map(ItemView::from).collect(),
        }
    }

    /// Whether the list has no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.purchased.is_empty()
    }
}

/// Shopping list page template.
#[derive(Template, WebTemplate)]
#[template(path = "shopping/index.html")]
pub struct ShoppingTemplate {
    pub page: PageMeta,
    pub list: ShoppingListView,
    pub summary: Option<ShoppingSummary>,
    pub categories: Vec<KindOption>,
}

// =============================================================================
// Form Data
// =============================================================================

/// Add-item form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddItemForm {
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub notes: String,
}

impl TryFrom<AddItemForm> for ShoppingItemDraft {
    type Error = DraftError;

    fn try_from(form: AddItemForm) -> std::result::Result<Self, DraftError> {
        let category = if form.category.trim().is_empty() {
            ShoppingCategory::default()
        } else {
            form.category.parse()?
        };

        Ok(Self {
            name: form.name,
            quantity: form.quantity,
            category,
            notes: form.notes,
        })
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the shopping list.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<ShoppingTemplate> {
    let gateway = state.gateway();
    let (items, summary) = tokio::join!(gateway.list_shopping_items(), gateway.shopping_summary());

    let summary = summary
        .inspect_err(|e| tracing::warn!("Failed to fetch shopping summary: {e}"))
        .ok();

    Ok(ShoppingTemplate {
        page: PageMeta::new(&state, "shopping"),
        list: ShoppingListView::new(&items?),
        summary,
        categories: kind_options!(ShoppingCategory, ShoppingCategory::default()),
    })
}

/// Add an item. A blank name does nothing.
#[instrument(skip(state, form))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddItemForm>) -> Result<Redirect> {
    let draft = ShoppingItemDraft::try_from(form)?;

    if !draft.can_submit() {
        tracing::debug!("Ignoring shopping item with blank name");
        return Ok(Redirect::to("/shopping"));
    }

    let request = draft.to_request()?;
    add_breadcrumb("shopping", "Added shopping item");
    state.gateway().create_shopping_item(&request).await?;
    Ok(Redirect::to("/shopping"))
}

/// Flip an item between pending and purchased.
#[instrument(skip(state), fields(item_id = %id))]
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<ShoppingItemId>,
) -> Result<Redirect> {
    add_breadcrumb("shopping", &format!("Toggled item {id}"));
    state.gateway().toggle_shopping_item(id).await?;
    Ok(Redirect::to("/shopping"))
}

/// Remove an item from the list.
#[instrument(skip(state), fields(item_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ShoppingItemId>,
) -> Result<Redirect> {
    add_breadcrumb("shopping", &format!("Deleted item {id}"));
    state.gateway().delete_shopping_item(id).await?;
    Ok(Redirect::to("/shopping"))
}

/// Remove every purchased item.
#[instrument(skip(state))]
pub async fn clear_purchased(State(state): State<AppState>) -> Result<Redirect> {
    add_breadcrumb("shopping", "Cleared purchased items");
    state.gateway().clear_purchased().await?;
    Ok(Redirect::to("/shopping"))
}
