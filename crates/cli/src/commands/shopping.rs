//! Shopping list commands.

use lifeguard_core::ShoppingItemId;
use lifeguard_core::forms::ShoppingItemDraft;
use lifeguard_core::models::ShoppingItem;
use lifeguard_core::view::partition_shopping;
use lifeguard_webapp::GatewayClient;

use super::CommandError;

/// Print pending items grouped by category, then purchased items.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the list cannot be read.
pub async fn list(gateway: &GatewayClient) -> Result<(), CommandError> {
    let items = gateway.list_shopping_items().await?;
    let partition = partition_shopping(&items);

    if partition.is_empty() {
        println!("Your shopping list is empty.");
        return Ok(());
    }

    println!("To buy ({})", partition.pending_count());
    for (category, items) in &partition.pending_by_category {
        println!("{} {}", category.emoji(), category.label());
        for item in items {
            println!("  {}", item_line(item));
        }
    }

    if !partition.purchased.is_empty() {
        println!();
        println!("Purchased ({})", partition.purchased.len());
        for item in &partition.purchased {
            println!("  {}", item_line(item));
        }
    }
    Ok(())
}

fn item_line(item: &ShoppingItem) -> String {
    let check = if item.is_purchased { "[x]" } else { "[ ]" };
    match &item.quantity {
        Some(quantity) => format!("{check} #{} {} ({quantity})", item.id, item.name),
        None => format!("{check} #{} {}", item.id, item.name),
    }
}

/// Add an item. A blank name adds nothing.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the gateway rejects the request.
pub async fn add(gateway: &GatewayClient, draft: &ShoppingItemDraft) -> Result<(), CommandError> {
    if !draft.can_submit() {
        println!("Nothing to add: the name is blank");
        return Ok(());
    }

    let item = gateway.create_shopping_item(&draft.to_request()?).await?;
    println!("Added {}", item_line(&item));
    Ok(())
}

/// Toggle an item between pending and purchased.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the toggle fails.
pub async fn toggle(gateway: &GatewayClient, id: i64) -> Result<(), CommandError> {
    let item = gateway.toggle_shopping_item(ShoppingItemId::new(id)).await?;
    println!("{}", item_line(&item));
    Ok(())
}

/// Delete an item.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the delete fails.
pub async fn delete(gateway: &GatewayClient, id: i64) -> Result<(), CommandError> {
    let id = ShoppingItemId::new(id);
    gateway.delete_shopping_item(id).await?;
    println!("Deleted item {id}");
    Ok(())
}

/// Remove every purchased item.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the request fails.
pub async fn clear(gateway: &GatewayClient) -> Result<(), CommandError> {
    gateway.clear_purchased().await?;
    println!("Cleared purchased items");
    Ok(())
}
