//! Shopping list flows: add, toggle, delete and clear against the fake
//! gateway, through both the gateway client and the pages.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use lifeguard_core::models::ShoppingItem;
use lifeguard_core::types::{ShoppingCategory, ShoppingItemId};
use lifeguard_core::view::partition_shopping;
use lifeguard_integration_tests::{FakeGateway, get_page, post_form};

fn milk() -> ShoppingItem {
    ShoppingItem {
        id: ShoppingItemId::new(7),
        name: "Milk".to_string(),
        quantity: Some("1 l".to_string()),
        category: ShoppingCategory::Dairy,
        notes: None,
        is_purchased: false,
    }
}

fn ids(items: &[&ShoppingItem]) -> Vec<i64> {
    items.iter().map(|item| item.id.as_i64()).collect()
}

// =============================================================================
// Gateway Client
// =============================================================================

#[tokio::test]
async fn test_toggle_moves_item_to_other_partition() {
    let fake = FakeGateway::start().await;
    fake.insert_shopping_item(milk()).await;
    fake.add_shopping_item("Apples", ShoppingCategory::Produce)
        .await;
    let client = fake.client(None);

    let items = client.list_shopping_items().await.unwrap();
    let partition = partition_shopping(&items);
    let pending = &partition.pending_by_category[&ShoppingCategory::Dairy];
    assert_eq!(ids(pending), vec![7]);
    assert!(partition.purchased.is_empty());

    let toggled = client
        .toggle_shopping_item(ShoppingItemId::new(7))
        .await
        .unwrap();
    assert!(toggled.is_purchased);

    let items = client.list_shopping_items().await.unwrap();
    let partition = partition_shopping(&items);
    assert_eq!(ids(&partition.purchased), vec![7]);
    assert!(
        !partition
            .pending_by_category
            .contains_key(&ShoppingCategory::Dairy)
    );
    assert_eq!(partition.pending_count(), 1);

    // the list was read again after the toggle, not served from the cache
    assert_eq!(fake.count("GET", "/api/shopping").await, 2);
}

#[tokio::test]
async fn test_list_is_cached_until_mutation() {
    let fake = FakeGateway::start().await;
    fake.insert_shopping_item(milk()).await;
    let client = fake.client(None);

    client.list_shopping_items().await.unwrap();
    client.list_shopping_items().await.unwrap();
    client.shopping_summary().await.unwrap();
    assert_eq!(fake.count("GET", "/api/shopping").await, 1);

    client.clear_purchased().await.unwrap();

    client.list_shopping_items().await.unwrap();
    client.shopping_summary().await.unwrap();
    assert_eq!(fake.count("GET", "/api/shopping").await, 2);
    assert_eq!(fake.count("GET", "/api/shopping/summary").await, 2);
}

#[tokio::test]
async fn test_failed_toggle_keeps_cache() {
    let fake = FakeGateway::start().await;
    fake.insert_shopping_item(milk()).await;
    let client = fake.client(None);

    client.list_shopping_items().await.unwrap();
    assert!(
        client
            .toggle_shopping_item(ShoppingItemId::new(404))
            .await
            .is_err()
    );

    client.list_shopping_items().await.unwrap();
    assert_eq!(fake.count("GET", "/api/shopping").await, 1);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_blank_name_issues_no_create_request() {
    let fake = FakeGateway::start().await;
    let app = fake.app(None);

    let page = post_form(&app, "/shopping", "name=+++&category=dairy").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/shopping"));

    assert_eq!(fake.count("POST", "/api/shopping").await, 0);
    assert!(fake.shopping_items().await.is_empty());
}

#[tokio::test]
async fn test_add_item_shows_under_its_category() {
    let fake = FakeGateway::start().await;
    let app = fake.app(None);

    let page = get_page(&app, "/shopping").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Your shopping list is empty."));

    let page = post_form(
        &app,
        "/shopping",
        "name=Eggs&quantity=12&category=dairy&notes=",
    )
    .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);

    let items = fake.shopping_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity.as_deref(), Some("12"));
    assert_eq!(items[0].notes, None);

    let page = get_page(&app, "/shopping").await;
    assert!(page.body.contains("<h2>🥛 Dairy</h2>"));
    assert!(page.body.contains("Eggs"));
    assert!(!page.body.contains("Your shopping list is empty."));
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let fake = FakeGateway::start().await;
    let app = fake.app(None);

    let page = post_form(&app, "/shopping", "name=Eggs&category=candy").await;
    assert_eq!(page.status, StatusCode::BAD_REQUEST);
    assert_eq!(fake.count("POST", "/api/shopping").await, 0);
}

#[tokio::test]
async fn test_home_counters_follow_toggle() {
    let fake = FakeGateway::start().await;
    fake.insert_shopping_item(milk()).await;
    let app = fake.app(None);

    let page = get_page(&app, "/").await;
    assert!(page.body.contains("1 to buy · 0 purchased"));

    let page = post_form(&app, "/shopping/7/toggle", "").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);

    let page = get_page(&app, "/").await;
    assert!(page.body.contains("0 to buy · 1 purchased"));

    let page = get_page(&app, "/shopping").await;
    assert!(page.body.contains("Purchased (1)"));
}

#[tokio::test]
async fn test_delete_and_clear_purchased() {
    let fake = FakeGateway::start().await;
    fake.insert_shopping_item(milk()).await;
    let bread = fake
        .add_shopping_item("Bread", ShoppingCategory::Bakery)
        .await;
    let app = fake.app(None);

    post_form(&app, "/shopping/7/toggle", "").await;
    let page = post_form(&app, "/shopping/clear", "").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);

    let items = fake.shopping_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, bread);

    post_form(&app, &format!("/shopping/{bread}/delete"), "").await;
    assert!(fake.shopping_items().await.is_empty());

    let page = get_page(&app, "/shopping").await;
    assert!(page.body.contains("Your shopping list is empty."));
}
