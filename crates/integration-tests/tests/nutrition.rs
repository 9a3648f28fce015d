//! Nutrition flows: meals, water and the daily summary.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use lifeguard_core::models::NewMeal;
use lifeguard_core::types::MealType;
use lifeguard_integration_tests::{FakeGateway, get_page, post_form, test_date};
use lifeguard_webapp::routes::today;

fn oatmeal(meal_date: chrono::NaiveDate) -> NewMeal {
    NewMeal {
        name: "Oatmeal".to_string(),
        meal_type: MealType::Breakfast,
        calories: Some(400),
        protein: Some(12.5),
        carbs: None,
        fat: None,
        fiber: None,
        serving_size: Some("1 bowl".to_string()),
        notes: None,
        meal_date,
    }
}

// =============================================================================
// Gateway Client
// =============================================================================

#[tokio::test]
async fn test_water_refreshes_summary_but_not_meals() {
    let fake = FakeGateway::start().await;
    let client = fake.client(None);
    let date = test_date();

    client.list_meals(date).await.unwrap();
    let before = client.daily_nutrition_summary(date).await.unwrap();
    assert_eq!(before.water_glasses, 0);

    client.log_water(1, date).await.unwrap();

    let after = client.daily_nutrition_summary(date).await.unwrap();
    client.list_meals(date).await.unwrap();

    assert_eq!(after.water_glasses, 1);
    assert!((after.water_progress - 12.5).abs() < f64::EPSILON);
    assert_eq!(fake.count("GET", "/api/nutrition/meals").await, 1);
    assert_eq!(
        fake.count("GET", &format!("/api/nutrition/summary/{date}")).await,
        2
    );
}

#[tokio::test]
async fn test_meals_are_cached_per_date() {
    let fake = FakeGateway::start().await;
    let date = test_date();
    fake.add_meal(oatmeal(date)).await;
    let client = fake.client(None);

    let meals = client.list_meals(date).await.unwrap();
    assert_eq!(meals.len(), 1);

    let yesterday = date.pred_opt().unwrap();
    assert!(client.list_meals(yesterday).await.unwrap().is_empty());
    client.list_meals(date).await.unwrap();

    let requests = fake.requests().await;
    let queries: Vec<_> = requests
        .iter()
        .filter(|r| r.path == "/api/nutrition/meals")
        .map(|r| r.query.clone().unwrap_or_default())
        .collect();
    assert_eq!(
        queries,
        vec!["meal_date=2026-10-18", "meal_date=2026-10-17"]
    );
}

#[tokio::test]
async fn test_new_meal_updates_summary() {
    let fake = FakeGateway::start().await;
    let client = fake.client(None);
    let date = test_date();

    let summary = client.daily_nutrition_summary(date).await.unwrap();
    assert_eq!(summary.meals_count, 0);

    client.create_meal(&oatmeal(date)).await.unwrap();

    let summary = client.daily_nutrition_summary(date).await.unwrap();
    assert_eq!(summary.meals_count, 1);
    assert_eq!(summary.total_calories, 400);
    assert!((summary.calorie_progress - 20.0).abs() < f64::EPSILON);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_meal_form_sends_only_filled_fields() {
    let fake = FakeGateway::start().await;
    let app = fake.app(None);

    // warm the cache so the redirect target proves invalidation
    let page = get_page(&app, "/nutrition").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("No meals logged today."));

    let page = post_form(
        &app,
        "/nutrition/new",
        "name=Oatmeal&meal_type=breakfast&calories=400&protein=&carbs=&fat=&fiber=&serving_size=&notes=",
    )
    .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/nutrition"));

    let meals = fake.meals().await;
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].calories, Some(400));
    assert_eq!(meals[0].protein, None);
    assert_eq!(meals[0].serving_size, None);
    assert_eq!(meals[0].meal_date, today());

    let page = get_page(&app, "/nutrition").await;
    assert!(page.body.contains("<h2>🌅 Breakfast</h2>"));
    assert!(page.body.contains("Oatmeal"));
    assert!(page.body.contains("400 / 2000 kcal"));
}

#[tokio::test]
async fn test_meal_without_name_is_not_sent() {
    let fake = FakeGateway::start().await;
    let app = fake.app(None);

    let page = post_form(&app, "/nutrition/new", "name=+&meal_type=lunch&calories=300").await;
    assert_eq!(page.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(page.body.contains("Meal name is required"));
    // the typed values survive the round trip
    assert!(page.body.contains("value=\"300\""));
    assert_eq!(fake.count("POST", "/api/nutrition/meals").await, 0);
}

#[tokio::test]
async fn test_water_button_returns_to_nutrition() {
    let fake = FakeGateway::start().await;
    let app = fake.app(None);

    let page = get_page(&app, "/nutrition").await;
    assert!(page.body.contains("0 / 8 glasses"));

    let page = post_form(&app, "/water", "next=%2Fnutrition").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/nutrition"));
    assert_eq!(fake.water(today()).await, 1);

    let page = get_page(&app, "/nutrition").await;
    assert!(page.body.contains("1 / 8 glasses"));
}

#[tokio::test]
async fn test_meal_delete_requires_confirmation() {
    let fake = FakeGateway::start().await;
    let id = fake.add_meal(oatmeal(today())).await;
    let app = fake.app(None);

    let page = get_page(&app, &format!("/nutrition/meals/{id}/delete")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Delete meal?"));
    assert!(page.body.contains("Oatmeal"));

    let page = post_form(&app, &format!("/nutrition/meals/{id}/delete"), "").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    let confirm_page = format!("/nutrition/meals/{id}/delete");
    assert_eq!(page.location.as_deref(), Some(confirm_page.as_str()));
    assert_eq!(fake.meals().await.len(), 1);

    let page = post_form(&app, &format!("/nutrition/meals/{id}/delete"), "confirm=yes").await;
    assert_eq!(page.location.as_deref(), Some("/nutrition"));
    assert!(fake.meals().await.is_empty());
}

#[tokio::test]
async fn test_unknown_meal_confirmation_is_not_found() {
    let fake = FakeGateway::start().await;
    let app = fake.app(None);

    let page = get_page(&app, "/nutrition/meals/999/delete").await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
}
