//! Integration tests for Lifeguard.
//!
//! Provides [`FakeGateway`], an in-memory implementation of the gateway REST
//! API served on a random local port. Tests point a real [`GatewayClient`] or
//! the full webapp router at it and check complete flows: mutate, invalidate,
//! refetch.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lifeguard-integration-tests
//! ```
//!
//! No external services are needed.
//!
//! The fake keeps every record in memory and treats every stored workout as
//! part of the current week. It records each request it receives so tests
//! can assert which reads were served from the cache.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, put},
};
use chrono::NaiveDate;
use lifeguard_core::models::{
    DailyNutritionSummary, Exercise, Meal, NewMeal, NewShoppingItem, NewWaterLog, NewWorkout,
    ShoppingItem, ShoppingSummary, User, UserGoals, WaterLog, WeeklyWorkoutSummary, Workout,
};
use lifeguard_core::types::{
    ExerciseId, MealId, ShoppingCategory, ShoppingItemId, UserId, WaterLogId, WorkoutId,
};
use lifeguard_webapp::gateway::INIT_DATA_HEADER;
use lifeguard_webapp::{AppState, GatewayClient, GatewayConfig, WebappConfig};
use secrecy::SecretString;
use serde::Deserialize;
use tokio::sync::Mutex;
use tower::ServiceExt;
use url::Url;

/// Init data for a user "Sam Rivera" (`@samr`).
pub const TEST_INIT_DATA: &str = "query_id=AAHdF6IQAAAAAN0XohDhrOrc\
    &user=%7B%22id%22%3A555%2C%22first_name%22%3A%22Sam%22%2C%22last_name%22%3A%22Rivera%22%2C%22username%22%3A%22samr%22%7D\
    &auth_date=1760774400&hash=deadbeef";

/// The date every test treats as today.
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default()
}

// =============================================================================
// Recorded Requests
// =============================================================================

/// One request the fake gateway received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub init_data: Option<String>,
}

// =============================================================================
// Store
// =============================================================================

struct Store {
    next_id: i64,
    workouts: Vec<Workout>,
    meals: Vec<Meal>,
    water: BTreeMap<NaiveDate, i32>,
    items: Vec<ShoppingItem>,
    goals: UserGoals,
    requests: Vec<RecordedRequest>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 100,
            workouts: Vec::new(),
            meals: Vec::new(),
            water: BTreeMap::new(),
            items: Vec::new(),
            goals: UserGoals::default(),
            requests: Vec::new(),
        }
    }
}

impl Store {
    const fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn create_workout(&mut self, new: NewWorkout) -> Workout {
        let id = WorkoutId::new(self.next_id());
        let exercises = new
            .exercises
            .into_iter()
            .map(|exercise| Exercise {
                id: ExerciseId::new(self.next_id()),
                workout_id: id,
                name: exercise.name,
                sets: exercise.sets,
                reps: exercise.reps,
                weight: exercise.weight,
                duration_seconds: exercise.duration_seconds,
                distance_meters: exercise.distance_meters,
                notes: exercise.notes,
                order: exercise.order,
            })
            .collect();

        let workout = Workout {
            id,
            name: new.name,
            workout_type: new.workout_type,
            workout_date: new.workout_date,
            duration_minutes: new.duration_minutes,
            calories_burned: new.calories_burned,
            notes: new.notes,
            exercises,
        };
        self.workouts.push(workout.clone());
        workout
    }

    fn weekly_summary(&self) -> WeeklyWorkoutSummary {
        let mut workouts_by_type = BTreeMap::new();
        for workout in &self.workouts {
            *workouts_by_type.entry(workout.workout_type).or_insert(0) += 1;
        }

        WeeklyWorkoutSummary {
            total_workouts: u32::try_from(self.workouts.len()).unwrap_or(u32::MAX),
            total_duration_minutes: self
                .workouts
                .iter()
                .map(|w| i64::from(w.duration_minutes))
                .sum(),
            total_calories_burned: self
                .workouts
                .iter()
                .filter_map(|w| w.calories_burned.map(i64::from))
                .sum(),
            workouts_by_type,
        }
    }

    fn create_meal(&mut self, new: NewMeal) -> Meal {
        let meal = Meal {
            id: MealId::new(self.next_id()),
            name: new.name,
            meal_type: new.meal_type,
            meal_date: new.meal_date,
            calories: new.calories,
            protein: new.protein,
            carbs: new.carbs,
            fat: new.fat,
            fiber: new.fiber,
            serving_size: new.serving_size,
            notes: new.notes,
        };
        self.meals.push(meal.clone());
        meal
    }

    fn nutrition_summary(&self, date: NaiveDate) -> DailyNutritionSummary {
        let meals: Vec<&Meal> = self.meals.iter().filter(|m| m.meal_date == date).collect();
        let sum = |field: fn(&Meal) -> Option<f64>| -> f64 {
            meals.iter().filter_map(|m| field(m)).sum()
        };

        let calories: f64 = meals
            .iter()
            .map(|m| f64::from(m.calories.unwrap_or(0)))
            .sum();
        let protein = sum(|m| m.protein);
        let carbs = sum(|m| m.carbs);
        let fat = sum(|m| m.fat);
        let water = self.water.get(&date).copied().unwrap_or(0);
        let goals = self.goals;

        DailyNutritionSummary {
            date,
            total_calories: meals
                .iter()
                .map(|m| i64::from(m.calories.unwrap_or(0)))
                .sum(),
            total_protein: protein,
            total_carbs: carbs,
            total_fat: fat,
            total_fiber: sum(|m| m.fiber),
            water_glasses: water,
            meals_count: u32::try_from(meals.len()).unwrap_or(u32::MAX),
            calorie_goal: goals.daily_calorie_goal,
            protein_goal: goals.daily_protein_goal,
            carbs_goal: goals.daily_carbs_goal,
            fat_goal: goals.daily_fat_goal,
            water_goal: goals.daily_water_goal,
            calorie_progress: percent(calories, goals.daily_calorie_goal),
            protein_progress: percent(protein, goals.daily_protein_goal),
            carbs_progress: percent(carbs, goals.daily_carbs_goal),
            fat_progress: percent(fat, goals.daily_fat_goal),
            water_progress: percent(f64::from(water), goals.daily_water_goal),
        }
    }

    fn create_item(&mut self, new: NewShoppingItem) -> ShoppingItem {
        let item = ShoppingItem {
            id: ShoppingItemId::new(self.next_id()),
            name: new.name,
            quantity: new.quantity,
            category: new.category,
            notes: new.notes,
            is_purchased: false,
        };
        self.items.push(item.clone());
        item
    }

    /// Items ordered the way the gateway lists them: pending first, then by
    /// category.
    fn sorted_items(&self) -> Vec<ShoppingItem> {
        let mut items = self.items.clone();
        items.sort_by_key(|item| (item.is_purchased, item.category));
        items
    }

    fn shopping_summary(&self) -> ShoppingSummary {
        let purchased = self.items.iter().filter(|item| item.is_purchased).count();
        let mut items_by_category = BTreeMap::new();
        for item in &self.items {
            *items_by_category.entry(item.category).or_insert(0) += 1;
        }

        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        ShoppingSummary {
            total_items: count(self.items.len()),
            purchased_items: count(purchased),
            pending_items: count(self.items.len() - purchased),
            items_by_category,
        }
    }

    fn user(&self) -> User {
        let goals = self.goals;
        User {
            id: UserId::new(1),
            telegram_id: 555,
            username: Some("samr".to_string()),
            first_name: "Sam".to_string(),
            last_name: Some("Rivera".to_string()),
            daily_calorie_goal: goals.daily_calorie_goal,
            daily_protein_goal: goals.daily_protein_goal,
            daily_carbs_goal: goals.daily_carbs_goal,
            daily_fat_goal: goals.daily_fat_goal,
            daily_water_goal: goals.daily_water_goal,
        }
    }
}

fn percent(total: f64, goal: i32) -> f64 {
    if goal > 0 {
        total / f64::from(goal) * 100.0
    } else {
        0.0
    }
}

// =============================================================================
// FakeGateway
// =============================================================================

#[derive(Clone)]
struct Shared {
    store: Arc<Mutex<Store>>,
    require_init_data: bool,
}

/// An in-memory gateway listening on `127.0.0.1` with a random port.
///
/// The server task lives as long as the test's runtime.
#[derive(Clone)]
pub struct FakeGateway {
    base_url: Url,
    store: Arc<Mutex<Store>>,
}

impl FakeGateway {
    /// Start a gateway that accepts requests without init data.
    pub async fn start() -> Self {
        Self::start_with(false).await
    }

    /// Start a gateway that answers 401 to API requests lacking the
    /// `X-Telegram-Init-Data` header.
    pub async fn start_requiring_init_data() -> Self {
        Self::start_with(true).await
    }

    async fn start_with(require_init_data: bool) -> Self {
        let store = Arc::new(Mutex::new(Store::default()));
        let app = router(Shared {
            store: Arc::clone(&store),
            require_init_data,
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake gateway");
        let addr = listener
            .local_addr()
            .expect("Fake gateway has no local address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let base_url =
            Url::parse(&format!("http://{addr}/")).expect("Fake gateway address is a valid URL");
        Self { base_url, store }
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gateway settings pointing at this fake.
    #[must_use]
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(self.base_url.clone())
    }

    /// A gateway client with its own cache.
    #[must_use]
    pub fn client(&self, init_data: Option<&str>) -> GatewayClient {
        GatewayClient::new(&self.gateway_config(), init_data)
    }

    /// Webapp settings pointing at this fake.
    #[must_use]
    pub fn webapp_config(&self, init_data: Option<&str>) -> WebappConfig {
        WebappConfig {
            host: std::net::Ipv4Addr::LOCALHOST.into(),
            port: 0,
            gateway: GatewayConfig {
                init_data: init_data.map(SecretString::from),
                ..self.gateway_config()
            },
            color_scheme: None,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// The complete webapp router, backed by this fake.
    #[must_use]
    pub fn app(&self, init_data: Option<&str>) -> Router {
        lifeguard_webapp::app(AppState::new(self.webapp_config(init_data)))
    }

    // -------------------------------------------------------------------------
    // Seeding
    // -------------------------------------------------------------------------

    /// Store a shopping item exactly as given, keeping its id.
    pub async fn insert_shopping_item(&self, item: ShoppingItem) {
        self.store.lock().await.items.push(item);
    }

    /// Add a pending shopping item.
    pub async fn add_shopping_item(&self, name: &str, category: ShoppingCategory) -> ShoppingItemId {
        self.store
            .lock()
            .await
            .create_item(NewShoppingItem {
                name: name.to_string(),
                quantity: None,
                category,
                notes: None,
            })
            .id
    }

    pub async fn add_meal(&self, meal: NewMeal) -> MealId {
        self.store.lock().await.create_meal(meal).id
    }

    pub async fn add_workout(&self, workout: NewWorkout) -> WorkoutId {
        self.store.lock().await.create_workout(workout).id
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub async fn shopping_items(&self) -> Vec<ShoppingItem> {
        self.store.lock().await.sorted_items()
    }

    pub async fn meals(&self) -> Vec<Meal> {
        self.store.lock().await.meals.clone()
    }

    pub async fn workouts(&self) -> Vec<Workout> {
        self.store.lock().await.workouts.clone()
    }

    pub async fn goals(&self) -> UserGoals {
        self.store.lock().await.goals
    }

    pub async fn water(&self, date: NaiveDate) -> i32 {
        self.store.lock().await.water.get(&date).copied().unwrap_or(0)
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().await.requests.clone()
    }

    /// How many requests matched `method` and `path` (query ignored).
    pub async fn count(&self, method: &str, path: &str) -> usize {
        self.store
            .lock()
            .await
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

// =============================================================================
// Page Requests
// =============================================================================

/// A response from the webapp router, body read to a string.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

/// Send one request through the router.
pub async fn send(app: &Router, request: axum::http::Request<Body>) -> Page {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let location = headers
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    Page {
        status,
        location,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// `GET` a page.
pub async fn get_page(app: &Router, uri: &str) -> Page {
    let request = axum::http::Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Valid request");
    send(app, request).await
}

/// `POST` a urlencoded form.
pub async fn post_form(app: &Router, uri: &str, form: &str) -> Page {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .expect("Valid request");
    send(app, request).await
}

// =============================================================================
// Routes
// =============================================================================

fn router(shared: Shared) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/summary/weekly", get(weekly_summary))
        .route("/api/workouts/{id}", delete(delete_workout))
        .route("/api/nutrition/meals", get(list_meals).post(create_meal))
        .route("/api/nutrition/meals/{id}", delete(delete_meal))
        .route("/api/nutrition/water", axum::routing::post(log_water))
        .route("/api/nutrition/summary/{date}", get(nutrition_summary))
        .route("/api/shopping", get(list_items).post(create_item))
        .route("/api/shopping/summary", get(shopping_summary))
        .route("/api/shopping/clear/purchased", delete(clear_purchased))
        .route("/api/shopping/{id}", delete(delete_item))
        .route("/api/shopping/{id}/toggle", patch(toggle_item))
        .route("/api/users/me", get(current_user))
        .route("/api/users/me/goals", put(update_goals))
        .layer(axum::middleware::from_fn_with_state(
            shared.clone(),
            record_and_authorize,
        ))
        .with_state(shared)
}

async fn record_and_authorize(
    State(shared): State<Shared>,
    request: Request,
    next: Next,
) -> Response {
    let init_data = request
        .headers()
        .get(INIT_DATA_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let path = request.uri().path().to_owned();

    shared.store.lock().await.requests.push(RecordedRequest {
        method: request.method().to_string(),
        path: path.clone(),
        query: request.uri().query().map(str::to_owned),
        init_data: init_data.clone(),
    });

    if shared.require_init_data && init_data.is_none() && path.starts_with("/api/") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "detail": "Missing Telegram init data" })),
        )
            .into_response();
    }

    next.run(request).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

// Workouts

async fn list_workouts(State(shared): State<Shared>) -> Json<Vec<Workout>> {
    let mut workouts = shared.store.lock().await.workouts.clone();
    workouts.sort_by(|a, b| {
        b.workout_date
            .cmp(&a.workout_date)
            .then(b.id.as_i64().cmp(&a.id.as_i64()))
    });
    Json(workouts)
}

async fn create_workout(
    State(shared): State<Shared>,
    Json(new): Json<NewWorkout>,
) -> (StatusCode, Json<Workout>) {
    let workout = shared.store.lock().await.create_workout(new);
    (StatusCode::CREATED, Json(workout))
}

async fn delete_workout(State(shared): State<Shared>, Path(id): Path<WorkoutId>) -> StatusCode {
    let mut store = shared.store.lock().await;
    let before = store.workouts.len();
    store.workouts.retain(|w| w.id != id);
    if store.workouts.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn weekly_summary(State(shared): State<Shared>) -> Json<WeeklyWorkoutSummary> {
    Json(shared.store.lock().await.weekly_summary())
}

// Nutrition

#[derive(Deserialize)]
struct MealsQuery {
    meal_date: Option<NaiveDate>,
}

async fn list_meals(
    State(shared): State<Shared>,
    Query(query): Query<MealsQuery>,
) -> Json<Vec<Meal>> {
    let store = shared.store.lock().await;
    let meals = store
        .meals
        .iter()
        .filter(|m| query.meal_date.is_none_or(|date| m.meal_date == date))
        .cloned()
        .collect();
    Json(meals)
}

async fn create_meal(
    State(shared): State<Shared>,
    Json(new): Json<NewMeal>,
) -> (StatusCode, Json<Meal>) {
    let meal = shared.store.lock().await.create_meal(new);
    (StatusCode::CREATED, Json(meal))
}

async fn delete_meal(State(shared): State<Shared>, Path(id): Path<MealId>) -> StatusCode {
    let mut store = shared.store.lock().await;
    let before = store.meals.len();
    store.meals.retain(|m| m.id != id);
    if store.meals.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn log_water(
    State(shared): State<Shared>,
    Json(new): Json<NewWaterLog>,
) -> (StatusCode, Json<WaterLog>) {
    let mut store = shared.store.lock().await;
    *store.water.entry(new.log_date).or_insert(0) += new.glasses;
    let log = WaterLog {
        id: WaterLogId::new(store.next_id()),
        glasses: new.glasses,
        log_date: new.log_date,
    };
    (StatusCode::CREATED, Json(log))
}

async fn nutrition_summary(
    State(shared): State<Shared>,
    Path(date): Path<NaiveDate>,
) -> Json<DailyNutritionSummary> {
    Json(shared.store.lock().await.nutrition_summary(date))
}

// Shopping

async fn list_items(State(shared): State<Shared>) -> Json<Vec<ShoppingItem>> {
    Json(shared.store.lock().await.sorted_items())
}

async fn create_item(
    State(shared): State<Shared>,
    Json(new): Json<NewShoppingItem>,
) -> (StatusCode, Json<ShoppingItem>) {
    let item = shared.store.lock().await.create_item(new);
    (StatusCode::CREATED, Json(item))
}

async fn toggle_item(
    State(shared): State<Shared>,
    Path(id): Path<ShoppingItemId>,
) -> Result<Json<ShoppingItem>, StatusCode> {
    let mut store = shared.store.lock().await;
    let item = store
        .items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    item.is_purchased = !item.is_purchased;
    Ok(Json(item.clone()))
}

async fn delete_item(State(shared): State<Shared>, Path(id): Path<ShoppingItemId>) -> StatusCode {
    let mut store = shared.store.lock().await;
    let before = store.items.len();
    store.items.retain(|item| item.id != id);
    if store.items.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn clear_purchased(State(shared): State<Shared>) -> StatusCode {
    shared
        .store
        .lock()
        .await
        .items
        .retain(|item| !item.is_purchased);
    StatusCode::NO_CONTENT
}

async fn shopping_summary(State(shared): State<Shared>) -> Json<ShoppingSummary> {
    Json(shared.store.lock().await.shopping_summary())
}

// Users

async fn current_user(State(shared): State<Shared>) -> Json<User> {
    Json(shared.store.lock().await.user())
}

async fn update_goals(
    State(shared): State<Shared>,
    Json(goals): Json<UserGoals>,
) -> Json<UserGoals> {
    shared.store.lock().await.goals = goals;
    Json(goals)
}
