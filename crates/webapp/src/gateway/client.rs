//! Gateway client implementation.
//!
//! Uses `reqwest` for HTTP and caches reads with `moka`.

use std::sync::Arc;

use chrono::NaiveDate;
use lifeguard_core::models::{
    DailyNutritionSummary, Meal, NewMeal, NewShoppingItem, NewWaterLog, NewWorkout, ShoppingItem,
    ShoppingSummary, User, UserGoals, WaterLog, WeeklyWorkoutSummary, Workout,
};
use lifeguard_core::query::{MutationTarget, QueryKey};
use lifeguard_core::types::{MealId, ShoppingItemId, WorkoutId};
use moka::future::Cache;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::cache::{CacheValue, Cached, Generations};
use super::{GatewayError, INIT_DATA_HEADER};
use crate::config::GatewayConfig;

/// Longest body excerpt kept in errors and logs.
const BODY_EXCERPT_CHARS: usize = 200;

// =============================================================================
// GatewayClient
// =============================================================================

/// Client for the Lifeguard gateway REST API.
///
/// Cheap to clone; clones share the HTTP connection pool and the query cache.
#[derive(Clone)]
pub struct GatewayClient {
    inner: Arc<GatewayClientInner>,
}

struct GatewayClientInner {
    client: reqwest::Client,
    base_url: Url,
    init_data: Option<String>,
    cache: Cache<QueryKey, CacheValue>,
    generations: Generations,
}

impl GatewayClient {
    /// Create a new gateway client.
    ///
    /// `init_data` is forwarded in the `X-Telegram-Init-Data` header on every
    /// request when present.
    #[must_use]
    pub fn new(config: &GatewayConfig, init_data: Option<&str>) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        // Url::join replaces the last path segment unless the base ends in '/'
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            inner: Arc::new(GatewayClientInner {
                client: reqwest::Client::new(),
                base_url,
                init_data: init_data.map(str::to_owned),
                cache,
                generations: Generations::default(),
            }),
        }
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.inner.base_url.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.inner.client.request(method, url);
        match &self.inner.init_data {
            Some(init_data) => builder.header(INIT_DATA_HEADER, init_data),
            None => builder,
        }
    }

    /// Send a request and return the successful response.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(GatewayError::RateLimited(retry_after));
        }

        let path = response.url().path().to_string();
        let body = excerpt(&response.text().await.unwrap_or_default());

        match status {
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound(path)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(GatewayError::Unauthorized(body))
            }
            _ => {
                tracing::error!(
                    status = %status,
                    path = %path,
                    body = %body,
                    "Gateway returned non-success status"
                );
                Err(GatewayError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Send a request and decode its JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response_text = self.send(builder).await?.text().await?;

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %excerpt(&response_text),
                "Failed to parse gateway response"
            );
            GatewayError::Parse(e)
        })
    }

    /// Serve a read from the cache, or fetch and cache it.
    async fn query<T>(&self, key: QueryKey, url: Url) -> Result<T, GatewayError>
    where
        T: Cached + DeserializeOwned + Clone,
    {
        if let Some(value) = self.inner.cache.get(&key).await
            && let Some(hit) = T::from_cache(value)
        {
            debug!(key = %key, "Cache hit");
            return Ok(hit);
        }

        let generations = &self.inner.generations;
        let category = key.category();
        let generation = generations.current(category);

        let fresh: T = self.send_json(self.request(Method::GET, url)).await?;

        if generations.current(category) != generation {
            debug!(key = %key, "Result predates an invalidation, not caching");
            return Ok(fresh);
        }
        self.inner.cache.insert(key, fresh.clone().into_cache()).await;

        // An invalidation between the check and the insert may have missed
        // the new entry.
        if generations.current(category) != generation {
            self.inner.cache.invalidate(&key).await;
        }
        Ok(fresh)
    }

    /// Send a mutation; on success, drop the cached reads it affects.
    async fn mutate<T: DeserializeOwned>(
        &self,
        target: MutationTarget,
        builder: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let result = self.send_json(builder).await?;
        self.invalidate(target).await;
        Ok(result)
    }

    /// Like [`Self::mutate`] for endpoints that answer `204 No Content`.
    async fn mutate_empty(
        &self,
        target: MutationTarget,
        builder: RequestBuilder,
    ) -> Result<(), GatewayError> {
        self.send(builder).await?;
        self.invalidate(target).await;
        Ok(())
    }

    fn json<B: Serialize + ?Sized>(&self, method: Method, url: Url, body: &B) -> RequestBuilder {
        self.request(method, url).json(body)
    }

    // =========================================================================
    // Cache
    // =========================================================================

    /// Drop every cached read in the categories `target` invalidates.
    #[instrument(skip(self))]
    pub async fn invalidate(&self, target: MutationTarget) {
        for category in target.invalidates() {
            self.inner.generations.bump(*category);
        }

        let stale: Vec<QueryKey> = self
            .inner
            .cache
            .iter()
            .filter(|(key, _)| target.affects(**key))
            .map(|(key, _)| *key)
            .collect();

        for key in &stale {
            self.inner.cache.invalidate(key).await;
        }
        debug!(count = stale.len(), "Invalidated cached queries");
    }

    /// Whether a fresh result for `key` is currently cached.
    #[must_use]
    pub fn is_cached(&self, key: QueryKey) -> bool {
        self.inner.cache.contains_key(&key)
    }

    // =========================================================================
    // Workouts
    // =========================================================================

    /// List workouts, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn list_workouts(&self) -> Result<Vec<Workout>, GatewayError> {
        self.query(QueryKey::Workouts, self.url("api/workouts")?)
            .await
    }

    /// Totals for the current week.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn weekly_workout_summary(&self) -> Result<WeeklyWorkoutSummary, GatewayError> {
        self.query(
            QueryKey::WorkoutSummary,
            self.url("api/workouts/summary/weekly")?,
        )
        .await
    }

    /// Create a workout together with all of its exercises.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway rejects the workout.
    #[instrument(skip(self, workout), fields(name = %workout.name, exercises = workout.exercises.len()))]
    pub async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, GatewayError> {
        let builder = self.json(Method::POST, self.url("api/workouts")?, workout);
        self.mutate(MutationTarget::Workouts, builder).await
    }

    /// Delete a workout and its exercises.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the workout does not exist.
    #[instrument(skip(self, id), fields(workout_id = %id))]
    pub async fn delete_workout(&self, id: WorkoutId) -> Result<(), GatewayError> {
        let url = self.url(&format!("api/workouts/{id}"))?;
        self.mutate_empty(MutationTarget::Workouts, self.request(Method::DELETE, url))
            .await
    }

    // =========================================================================
    // Nutrition
    // =========================================================================

    /// Meals logged on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn list_meals(&self, date: NaiveDate) -> Result<Vec<Meal>, GatewayError> {
        let mut url = self.url("api/nutrition/meals")?;
        url.query_pairs_mut()
            .append_pair("meal_date", &date.to_string());
        self.query(QueryKey::Meals(date), url).await
    }

    /// Nutrition totals and goal progress for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn daily_nutrition_summary(
        &self,
        date: NaiveDate,
    ) -> Result<DailyNutritionSummary, GatewayError> {
        let url = self.url(&format!("api/nutrition/summary/{date}"))?;
        self.query(QueryKey::NutritionSummary(date), url).await
    }

    /// Log a meal.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway rejects the meal.
    #[instrument(skip(self, meal), fields(name = %meal.name, date = %meal.meal_date))]
    pub async fn create_meal(&self, meal: &NewMeal) -> Result<Meal, GatewayError> {
        let builder = self.json(Method::POST, self.url("api/nutrition/meals")?, meal);
        self.mutate(MutationTarget::Meals, builder).await
    }

    /// Delete a meal.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the meal does not exist.
    #[instrument(skip(self, id), fields(meal_id = %id))]
    pub async fn delete_meal(&self, id: MealId) -> Result<(), GatewayError> {
        let url = self.url(&format!("api/nutrition/meals/{id}"))?;
        self.mutate_empty(MutationTarget::Meals, self.request(Method::DELETE, url))
            .await
    }

    /// Add `glasses` to the water count for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn log_water(&self, glasses: i32, date: NaiveDate) -> Result<WaterLog, GatewayError> {
        let body = NewWaterLog {
            glasses,
            log_date: date,
        };
        let builder = self.json(Method::POST, self.url("api/nutrition/water")?, &body);
        self.mutate(MutationTarget::Water, builder).await
    }

    // =========================================================================
    // Shopping
    // =========================================================================

    /// The shopping list, pending items first.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn list_shopping_items(&self) -> Result<Vec<ShoppingItem>, GatewayError> {
        self.query(QueryKey::ShoppingItems, self.url("api/shopping")?)
            .await
    }

    /// Shopping list counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn shopping_summary(&self) -> Result<ShoppingSummary, GatewayError> {
        self.query(QueryKey::ShoppingSummary, self.url("api/shopping/summary")?)
            .await
    }

    /// Add an item to the shopping list.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway rejects the item.
    #[instrument(skip(self, item), fields(name = %item.name, category = %item.category))]
    pub async fn create_shopping_item(
        &self,
        item: &NewShoppingItem,
    ) -> Result<ShoppingItem, GatewayError> {
        let builder = self.json(Method::POST, self.url("api/shopping")?, item);
        self.mutate(MutationTarget::ShoppingItems, builder).await
    }

    /// Flip an item's purchased flag.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist.
    #[instrument(skip(self, id), fields(item_id = %id))]
    pub async fn toggle_shopping_item(
        &self,
        id: ShoppingItemId,
    ) -> Result<ShoppingItem, GatewayError> {
        let url = self.url(&format!("api/shopping/{id}/toggle"))?;
        self.mutate(
            MutationTarget::ShoppingItems,
            self.request(Method::PATCH, url),
        )
        .await
    }

    /// Remove an item from the shopping list.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist.
    #[instrument(skip(self, id), fields(item_id = %id))]
    pub async fn delete_shopping_item(&self, id: ShoppingItemId) -> Result<(), GatewayError> {
        let url = self.url(&format!("api/shopping/{id}"))?;
        self.mutate_empty(
            MutationTarget::ShoppingItems,
            self.request(Method::DELETE, url),
        )
        .await
    }

    /// Remove every purchased item.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway request fails.
    #[instrument(skip(self))]
    pub async fn clear_purchased(&self) -> Result<(), GatewayError> {
        let url = self.url("api/shopping/clear/purchased")?;
        self.mutate_empty(
            MutationTarget::ShoppingItems,
            self.request(Method::DELETE, url),
        )
        .await
    }

    // =========================================================================
    // User
    // =========================================================================

    /// The user resolved from the init data.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the gateway rejects the init data.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, GatewayError> {
        self.query(QueryKey::CurrentUser, self.url("api/users/me")?)
            .await
    }

    /// Replace all five goals at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway rejects the goals.
    #[instrument(skip(self))]
    pub async fn update_goals(&self, goals: &UserGoals) -> Result<UserGoals, GatewayError> {
        let builder = self.json(Method::PUT, self.url("api/users/me/goals")?, goals);
        self.mutate(MutationTarget::Goals, builder).await
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Check that the gateway answers its health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway is unreachable or unhealthy.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), GatewayError> {
        let url = self.url("health")?;
        self.send(self.inner.client.get(url)).await?;
        Ok(())
    }
}

/// First [`BODY_EXCERPT_CHARS`] characters of a response body.
fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::time::Duration;

    use lifeguard_core::types::ShoppingCategory;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn client(server: &MockServer, init_data: Option<&str>) -> GatewayClient {
        let config = GatewayConfig::new(Url::parse(&server.uri()).unwrap());
        GatewayClient::new(&config, init_data)
    }

    fn item_json(id: i64, name: &str, purchased: bool) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": 1,
            "name": name,
            "quantity": null,
            "category": "produce",
            "notes": null,
            "is_purchased": purchased,
            "created_at": "2026-10-18T08:00:00",
            "updated_at": "2026-10-18T08:00:00"
        })
    }

    fn summary_json(calories: i64) -> serde_json::Value {
        json!({
            "date": "2026-10-18",
            "total_calories": calories,
            "total_protein": 0.0,
            "total_carbs": 0.0,
            "total_fat": 0.0,
            "total_fiber": 0.0,
            "water_glasses": 0,
            "meals_count": 0,
            "calorie_goal": 2000,
            "protein_goal": 150,
            "carbs_goal": 250,
            "fat_goal": 65,
            "water_goal": 8,
            "calorie_progress": 0.0,
            "protein_progress": 0.0,
            "carbs_progress": 0.0,
            "fat_progress": 0.0,
            "water_progress": 0.0
        })
    }

    #[tokio::test]
    async fn test_init_data_header_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shopping"))
            .and(header(INIT_DATA_HEADER, "user=abc&hash=123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let items = client(&server, Some("user=abc&hash=123"))
            .list_shopping_items()
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_reads_are_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shopping"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([item_json(1, "Milk", false)])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, None);
        client.list_shopping_items().await.unwrap();
        let again = client.list_shopping_items().await.unwrap();
        assert_eq!(again[0].name, "Milk");
        assert!(client.is_cached(QueryKey::ShoppingItems));
    }

    #[tokio::test]
    async fn test_meals_query_uses_date_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/nutrition/meals"))
            .and(query_param("meal_date", "2026-10-18"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        client(&server, None).list_meals(today()).await.unwrap();
    }

    #[tokio::test]
    async fn test_water_refreshes_summary_but_not_meals() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/nutrition/summary/2026-10-18"))
            .respond_with(ResponseTemplate::new(200).set_body_json(summary_json(0)))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/nutrition/meals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/nutrition/water"))
            .and(body_json(json!({"glasses": 1, "log_date": "2026-10-18"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 4, "user_id": 1, "glasses": 1, "log_date": "2026-10-18",
                "created_at": "2026-10-18T08:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, None);
        client.daily_nutrition_summary(today()).await.unwrap();
        client.list_meals(today()).await.unwrap();

        client.log_water(1, today()).await.unwrap();

        assert!(!client.is_cached(QueryKey::NutritionSummary(today())));
        assert!(client.is_cached(QueryKey::Meals(today())));

        client.daily_nutrition_summary(today()).await.unwrap();
        client.list_meals(today()).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_mutation_invalidates_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shopping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/shopping"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, None);
        client.list_shopping_items().await.unwrap();

        let item = NewShoppingItem {
            name: "Eggs".to_string(),
            quantity: None,
            category: ShoppingCategory::Dairy,
            notes: None,
        };
        let err = client.create_shopping_item(&item).await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { status: 500, ref body } if body == "database down"));
        assert!(client.is_cached(QueryKey::ShoppingItems));
    }

    #[tokio::test]
    async fn test_toggle_invalidates_list_and_summary() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shopping/summary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_items": 1, "purchased_items": 0, "pending_items": 1,
                "items_by_category": {"produce": 1}
            })))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/shopping/7/toggle"))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(7, "Kale", true)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, None);
        client.shopping_summary().await.unwrap();
        assert!(client.is_cached(QueryKey::ShoppingSummary));

        let toggled = client
            .toggle_shopping_item(ShoppingItemId::new(7))
            .await
            .unwrap();
        assert!(toggled.is_purchased);
        assert!(!client.is_cached(QueryKey::ShoppingSummary));
    }

    #[tokio::test]
    async fn test_read_overlapping_toggle_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/shopping"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([item_json(7, "Kale", false)]))
                    .set_delay(Duration::from_millis(500)),
            )
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/shopping"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([item_json(7, "Kale", true)])),
            )
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/shopping/7/toggle"))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(7, "Kale", true)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, None);
        let in_flight = {
            let client = client.clone();
            tokio::spawn(async move { client.list_shopping_items().await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        client
            .toggle_shopping_item(ShoppingItemId::new(7))
            .await
            .unwrap();

        let before = in_flight.await.unwrap().unwrap();
        assert!(!before[0].is_purchased);
        assert!(!client.is_cached(QueryKey::ShoppingItems));

        let refetched = client.list_shopping_items().await.unwrap();
        assert!(refetched[0].is_purchased);
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/workouts/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Workout not found"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "Telegram init data required"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/workouts"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
            .mount(&server)
            .await;

        let client = client(&server, None);
        assert!(matches!(
            client.delete_workout(WorkoutId::new(99)).await,
            Err(GatewayError::NotFound(_))
        ));
        assert!(matches!(
            client.current_user().await,
            Err(GatewayError::Unauthorized(_))
        ));
        assert!(matches!(
            client.list_workouts().await,
            Err(GatewayError::RateLimited(30))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/workouts/summary/weekly"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server, None)
            .weekly_workout_summary()
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lifeguard/api/workouts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = GatewayConfig::new(Url::parse(&format!("{}/lifeguard", server.uri())).unwrap());
        let client = GatewayClient::new(&config, None);
        assert!(client.base_url().as_str().ends_with("/lifeguard/"));
        client.list_workouts().await.unwrap();
    }

    #[tokio::test]
    async fn test_ping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&server)
            .await;

        client(&server, None).ping().await.unwrap();
    }
}
