//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::NaiveDate;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use bahari_core::config::AppConfig;
use bahari_core::traits::{ImageStore, Mailer};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config")
            .expect("Failed to load test config");

        let db_pool = bahari_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        bahari_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let image_store: Arc<dyn ImageStore> = Arc::new(
            bahari_storage::LocalImageStore::new(&config.storage)
                .await
                .expect("Failed to init image store"),
        );
        let mailer: Arc<dyn Mailer> = Arc::new(bahari_mailer::LogMailer::new());

        let app_state =
            bahari_api::state::AppState::build(config.clone(), db_pool.clone(), image_store, mailer);

        let router = bahari_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["bookings", "packages", "rooms", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, username: &str, password: &str, role: &str) -> Uuid {
        let hasher = bahari_auth::password::hasher::PasswordHasher::new();
        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO users (id, username, email, password_hash, display_name, role, status)
               VALUES ($1, $2, $3, $4, $5, $6::user_role, 'active'::user_status)"#,
        )
        .bind(id)
        .bind(username)
        .bind(format!("{}@test.com", username))
        .bind(&hash)
        .bind(username)
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Create a test room and return its ID
    pub async fn create_test_room(&self, name: &str, price: i64, capacity: i32) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO rooms (id, name, description, price, capacity, amenities)
               VALUES ($1, $2, 'A test room', $3, $4, '["wifi"]')"#,
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(capacity)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test room");

        id
    }

    /// Create a test package and return its ID
    pub async fn create_test_package(&self, name: &str, price_addon: i64) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO packages (id, name, description, price_addon)
               VALUES ($1, $2, 'A test package', $3)"#,
        )
        .bind(id)
        .bind(name)
        .bind(price_addon)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test package");

        id
    }

    /// Create a reservation through the API and return its ID
    pub async fn create_test_booking(
        &self,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/bookings",
                Some(serde_json::json!({
                    "room_id": room_id,
                    "guest_name": "Asha Mwangi",
                    "guest_email": "asha@test.com",
                    "check_in_date": check_in,
                    "check_out_date": check_out,
                    "adults": 2,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Booking failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("No booking id in response")
    }

    /// Login and return JWT access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Build a date for test stays.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid test date")
}
