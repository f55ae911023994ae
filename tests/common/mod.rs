#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use chrono::{DateTime, Utc};
use fitness::fitness_auth::Role;
use fitness::fitness_config::{CorsConfig, JwtConfig};
use fitness::fitness_core::hash_password;
use fitness::router::init_router;
use fitness::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_PASSWORD: &str = "testpass123";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn admin_token(&self, id: i32) -> String {
        self.token(id, Role::Admin)
    }

    pub fn trainer_token(&self, id: i32) -> String {
        self.token(id, Role::Trainer)
    }

    fn token(&self, id: i32, role: Role) -> String {
        self.state.token_codec.issue(id, role, Utc::now()).unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        read_json(response).await
    }
}

pub fn setup_test_app(pool: PgPool) -> TestApp {
    let jwt_config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_ttl_hours: 1460,
    };
    let state = AppState::new(pool, &jwt_config, CorsConfig::parse("http://localhost:3000"));

    TestApp {
        router: init_router(state.clone()),
        state,
    }
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn unique_login() -> String {
    format!("admin_{}", &Uuid::new_v4().simple().to_string()[..12])
}

pub async fn create_test_admin(pool: &PgPool, login: &str, is_super: bool) -> i32 {
    let hashed = hash_password(ADMIN_PASSWORD).unwrap();

    sqlx::query_scalar::<_, i32>(
        "INSERT INTO admins (login, password, first_name, last_name, super)
         VALUES ($1, $2, 'Test', 'Admin', $3) RETURNING id",
    )
    .bind(login)
    .bind(hashed)
    .bind(is_super)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Returns the trainer's id and sign-in token.
pub async fn create_test_trainer(pool: &PgPool, first_name: &str) -> (i32, String) {
    let token = Uuid::new_v4().to_string();

    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO trainers (token, first_name, last_name) VALUES ($1, $2, 'Coach') RETURNING id",
    )
    .bind(&token)
    .bind(first_name)
    .fetch_one(pool)
    .await
    .unwrap();

    (id, token)
}

pub async fn create_test_client(pool: &PgPool, first_name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO clients (first_name, last_name, phone_number)
         VALUES ($1, 'Client', '+15550100') RETURNING id",
    )
    .bind(first_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_workout_type(pool: &PgPool, title: &str, price: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO workout_types (title, price) VALUES ($1, $2) RETURNING id",
    )
    .bind(title)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_workout(
    pool: &PgPool,
    client_id: i32,
    trainer_id: i32,
    workout_type_id: i32,
    date: DateTime<Utc>,
) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO workouts (client_id, trainer_id, workout_type_id, date)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(client_id)
    .bind(trainer_id)
    .bind(workout_type_id)
    .bind(date)
    .fetch_one(pool)
    .await
    .unwrap()
}
