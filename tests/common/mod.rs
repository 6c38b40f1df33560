#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use trivia_api::{config::Config, create_router, services::AppState};

/// Builds the app against a fresh in-memory SQLite database.
///
/// The pool is pinned to a single connection that never expires, so every
/// request in a test sees the same in-memory database.
pub async fn create_test_app() -> (Router, SqlitePool) {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid test database URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open test database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    };

    let app_state = Arc::new(
        AppState::new(config, pool.clone())
            .await
            .expect("Failed to initialize test app state"),
    );

    (create_router(app_state), pool)
}

pub async fn seed_category(pool: &SqlitePool, id: i64, kind: &str) {
    sqlx::query("INSERT INTO category (id, type) VALUES (?1, ?2)")
        .bind(id)
        .bind(kind)
        .execute(pool)
        .await
        .expect("Failed to seed category");
}

pub async fn seed_question(
    pool: &SqlitePool,
    id: i64,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) {
    sqlx::query(
        "INSERT INTO question (id, question, answer, category, difficulty)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(id)
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await
    .expect("Failed to seed question");
}

pub async fn question_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM question")
        .fetch_one(pool)
        .await
        .expect("Failed to count questions")
}

/// Sends a bodyless request and returns status plus parsed JSON body.
pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    parse_response(response).await
}

/// Sends a JSON body and returns status plus parsed JSON body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    parse_response(response).await
}

async fn parse_response(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "Non-JSON response body (status {}): {}",
            status,
            String::from_utf8_lossy(&bytes)
        )
    });

    (status, json)
}
