#![allow(dead_code)]

use favorites_service::application::services::hash_token;
use favorites_service::domain::repositories::TokenRepository;
use favorites_service::infrastructure::persistence::PgTokenRepository;
use favorites_service::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub async fn create_test_report(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO reports (title) VALUES ($1) RETURNING id")
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_merchandiser(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO merchandisers (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(format!("{}@example.com", name.to_lowercase().replace(' ', ".")))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_favorite(pool: &PgPool, merchandiser_id: i64, report_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO report_favorites (merchandiser_id, report_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(merchandiser_id)
    .bind(report_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_favorites(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM report_favorites")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Stores a token hashed with [`TEST_SECRET`] and returns the raw value.
pub async fn create_api_token(pool: &PgPool, name: &str) -> String {
    let raw = format!("raw-{name}");
    PgTokenRepository::new(Arc::new(pool.clone()))
        .create_token(name, &hash_token(TEST_SECRET, &raw))
        .await
        .unwrap();
    raw
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SECRET.to_string())
}
