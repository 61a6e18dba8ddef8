//! Tests for the clothing store backend.
//!
//! - **api_tests**: `/api/clothing` endpoints through the full router
//! - **store_tests**: `ClothingStore` against an in-memory database
//! - **seed_tests**: demo data seeding
//! - **types_tests**: request validation, defaults and price coercion
//! - **config_tests**: configuration loading and validation
//! - **db_tests**: schema bootstrap
//! - **error_tests**: error to response mapping
//! - **health_api_tests**: operational endpoints

pub mod config_tests;
pub mod seed_tests;

use std::time::Duration;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;

use crate::{app, config::AppConfig, db, seed, state::AppState};

/// Single-connection in-memory database with the schema applied.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init_db(&pool).await.unwrap();
    pool
}

pub async fn empty_state() -> AppState {
    AppState::new(memory_pool().await, AppConfig::default())
}

pub async fn seeded_state() -> AppState {
    let state = empty_state().await;
    seed::seed_if_empty(&state.store).await.unwrap();
    state
}

pub async fn empty_app() -> (Router, AppState) {
    let state = empty_state().await;
    (app::build_router(state.clone()), state)
}

pub async fn seeded_app() -> (Router, AppState) {
    let state = seeded_state().await;
    (app::build_router(state.clone()), state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Sends one request through the router. `json` is `Null` when the body is not JSON.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse { status, headers, json }
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, content_type: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse { status, headers, json }
}
