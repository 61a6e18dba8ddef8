use std::path::PathBuf;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{routes, state::AppState};

/// Frontend bundled with the source tree, used when `app.frontend_dir` does not exist.
const BUNDLED_FRONTEND_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/frontend");

pub const API_PREFIX: &str = "/api/clothing";

/// Inventory routes, relative to the server root.
pub fn api_router() -> Router<AppState> {
    use crate::routes::clothing::{create_item, delete_item, get_item, list_categories, list_items, update_item};

    // Both spellings of the collection path are accepted; the frontend uses the bare one
    Router::new()
        .route(API_PREFIX, get(list_items).post(create_item))
        .route(&format!("{API_PREFIX}/"), get(list_items).post(create_item))
        .route(&format!("{API_PREFIX}/categories"), get(list_categories))
        .route(&format!("{API_PREFIX}/{{id}}"), get(get_item).put(update_item).delete(delete_item))
}

pub fn frontend_dir(configured: &str) -> PathBuf {
    let configured = PathBuf::from(configured);
    if configured.join("index.html").is_file() {
        configured
    } else {
        PathBuf::from(BUNDLED_FRONTEND_DIR)
    }
}

/// Full application: API, operational endpoints, static frontend and middleware.
pub fn build_router(state: AppState) -> Router {
    let frontend = frontend_dir(&state.config.app.frontend_dir);
    let cfg_arc = state.config.clone();

    Router::new()
        .merge(api_router())
        .route("/healthz", get(routes::health::healthz))
        .route("/readyz", get(routes::health::readyz))
        .route("/metrics", get(routes::health::metrics))
        .route("/metrics/prometheus", get(routes::health::metrics_prometheus))
        .route("/version", get(routes::health::version))
        .route_service("/", ServeFile::new(frontend.join("index.html")))
        .route_service("/admin", ServeFile::new(frontend.join("admin.html")))
        .fallback_service(ServeDir::new(frontend))
        .with_state(state)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(cfg_arc, crate::middleware::security_headers::security_headers_middleware))
        // The admin page and storefront may be served from another origin
        .layer(CorsLayer::permissive())
}
