//! # Clothing Store Backend Library
//!
//! Inventory REST API for a clothing store. A single entity, the clothing item,
//! is exposed through create/read/update/delete/list endpoints under
//! `/api/clothing`, stored in one SQLite table, with a static storefront and
//! admin page served next to it.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous SQLite access
//! - **Tokio**: async runtime
//! - **Serde**: JSON request and response bodies
//!
//! ## Core Components
//!
//! - [`app`]: router assembly (API, operational endpoints, frontend, middleware)
//! - [`config`]: layered configuration loading and validation
//! - [`db`]: connection pool and schema bootstrap
//! - [`error`]: error type and its JSON response mapping
//! - [`extract`]: request extractors
//! - [`metrics`]: request counters
//! - [`middleware`]: security headers
//! - [`routes`]: HTTP handlers
//! - [`seed`]: demo data for an empty database
//! - [`state`]: shared application state
//! - [`store`]: persistence for clothing items
//! - [`types`]: the item model and request DTOs

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
