//! HTTP route handlers.
//!
//! - `clothing`: the inventory CRUD API under `/api/clothing`
//! - `health`: liveness, readiness, metrics and version endpoints

pub mod clothing;
pub mod health;
