//! Gateway module
//!
//! This module provides the HTTP CRUD gateway: configuration, error
//! translation, record models, the storage layer, and the axum routers.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use models::*;
pub use routes::{build_router, AppState};
pub use store::{GatewayStore, SqliteGatewayStore};
