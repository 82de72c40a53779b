//! Gateway error types
//!
//! Failures from the query layer are logged server-side and surfaced
//! uniformly as a 500 status with no detail leaked to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Errors produced by the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Any error raised by the database driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid startup configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
    }
}
