//! HTTP routing
//!
//! This module assembles the resource routers, shared state, and the CORS
//! layer into the single axum router served by the gateway process.

pub mod harvest;
pub mod todos;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::gateway::store::GatewayStore;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// The single connection-pool-backed store shared by all handlers
    pub store: Arc<dyn GatewayStore>,
    /// Whether records are scoped by the client-supplied `userId`
    pub user_scoping: bool,
}

/// Builds the combined router with both resources and the CORS policy.
///
/// With no configured origin the gateway is open to all origins; with one,
/// cross-origin access is restricted to exactly that origin.
pub fn build_router(state: AppState, allowed_origin: Option<&str>) -> Router {
    let cors = match allowed_origin {
        Some(origin) => match origin.parse() {
            // A one-element list mirrors the origin back only when it
            // matches; non-matching requests get no allow header.
            Ok(origin) => CorsLayer::new()
                .allow_origin(AllowOrigin::list([origin]))
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                warn!("unparseable CORS origin {:?}, falling back to permissive", origin);
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        },
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .merge(todos::todo_routes())
        .merge(harvest::harvest_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
