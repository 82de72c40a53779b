//! Harvest record endpoints
//!
//! CRUD handlers for the `harvest_records` resource, mirroring the todo
//! handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::gateway::error::GatewayError;
use crate::gateway::models::{
    CreateHarvestRecord, DeleteScope, HarvestRecord, ListFilter, UpdateHarvestRecord,
};
use crate::gateway::routes::AppState;

/// Routes for the `harvest` resource
pub fn harvest_routes() -> Router<AppState> {
    Router::new()
        .route("/harvest", get(list_harvest_records).post(create_harvest_record))
        .route("/harvest/:id", put(update_harvest_record).delete(delete_harvest_record))
}

/// GET /harvest
async fn list_harvest_records(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<HarvestRecord>>, GatewayError> {
    let user_scope = if state.user_scoping { filter.user_id } else { None };
    let records = state.store.list_harvest_records(user_scope).await?;
    Ok(Json(records))
}

/// POST /harvest
async fn create_harvest_record(
    State(state): State<AppState>,
    Json(payload): Json<CreateHarvestRecord>,
) -> Result<(StatusCode, Json<HarvestRecord>), GatewayError> {
    let user_id = if state.user_scoping { payload.user_id } else { None };
    let record = state
        .store
        .create_harvest_record(&payload.crop, payload.quantity, user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /harvest/:id
async fn update_harvest_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateHarvestRecord>,
) -> Result<Response, GatewayError> {
    match state
        .store
        .update_harvest_record(id, &payload.crop, payload.quantity)
        .await?
    {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "Harvest record not found").into_response()),
    }
}

/// DELETE /harvest/:id
async fn delete_harvest_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<DeleteScope>>,
) -> Result<Response, GatewayError> {
    if state.user_scoping {
        // A request without a userId can never match a row's user_id.
        let affected = match payload.and_then(|Json(scope)| scope.user_id) {
            Some(user_id) => state.store.delete_harvest_record(id, Some(user_id)).await?,
            None => 0,
        };
        if affected == 0 {
            return Ok((StatusCode::NOT_FOUND, "Harvest record not found").into_response());
        }
    } else {
        // Legacy contract: success is reported even when no row matched.
        state.store.delete_harvest_record(id, None).await?;
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
