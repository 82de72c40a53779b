//! Task record endpoints
//!
//! CRUD handlers for the `todos` resource. Each handler performs one
//! parameterized statement against the shared store and translates the
//! outcome into a status code.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::gateway::error::GatewayError;
use crate::gateway::models::{CreateTodo, DeleteScope, ListFilter, Todo, UpdateTodo};
use crate::gateway::routes::AppState;

/// Routes for the `todos` resource
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
}

/// GET /todos
async fn list_todos(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<Todo>>, GatewayError> {
    let user_scope = if state.user_scoping { filter.user_id } else { None };
    let todos = state.store.list_todos(user_scope).await?;
    Ok(Json(todos))
}

/// POST /todos
async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), GatewayError> {
    let user_id = if state.user_scoping { payload.user_id } else { None };
    let todo = state.store.create_todo(&payload.task, user_id).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/:id
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTodo>,
) -> Result<Response, GatewayError> {
    match state.store.update_todo(id, &payload.task).await? {
        Some(todo) => Ok(Json(todo).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "Todo not found").into_response()),
    }
}

/// DELETE /todos/:id
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<DeleteScope>>,
) -> Result<Response, GatewayError> {
    if state.user_scoping {
        // A request without a userId can never match a row's user_id.
        let affected = match payload.and_then(|Json(scope)| scope.user_id) {
            Some(user_id) => state.store.delete_todo(id, Some(user_id)).await?,
            None => 0,
        };
        if affected == 0 {
            return Ok((StatusCode::NOT_FOUND, "Todo not found").into_response());
        }
    } else {
        // Legacy contract: success is reported even when no row matched.
        state.store.delete_todo(id, None).await?;
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
