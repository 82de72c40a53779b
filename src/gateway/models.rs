//! Record models and request payloads
//!
//! Responses serialize with the column names (`id`, `task`, `crop`,
//! `quantity`, `user_id`); request bodies use `userId` as sent by clients.
//! `user_id` is supplied by the client verbatim and never verified, so it is
//! not a trustworthy ownership boundary.

use serde::{Deserialize, Serialize};

/// A task record stored in the `todos` table.
///
/// `id` is assigned by the database on creation and is immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A harvest record stored in the `harvest_records` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HarvestRecord {
    pub id: i64,
    pub crop: String,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Body of `POST /todos`
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub task: String,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

/// Body of `PUT /todos/:id` (full replacement, non-partial)
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub task: String,
}

/// Body of `POST /harvest`
#[derive(Debug, Deserialize)]
pub struct CreateHarvestRecord {
    pub crop: String,
    pub quantity: f64,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

/// Body of `PUT /harvest/:id` (full replacement, non-partial)
#[derive(Debug, Deserialize)]
pub struct UpdateHarvestRecord {
    pub crop: String,
    pub quantity: f64,
}

/// Optional `userId` query parameter accepted by the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListFilter {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

/// Optional delete body carrying the `userId` used for ownership matching
#[derive(Debug, Default, Deserialize)]
pub struct DeleteScope {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}
