//! Storage trait for gateway records
//!
//! Every operation maps to a single parameterized SQL statement: it either
//! fully succeeds or fully fails with no side effects.

use async_trait::async_trait;

use crate::gateway::error::GatewayError;
use crate::gateway::models::{HarvestRecord, Todo};

/// Storage abstraction over the `todos` and `harvest_records` tables.
///
/// Delete operations return the rows-affected count so callers can
/// distinguish "not found" from "found and removed". A `user_scope` of
/// `None` leaves the statement unscoped; `Some(id)` additionally matches
/// the row's `user_id`.
#[async_trait]
pub trait GatewayStore: Send + Sync {
    /// Returns all todos, optionally filtered by `user_id`, in storage order.
    async fn list_todos(&self, user_scope: Option<i64>) -> Result<Vec<Todo>, GatewayError>;

    /// Inserts one todo and returns it with its generated id.
    async fn create_todo(&self, task: &str, user_id: Option<i64>) -> Result<Todo, GatewayError>;

    /// Replaces the todo matching `id`; `None` if no row matched.
    async fn update_todo(&self, id: i64, task: &str) -> Result<Option<Todo>, GatewayError>;

    /// Removes the todo matching `id` and returns the rows-affected count.
    async fn delete_todo(&self, id: i64, user_scope: Option<i64>) -> Result<u64, GatewayError>;

    /// Returns all harvest records, optionally filtered by `user_id`, in
    /// storage order.
    async fn list_harvest_records(
        &self,
        user_scope: Option<i64>,
    ) -> Result<Vec<HarvestRecord>, GatewayError>;

    /// Inserts one harvest record and returns it with its generated id.
    async fn create_harvest_record(
        &self,
        crop: &str,
        quantity: f64,
        user_id: Option<i64>,
    ) -> Result<HarvestRecord, GatewayError>;

    /// Replaces the harvest record matching `id`; `None` if no row matched.
    async fn update_harvest_record(
        &self,
        id: i64,
        crop: &str,
        quantity: f64,
    ) -> Result<Option<HarvestRecord>, GatewayError>;

    /// Removes the harvest record matching `id` and returns the
    /// rows-affected count.
    async fn delete_harvest_record(
        &self,
        id: i64,
        user_scope: Option<i64>,
    ) -> Result<u64, GatewayError>;
}
