//! SQL implementation of GatewayStore using sqlx
//!
//! This module provides a persistent record store implementation using sqlx
//! with support for SQLite.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

use crate::gateway::error::GatewayError;
use crate::gateway::models::{HarvestRecord, Todo};
use crate::gateway::store::gateway_store::GatewayStore;

/// SQLite implementation of GatewayStore
pub struct SqliteGatewayStore {
    pool: SqlitePool,
}

impl SqliteGatewayStore {
    /// Creates a new SqliteGatewayStore with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connects to a SQLite database from a connection string
    pub async fn connect(url: &str) -> Result<Self, GatewayError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(GatewayError::Database)?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Creates the two record tables if they do not exist yet.
    ///
    /// Idempotent bootstrap, not migration tooling: the schemas never change
    /// after this.
    pub async fn initialize(&self) -> Result<(), GatewayError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task TEXT NOT NULL,
                user_id INTEGER
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS harvest_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                crop TEXT NOT NULL,
                quantity REAL NOT NULL,
                user_id INTEGER
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl GatewayStore for SqliteGatewayStore {
    async fn list_todos(&self, user_scope: Option<i64>) -> Result<Vec<Todo>, GatewayError> {
        let todos = match user_scope {
            Some(user_id) => {
                sqlx::query_as::<_, Todo>(
                    "SELECT id, task, user_id FROM todos WHERE user_id = ?",
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Todo>("SELECT id, task, user_id FROM todos")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(todos)
    }

    async fn create_todo(&self, task: &str, user_id: Option<i64>) -> Result<Todo, GatewayError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (task, user_id) VALUES (?, ?) RETURNING id, task, user_id",
        )
        .bind(task)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update_todo(&self, id: i64, task: &str) -> Result<Option<Todo>, GatewayError> {
        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET task = ? WHERE id = ? RETURNING id, task, user_id",
        )
        .bind(task)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn delete_todo(&self, id: i64, user_scope: Option<i64>) -> Result<u64, GatewayError> {
        let result = match user_scope {
            Some(user_id) => {
                sqlx::query("DELETE FROM todos WHERE id = ? AND user_id = ?")
                    .bind(id)
                    .bind(user_id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM todos WHERE id = ?")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };
        Ok(result.rows_affected())
    }

    async fn list_harvest_records(
        &self,
        user_scope: Option<i64>,
    ) -> Result<Vec<HarvestRecord>, GatewayError> {
        let records = match user_scope {
            Some(user_id) => {
                sqlx::query_as::<_, HarvestRecord>(
                    "SELECT id, crop, quantity, user_id FROM harvest_records WHERE user_id = ?",
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, HarvestRecord>(
                    "SELECT id, crop, quantity, user_id FROM harvest_records",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(records)
    }

    async fn create_harvest_record(
        &self,
        crop: &str,
        quantity: f64,
        user_id: Option<i64>,
    ) -> Result<HarvestRecord, GatewayError> {
        let record = sqlx::query_as::<_, HarvestRecord>(
            "INSERT INTO harvest_records (crop, quantity, user_id) VALUES (?, ?, ?)
             RETURNING id, crop, quantity, user_id",
        )
        .bind(crop)
        .bind(quantity)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn update_harvest_record(
        &self,
        id: i64,
        crop: &str,
        quantity: f64,
    ) -> Result<Option<HarvestRecord>, GatewayError> {
        let record = sqlx::query_as::<_, HarvestRecord>(
            "UPDATE harvest_records SET crop = ?, quantity = ? WHERE id = ?
             RETURNING id, crop, quantity, user_id",
        )
        .bind(crop)
        .bind(quantity)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn delete_harvest_record(
        &self,
        id: i64,
        user_scope: Option<i64>,
    ) -> Result<u64, GatewayError> {
        let result = match user_scope {
            Some(user_id) => {
                sqlx::query("DELETE FROM harvest_records WHERE id = ? AND user_id = ?")
                    .bind(id)
                    .bind(user_id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM harvest_records WHERE id = ?")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteGatewayStore {
        let store = SqliteGatewayStore::connect("sqlite::memory:").await.unwrap();
        store.initialize().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_todo_crud() {
        let store = memory_store().await;

        // Test create
        let created = store.create_todo("water plants", None).await.unwrap();
        assert_eq!(created.task, "water plants");
        assert!(created.user_id.is_none());

        // Test list
        let todos = store.list_todos(None).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0], created);

        // Test update
        let updated = store
            .update_todo(created.id, "water plants daily")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.task, "water plants daily");

        // Test update of a missing id
        let missing = store.update_todo(9999, "nothing").await.unwrap();
        assert!(missing.is_none());

        // Test delete
        let affected = store.delete_todo(created.id, None).await.unwrap();
        assert_eq!(affected, 1);
        assert!(store.list_todos(None).await.unwrap().is_empty());

        // Test delete of a missing id
        let affected = store.delete_todo(created.id, None).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_harvest_record_crud() {
        let store = memory_store().await;

        let created = store
            .create_harvest_record("tomato", 12.5, None)
            .await
            .unwrap();
        assert_eq!(created.crop, "tomato");
        assert_eq!(created.quantity, 12.5);

        let records = store.list_harvest_records(None).await.unwrap();
        assert_eq!(records.len(), 1);

        let updated = store
            .update_harvest_record(created.id, "cherry tomato", 4.0)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.crop, "cherry tomato");
        assert_eq!(updated.quantity, 4.0);

        assert!(store
            .update_harvest_record(9999, "nothing", 0.0)
            .await
            .unwrap()
            .is_none());

        let affected = store.delete_harvest_record(created.id, None).await.unwrap();
        assert_eq!(affected, 1);
        assert!(store.list_harvest_records(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generated_ids_are_never_reused() {
        let store = memory_store().await;

        let first = store.create_todo("first", None).await.unwrap();
        store.delete_todo(first.id, None).await.unwrap();

        // AUTOINCREMENT keeps ids monotonic even after a delete
        let second = store.create_todo("second", None).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_user_scoped_operations() {
        let store = memory_store().await;

        let mine = store.create_todo("mine", Some(1)).await.unwrap();
        let theirs = store.create_todo("theirs", Some(2)).await.unwrap();
        assert_eq!(mine.user_id, Some(1));

        // Scoped list only returns matching rows
        let scoped = store.list_todos(Some(1)).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].task, "mine");

        // Scoped delete with the wrong user matches zero rows
        let affected = store.delete_todo(theirs.id, Some(1)).await.unwrap();
        assert_eq!(affected, 0);
        assert_eq!(store.list_todos(None).await.unwrap().len(), 2);

        let affected = store.delete_todo(theirs.id, Some(2)).await.unwrap();
        assert_eq!(affected, 1);
    }
}
