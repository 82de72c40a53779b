//! Todo Routes Integration Tests
//!
//! This module contains integration tests for the `/todos` endpoints,
//! running the real router over HTTP against an in-memory database.

use std::sync::Arc;

use harvest_gateway::gateway::{build_router, AppState, SqliteGatewayStore};
use serde_json::{json, Value};

/// Boots a gateway in legacy (unscoped) mode on an ephemeral port.
async fn spawn_gateway() -> Result<String, Box<dyn std::error::Error>> {
    let store = SqliteGatewayStore::connect("sqlite::memory:").await?;
    store.initialize().await?;

    let state = AppState {
        store: Arc::new(store),
        user_scoping: false,
    };
    let router = build_router(state, None);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn test_todo_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_gateway().await?;
    let client = reqwest::Client::new();

    // 1. Create a todo
    let resp = client
        .post(format!("{}/todos", base))
        .json(&json!({"task": "water plants"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await?;
    assert_eq!(created["task"], "water plants");
    let id = created["id"].as_i64().expect("id should be numeric");

    // 2. List includes the created record
    let todos: Vec<Value> = client
        .get(format!("{}/todos", base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"].as_i64(), Some(id));
    assert_eq!(todos[0]["task"], "water plants");

    // 3. Full replacement via PUT
    let resp = client
        .put(format!("{}/todos/{}", base, id))
        .json(&json!({"task": "water plants daily"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await?;
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["task"], "water plants daily");

    // 4. Delete reports no content
    let resp = client.delete(format!("{}/todos/{}", base, id)).send().await?;
    assert_eq!(resp.status(), 204);

    // 5. List excludes the deleted record
    let todos: Vec<Value> = client
        .get(format!("{}/todos", base))
        .send()
        .await?
        .json()
        .await?;
    assert!(todos.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_update_missing_todo_returns_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_gateway().await?;
    let client = reqwest::Client::new();

    // 1. Seed one record so storage is non-empty
    client
        .post(format!("{}/todos", base))
        .json(&json!({"task": "existing"}))
        .send()
        .await?;

    // 2. Update a missing id
    let resp = client
        .put(format!("{}/todos/9999", base))
        .json(&json!({"task": "ghost"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await?, "Todo not found");

    // 3. Storage is unchanged
    let todos: Vec<Value> = client
        .get(format!("{}/todos", base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["task"], "existing");

    Ok(())
}

#[tokio::test]
async fn test_legacy_delete_reports_success_for_missing_id(
) -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_gateway().await?;
    let client = reqwest::Client::new();

    // Legacy mode never checks the rows-affected count
    let resp = client.delete(format!("{}/todos/9999", base)).send().await?;
    assert_eq!(resp.status(), 204);

    Ok(())
}

#[tokio::test]
async fn test_created_ids_are_unique() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_gateway().await?;
    let client = reqwest::Client::new();

    let mut seen = Vec::new();
    for task in ["one", "two", "three"] {
        let created: Value = client
            .post(format!("{}/todos", base))
            .json(&json!({"task": task}))
            .send()
            .await?
            .json()
            .await?;
        let id = created["id"].as_i64().expect("id should be numeric");
        assert!(!seen.contains(&id));
        seen.push(id);
    }

    Ok(())
}

#[tokio::test]
async fn test_unscoped_create_ignores_user_id() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_gateway().await?;
    let client = reqwest::Client::new();

    // userId in the body is dropped when scoping is disabled
    let created: Value = client
        .post(format!("{}/todos", base))
        .json(&json!({"task": "weed the beds", "userId": 7}))
        .send()
        .await?
        .json()
        .await?;
    assert!(created.get("user_id").is_none());

    Ok(())
}
