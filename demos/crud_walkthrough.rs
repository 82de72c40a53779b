//! CRUD Walkthrough Demo
//!
//! This demo drives the full todo lifecycle against a running gateway:
//! create, list, replace, delete. Start the server first, then run:
//!
//! ```bash
//! cargo run &
//! cargo run --example crud_walkthrough
//! ```
//!
//! Set `GATEWAY_URL` to point at a non-default address.

use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = reqwest::Client::new();

    println!("Creating a todo...");
    let created: Value = client
        .post(format!("{}/todos", base))
        .json(&json!({"task": "water plants"}))
        .send()
        .await?
        .json()
        .await?;
    println!("  -> {}", created);
    let id = created["id"].as_i64().ok_or("missing id in response")?;

    println!("Listing todos...");
    let todos: Vec<Value> = client
        .get(format!("{}/todos", base))
        .send()
        .await?
        .json()
        .await?;
    println!("  -> {} record(s)", todos.len());

    println!("Replacing todo {}...", id);
    let updated: Value = client
        .put(format!("{}/todos/{}", base, id))
        .json(&json!({"task": "water plants daily"}))
        .send()
        .await?
        .json()
        .await?;
    println!("  -> {}", updated);

    println!("Deleting todo {}...", id);
    let status = client
        .delete(format!("{}/todos/{}", base, id))
        .send()
        .await?
        .status();
    println!("  -> {}", status);

    Ok(())
}
