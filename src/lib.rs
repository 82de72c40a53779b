//! HTTP CRUD gateway for task and harvest records
//!
//! This crate exposes two resources (`/todos` and `/harvest`) over plain
//! create/read/update/delete endpoints backed by a relational database
//! through a shared connection pool. Every handler runs a single
//! parameterized SQL statement and serializes the resulting rows as JSON.

pub mod gateway;
