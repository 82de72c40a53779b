//! Storage module
//!
//! This module provides the storage abstraction for the two gateway
//! resources and its SQL implementation.

pub mod gateway_store;
pub mod sqlite_gateway_store;

pub use gateway_store::*;
pub use sqlite_gateway_store::*;
