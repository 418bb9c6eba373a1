//! Caller-facing stores.
//!
//! # Responsibility
//! - Own the per-call connection lifecycle around repository operations.
//! - Keep callers decoupled from connection and schema details.

pub mod grocery_list_item_store;
