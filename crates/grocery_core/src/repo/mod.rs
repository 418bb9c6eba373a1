//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the grocery list item data access contract.
//! - Isolate SQLite query details from store/caller orchestration.
//!
//! # Invariants
//! - Repositories only run on connections that passed the schema readiness check.

pub mod grocery_list_item_repo;
