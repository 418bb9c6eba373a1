//! Domain model for grocery list contents.
//!
//! # Responsibility
//! - Define the records exchanged between the store and its callers.
//!
//! # Invariants
//! - A persisted item always carries a storage-assigned id.
//! - List/product references are stored as plain ids and never validated here.

pub mod grocery_list_item;
