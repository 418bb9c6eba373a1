//! Core persistence for grocery list items.
//! This crate owns the `GroceryListItem` table and its CRUD contract.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::grocery_list_item::{GroceryListItem, GroceryListItemId, NewGroceryListItem};
pub use repo::grocery_list_item_repo::{
    GroceryListItemRepository, RepoError, RepoResult, SqliteGroceryListItemRepository,
};
pub use store::grocery_list_item_store::GroceryListItemStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
