//! Grocery list item store with a per-call connection lifecycle.
//!
//! # Responsibility
//! - Expose the grocery list item CRUD operations to callers.
//! - Open a fresh connection for each call and close it before returning.
//!
//! # Invariants
//! - The store holds no connection and no cached rows between calls.
//! - The store never creates schema or seeds data beyond what `open_db`
//!   migrations do; seeding is a separate startup step.

use crate::db::open_db;
use crate::model::grocery_list_item::{GroceryListItem, GroceryListItemId, NewGroceryListItem};
use crate::repo::grocery_list_item_repo::{
    GroceryListItemRepository, RepoResult, SqliteGroceryListItemRepository,
};
use std::path::{Path, PathBuf};

/// Grocery list item store backed by one SQLite database file.
#[derive(Debug, Clone)]
pub struct GroceryListItemStore {
    db_path: PathBuf,
}

impl GroceryListItemStore {
    /// Creates a store for the database at `db_path`.
    ///
    /// No connection is opened here; the first call opens (and migrates) it.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Database file this store operates on.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn with_repo<T>(
        &self,
        f: impl FnOnce(&SqliteGroceryListItemRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let conn = open_db(&self.db_path)?;
        let repo = SqliteGroceryListItemRepository::try_new(&conn)?;
        f(&repo)
        // `conn` drops here, closing the connection.
    }
}

impl GroceryListItemRepository for GroceryListItemStore {
    fn get_all(&self) -> RepoResult<Vec<GroceryListItem>> {
        self.with_repo(|repo| repo.get_all())
    }

    fn get_all_on_grocery_list_id(
        &self,
        grocery_list_id: i64,
    ) -> RepoResult<Vec<GroceryListItem>> {
        self.with_repo(|repo| repo.get_all_on_grocery_list_id(grocery_list_id))
    }

    fn add(&self, item: NewGroceryListItem) -> RepoResult<GroceryListItem> {
        self.with_repo(|repo| repo.add(item))
    }

    fn get(&self, id: GroceryListItemId) -> RepoResult<Option<GroceryListItem>> {
        self.with_repo(|repo| repo.get(id))
    }

    fn update(&self, item: GroceryListItem) -> RepoResult<GroceryListItem> {
        self.with_repo(|repo| repo.update(item))
    }

    fn delete(&self, item: GroceryListItem) -> RepoResult<GroceryListItem> {
        self.with_repo(|repo| repo.delete(item))
    }
}
