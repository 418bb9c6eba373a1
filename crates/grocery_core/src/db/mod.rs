//! Grocery database bootstrap: connections, schema and demo rows.
//!
//! `open_db` is the connection manager for `GroceryListItemStore` and runs on
//! every store call: it opens the file, sets pragmas and migrates the
//! `GroceryListItem` table when needed. Seeding is never implied by opening;
//! callers run [`seed_demo_items`] once at startup if they want demo rows.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
pub mod seed;

pub use open::{open_db, open_db_in_memory};
pub use seed::{seed_demo_items, SeedOutcome, SEED_ITEMS};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening, migrating or seeding the grocery database.
#[derive(Debug)]
pub enum DbError {
    /// Any SQLite failure, including lock timeouts and unopenable files.
    Sqlite(rusqlite::Error),
    /// The file was migrated by a newer build than this one.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "grocery database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "grocery database is at schema version {db_version}, \
                 this build only understands up to {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
