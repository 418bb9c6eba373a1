//! Grocery list item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `GroceryListItem` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every id and filter value is bound as a typed parameter.
//! - List reads are ordered by `Id` ascending, i.e. insertion order.
//! - `update`/`delete` echo their input even when no row matched.
//! - The storage-assigned id is read back by the insert statement itself.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::grocery_list_item::{GroceryListItem, GroceryListItemId, NewGroceryListItem};
use log::{debug, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ITEM_TABLE: &str = "GroceryListItem";
const ITEM_COLUMNS: [&str; 4] = ["Id", "GroceryListId", "ProductId", "Amount"];

const ITEM_SELECT_SQL: &str = "SELECT
    Id,
    GroceryListId,
    ProductId,
    Amount
FROM GroceryListItem";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for grocery list item persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "grocery repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "grocery repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "grocery repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for grocery list item CRUD operations.
pub trait GroceryListItemRepository {
    /// Returns every item in insertion order.
    fn get_all(&self) -> RepoResult<Vec<GroceryListItem>>;
    /// Returns the items of one grocery list in insertion order.
    fn get_all_on_grocery_list_id(
        &self,
        grocery_list_id: i64,
    ) -> RepoResult<Vec<GroceryListItem>>;
    /// Inserts a new item and returns it with its storage-assigned id.
    fn add(&self, item: NewGroceryListItem) -> RepoResult<GroceryListItem>;
    /// Gets one item by id.
    fn get(&self, id: GroceryListItemId) -> RepoResult<Option<GroceryListItem>>;
    /// Overwrites all mutable fields by id and returns the input unchanged.
    ///
    /// A missing id is not an error: nothing is written and no row is created.
    fn update(&self, item: GroceryListItem) -> RepoResult<GroceryListItem>;
    /// Deletes by id and returns the input unchanged, whether or not a row existed.
    fn delete(&self, item: GroceryListItem) -> RepoResult<GroceryListItem>;
}

/// SQLite-backed grocery list item repository over a borrowed connection.
pub struct SqliteGroceryListItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGroceryListItemRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_item_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl GroceryListItemRepository for SqliteGroceryListItemRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<GroceryListItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY Id ASC;"))?;
        let items = stmt
            .query_map([], parse_item_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn get_all_on_grocery_list_id(
        &self,
        grocery_list_id: i64,
    ) -> RepoResult<Vec<GroceryListItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE GroceryListId = ?1
             ORDER BY Id ASC;"
        ))?;
        let items = stmt
            .query_map([grocery_list_id], parse_item_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn add(&self, item: NewGroceryListItem) -> RepoResult<GroceryListItem> {
        let id: GroceryListItemId = self.conn.query_row(
            "INSERT INTO GroceryListItem (GroceryListId, ProductId, Amount)
             VALUES (?1, ?2, ?3)
             RETURNING Id;",
            params![item.grocery_list_id, item.product_id, item.amount],
            |row| row.get(0),
        )?;

        debug!("event=item_add module=repo status=ok item_id={id}");
        Ok(item.with_id(id))
    }

    fn get(&self, id: GroceryListItemId) -> RepoResult<Option<GroceryListItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE Id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, item: GroceryListItem) -> RepoResult<GroceryListItem> {
        let changed = self.conn.execute(
            "UPDATE GroceryListItem
             SET
                GroceryListId = ?1,
                ProductId = ?2,
                Amount = ?3
             WHERE Id = ?4;",
            params![item.grocery_list_id, item.product_id, item.amount, item.id],
        )?;

        if changed == 0 {
            warn!(
                "event=item_update module=repo status=noop item_id={} reason=not_found",
                item.id
            );
        }

        Ok(item)
    }

    fn delete(&self, item: GroceryListItem) -> RepoResult<GroceryListItem> {
        let changed = self
            .conn
            .execute("DELETE FROM GroceryListItem WHERE Id = ?1;", [item.id])?;

        debug!(
            "event=item_delete module=repo status={} item_id={}",
            if changed == 0 { "noop" } else { "ok" },
            item.id
        );

        Ok(item)
    }
}

fn parse_item_row(row: &Row<'_>) -> rusqlite::Result<GroceryListItem> {
    Ok(GroceryListItem {
        id: row.get("Id")?,
        grocery_list_id: row.get("GroceryListId")?,
        product_id: row.get("ProductId")?,
        amount: row.get("Amount")?,
    })
}

fn ensure_item_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, ITEM_TABLE)? {
        return Err(RepoError::MissingRequiredTable(ITEM_TABLE));
    }

    for column in ITEM_COLUMNS {
        if !table_has_column(conn, ITEM_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: ITEM_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
