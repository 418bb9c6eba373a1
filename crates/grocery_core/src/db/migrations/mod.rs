//! Schema migrations for the grocery database.
//!
//! `open_db` runs this on every connection, and the store opens one
//! connection per call, so concurrent first calls against a fresh file all
//! race here. The write lock is taken up front and the version re-read under
//! it, so losers wait on the busy timeout and then find nothing to do.
//!
//! # Invariants
//! - Registry versions are strictly increasing.
//! - `PRAGMA user_version` equals the last applied registry version.
//! - Migrations create schema only; grocery rows come from `db::seed`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::{Connection, TransactionBehavior};

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_grocery_list_item.sql"),
}];

/// Schema version this binary migrates grocery databases to.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Reads the schema version recorded in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Brings the grocery schema up to [`latest_version`].
///
/// Returns `UnsupportedSchemaVersion` for a file written by a newer binary.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let latest = latest_version();
    // Lock-free fast path for the common, already-migrated case.
    if check_version(current_user_version(conn)?, latest)? {
        return Ok(());
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let from_version = current_user_version(&tx)?;
    if check_version(from_version, latest)? {
        // Another connection migrated while this one waited for the lock.
        return Ok(());
    }

    for migration in MIGRATIONS.iter().filter(|m| m.version > from_version) {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={from_version} to_version={latest}");
    Ok(())
}

/// `Ok(true)` when up to date, `Ok(false)` when migrations are pending.
fn check_version(db_version: u32, latest: u32) -> DbResult<bool> {
    if db_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: latest,
        });
    }
    Ok(db_version == latest)
}
