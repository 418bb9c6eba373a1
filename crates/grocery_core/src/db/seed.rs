//! Demo seed data for the `GroceryListItem` table.
//!
//! # Responsibility
//! - Insert the fixed demo rows once, as an explicit startup step.
//!
//! # Invariants
//! - Seeding only touches an empty table, so repeated calls never duplicate rows.
//! - All seed rows are inserted in one immediate transaction or not at all.

use super::DbResult;
use crate::model::grocery_list_item::NewGroceryListItem;
use log::info;
use rusqlite::{params, Connection, TransactionBehavior};

/// Fixed demo rows inserted into an empty table.
pub const SEED_ITEMS: [NewGroceryListItem; 5] = [
    NewGroceryListItem::new(1, 1, 3),
    NewGroceryListItem::new(1, 2, 1),
    NewGroceryListItem::new(1, 3, 4),
    NewGroceryListItem::new(2, 1, 2),
    NewGroceryListItem::new(2, 2, 5),
];

/// Result of one seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and this many rows were written.
    Inserted(usize),
    /// The table already had rows; nothing was written.
    AlreadyPopulated,
}

/// Seeds the demo grocery list items when the table is empty.
///
/// The emptiness check and the inserts share one `IMMEDIATE` transaction, so
/// two processes seeding the same file cannot both observe an empty table.
pub fn seed_demo_items(conn: &mut Connection) -> DbResult<SeedOutcome> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let existing: i64 = tx.query_row("SELECT COUNT(*) FROM GroceryListItem;", [], |row| {
        row.get(0)
    })?;
    if existing > 0 {
        info!("event=db_seed module=db status=skipped existing_rows={existing}");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    {
        let mut stmt = tx.prepare(
            "INSERT INTO GroceryListItem (GroceryListId, ProductId, Amount)
             VALUES (?1, ?2, ?3);",
        )?;
        for item in &SEED_ITEMS {
            stmt.execute(params![item.grocery_list_id, item.product_id, item.amount])?;
        }
    }
    tx.commit()?;

    info!(
        "event=db_seed module=db status=ok inserted_rows={}",
        SEED_ITEMS.len()
    );
    Ok(SeedOutcome::Inserted(SEED_ITEMS.len()))
}
