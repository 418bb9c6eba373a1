//! CLI smoke entry point.
//!
//! # Responsibility
//! - Bootstrap logging and the grocery database from `GROCERY_*` settings.
//! - Print the seeded grocery lists for a quick local sanity check.

use grocery_core::db::{open_db, seed_demo_items, SeedOutcome};
use grocery_core::{CoreConfig, GroceryListItemRepository, GroceryListItemStore};
use log::info;
use std::process::ExitCode;

const PROBE_LIST_IDS: [i64; 2] = [1, 2];

fn main() -> ExitCode {
    println!("grocery_core ping={}", grocery_core::ping());
    println!("grocery_core version={}", grocery_core::core_version());

    match run(&CoreConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("grocery_cli failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    grocery_core::init_logging(&config.log_level, &config.log_dir)?;

    let mut conn = open_db(&config.db_path)?;
    match seed_demo_items(&mut conn)? {
        SeedOutcome::Inserted(rows) => println!("seeded rows={rows}"),
        SeedOutcome::AlreadyPopulated => println!("seed skipped; table already populated"),
    }
    drop(conn);

    let store = GroceryListItemStore::new(&config.db_path);
    for list_id in PROBE_LIST_IDS {
        let items = store.get_all_on_grocery_list_id(list_id)?;
        info!(
            "event=cli_probe module=cli status=ok grocery_list_id={list_id} items={}",
            items.len()
        );
        println!("grocery_list={list_id} items={}", items.len());
        for item in items {
            println!(
                "  id={} product={} amount={}",
                item.id, item.product_id, item.amount
            );
        }
    }

    Ok(())
}
