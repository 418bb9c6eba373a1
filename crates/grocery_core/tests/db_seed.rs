use grocery_core::db::{open_db, open_db_in_memory, seed_demo_items, SeedOutcome, SEED_ITEMS};
use grocery_core::{GroceryListItemRepository, NewGroceryListItem, SqliteGroceryListItemRepository};

#[test]
fn seeding_empty_table_inserts_all_demo_rows_in_order() {
    let mut conn = open_db_in_memory().unwrap();

    let outcome = seed_demo_items(&mut conn).unwrap();
    assert_eq!(outcome, SeedOutcome::Inserted(SEED_ITEMS.len()));

    let repo = SqliteGroceryListItemRepository::try_new(&conn).unwrap();
    let payloads: Vec<NewGroceryListItem> = repo
        .get_all()
        .unwrap()
        .iter()
        .map(|item| item.payload())
        .collect();
    assert_eq!(payloads, SEED_ITEMS.to_vec());
}

#[test]
fn seeding_twice_does_not_duplicate_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seeded.db");

    let mut conn = open_db(&path).unwrap();
    seed_demo_items(&mut conn).unwrap();
    drop(conn);

    let mut conn = open_db(&path).unwrap();
    assert_eq!(
        seed_demo_items(&mut conn).unwrap(),
        SeedOutcome::AlreadyPopulated
    );

    let repo = SqliteGroceryListItemRepository::try_new(&conn).unwrap();
    assert_eq!(repo.get_all().unwrap().len(), 5);
}

#[test]
fn seeding_skips_table_with_existing_rows() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteGroceryListItemRepository::try_new(&conn).unwrap();
        repo.add(NewGroceryListItem::new(9, 9, 9)).unwrap();
    }

    assert_eq!(
        seed_demo_items(&mut conn).unwrap(),
        SeedOutcome::AlreadyPopulated
    );

    let repo = SqliteGroceryListItemRepository::try_new(&conn).unwrap();
    assert_eq!(repo.get_all().unwrap().len(), 1);
}
