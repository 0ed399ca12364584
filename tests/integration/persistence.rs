//! Recipes surviving restarts through the SQLite-backed slot

use recipe_book::data::{encode_recipes, LoadOutcome, DEFAULT_RECIPES_KEY};
use recipe_book::{Config, DurableSlot, Recipe, RecipeBook, RecipeDraft, RecipeId, Stamp};

use super::common::fixtures::{TestStore, FIXED_DISPLAY};

fn stamp(ms: i64) -> Stamp {
    Stamp::new(ms, FIXED_DISPLAY)
}

#[test]
fn test_recipes_survive_reopen() {
    let store = TestStore::new();
    {
        let mut book = RecipeBook::open(store.slot(), &Config::default());
        book.submit(RecipeDraft::new("Tea", "water, tea leaves", "Boil."), stamp(1))
            .unwrap();
        book.submit(RecipeDraft::new("Toast", "bread", "Toast it."), stamp(2))
            .unwrap();
    }

    let book = RecipeBook::open(store.reopen(), &Config::default());
    assert_eq!(
        book.load_outcome(),
        &LoadOutcome::Loaded {
            count: 2,
            legacy: false
        }
    );
    let names: Vec<_> = book.recipes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Tea", "Toast"]);
    assert_eq!(book.recipes()[0].display_id.as_deref(), Some(FIXED_DISPLAY));
}

#[test]
fn test_slot_holds_versioned_camel_case_json() {
    let store = TestStore::new();
    let mut book = RecipeBook::open(store.slot(), &Config::default());
    book.submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(1))
        .unwrap();

    let raw = store.slot().read(DEFAULT_RECIPES_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["recipes"][0]["name"], "Tea");
    assert_eq!(json["recipes"][0]["displayId"], FIXED_DISPLAY);
}

#[test]
fn test_removal_is_persisted() {
    let store = TestStore::new();
    let mut book = RecipeBook::open(store.slot(), &Config::default());
    let id = book
        .submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(1))
        .unwrap()
        .id();
    book.remove(id);

    let reopened = RecipeBook::open(store.reopen(), &Config::default());
    assert!(reopened.recipes().is_empty());
}

#[test]
fn test_legacy_array_is_loaded_and_upgraded() {
    let store = TestStore::new();
    store
        .slot()
        .write(
            DEFAULT_RECIPES_KEY,
            r#"[{"id":1700000000000,"name":"Tea","ingredients":["water"],"instructions":"Boil."}]"#,
        )
        .unwrap();

    let mut book = RecipeBook::open(store.slot(), &Config::default());
    assert_eq!(
        book.load_outcome(),
        &LoadOutcome::Loaded {
            count: 1,
            legacy: true
        }
    );
    assert_eq!(book.recipes()[0].display_id, None);

    // The next change rewrites the slot in the versioned layout
    book.submit(RecipeDraft::new("Toast", "bread", "Toast it."), stamp(1_800_000_000_000))
        .unwrap();
    let raw = store.slot().read(DEFAULT_RECIPES_KEY).unwrap().unwrap();
    assert!(raw.starts_with(r#"{"version":1"#));
}

#[test]
fn test_corrupt_slot_is_backed_up_and_book_starts_empty() {
    let store = TestStore::new();
    store.slot().write(DEFAULT_RECIPES_KEY, "{not json").unwrap();

    let book = RecipeBook::open(store.slot(), &Config::default());
    match book.load_outcome() {
        LoadOutcome::Recovered { backup_key, .. } => {
            assert_eq!(backup_key.as_deref(), Some("recipes.corrupt"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(book.recipes().is_empty());
    assert_eq!(
        store.slot().read("recipes.corrupt").unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn test_newer_schema_is_not_loaded() {
    let store = TestStore::new();
    store
        .slot()
        .write(DEFAULT_RECIPES_KEY, r#"{"version":2,"recipes":[]}"#)
        .unwrap();

    let book = RecipeBook::open(store.slot(), &Config::default());
    match book.load_outcome() {
        LoadOutcome::Recovered { error, backup_key } => {
            assert!(error.contains("version 2"));
            assert_eq!(backup_key.as_deref(), Some("recipes.corrupt"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        store.slot().read("recipes.corrupt").unwrap().as_deref(),
        Some(r#"{"version":2,"recipes":[]}"#)
    );
}

#[test]
fn test_binary_slot_value_is_backed_up_before_first_save() {
    let store = TestStore::new();
    let conn = store.db.connection();
    conn.lock()
        .execute(
            "INSERT INTO app_state (key, value, updated_at) VALUES ('recipes', X'5B7B22FF', 'now')",
            [],
        )
        .unwrap();

    let mut book = RecipeBook::open(store.slot(), &Config::default());
    match book.load_outcome() {
        LoadOutcome::Recovered { backup_key, .. } => {
            assert_eq!(backup_key.as_deref(), Some("recipes.corrupt"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    book.submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(1))
        .unwrap();

    let (kind, hex): (String, String) = conn
        .lock()
        .query_row(
            "SELECT typeof(value), hex(value) FROM app_state WHERE key = 'recipes.corrupt'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(kind, "blob");
    assert_eq!(hex, "5B7B22FF");

    let reopened = RecipeBook::open(store.reopen(), &Config::default());
    assert_eq!(reopened.recipes()[0].name, "Tea");
}

#[test]
fn test_custom_storage_key() {
    let store = TestStore::new();
    let config = Config::default().with_storage_key("cookbook");
    let recipe = Recipe::new(RecipeId(5), "Soup", vec!["water".into()], "Simmer.");
    store
        .slot()
        .write("cookbook", &encode_recipes(&[recipe.clone()]).unwrap())
        .unwrap();

    let book = RecipeBook::open(store.slot(), &config);
    assert_eq!(book.recipes(), &[recipe]);
    assert_eq!(store.slot().read(DEFAULT_RECIPES_KEY).unwrap(), None);
}
