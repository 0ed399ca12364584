//! Add, edit, and remove through the recipe book

use recipe_book::{
    Config, EditMode, MemorySlot, RecipeBook, RecipeDraft, RecipeId, Stamp, SubmitOutcome,
};

fn stamp(ms: i64) -> Stamp {
    Stamp::new(ms, super::common::fixtures::FIXED_DISPLAY)
}

/// Add then edit in the same millisecond still yields a fresh id
#[test]
fn test_tea_becomes_iced_tea_with_new_id() {
    let mut book = RecipeBook::open(MemorySlot::new(), &Config::default());

    let added = book
        .submit(RecipeDraft::new("Tea", "water, tea leaves", "Boil."), stamp(1_000))
        .expect("valid draft");
    let original = added.id();
    assert_eq!(book.recipes()[0].ingredients, vec!["water", "tea leaves"]);

    let mut draft = book.begin_edit(original).expect("recipe exists");
    assert_eq!(draft.ingredients, "water, tea leaves");
    draft.name = "Iced Tea".into();

    let outcome = book.submit(draft, stamp(1_000)).expect("valid draft");
    assert!(matches!(outcome, SubmitOutcome::Replaced { old, .. } if old == original));

    assert_eq!(book.recipes().len(), 1);
    assert_eq!(book.recipes()[0].name, "Iced Tea");
    assert_ne!(book.recipes()[0].id, original);
}

#[test]
fn test_replace_moves_edited_recipe_to_end() {
    let mut book = RecipeBook::open(MemorySlot::new(), &Config::default());
    let first = book
        .submit(RecipeDraft::new("A", "x", "y"), stamp(1))
        .unwrap()
        .id();
    book.submit(RecipeDraft::new("B", "x", "y"), stamp(2)).unwrap();

    let draft = book.begin_edit(first).unwrap();
    book.submit(draft, stamp(3)).unwrap();

    let names: Vec<_> = book.recipes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_in_place_keeps_position_and_id() {
    let config = Config::default().with_edit_mode(EditMode::InPlace);
    let mut book = RecipeBook::open(MemorySlot::new(), &config);
    let first = book
        .submit(RecipeDraft::new("A", "x", "y"), stamp(1))
        .unwrap()
        .id();
    book.submit(RecipeDraft::new("B", "x", "y"), stamp(2)).unwrap();

    let mut draft = book.begin_edit(first).unwrap();
    draft.instructions = "z".into();
    book.submit(draft, stamp(3)).unwrap();

    assert_eq!(book.recipes()[0].id, first);
    assert_eq!(book.recipes()[0].instructions, "z");
}

#[test]
fn test_invalid_draft_changes_nothing() {
    let mut book = RecipeBook::open(MemorySlot::new(), &Config::default());
    let id = book
        .submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(1))
        .unwrap()
        .id();
    let _ = book.begin_edit(id).unwrap();

    let err = book
        .submit(RecipeDraft::new("", "water", "Boil."), stamp(2))
        .unwrap_err();
    assert_eq!(err.to_string(), "Recipe Name is required");

    assert_eq!(book.recipes().len(), 1);
    assert_eq!(book.recipes()[0].id, id);
    assert!(book.editing().is_some());
}

#[test]
fn test_remove_unknown_id_is_a_no_op() {
    let mut book = RecipeBook::open(MemorySlot::new(), &Config::default());
    book.submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(1)).unwrap();

    assert_eq!(book.remove(RecipeId(42)), 0);
    assert_eq!(book.recipes().len(), 1);
}

#[test]
fn test_empty_ingredient_pieces_are_kept() {
    let mut book = RecipeBook::open(MemorySlot::new(), &Config::default());
    book.submit(RecipeDraft::new("Odd", "egg,, flour ,", "Mix."), stamp(1))
        .unwrap();
    assert_eq!(book.recipes()[0].ingredients, vec!["egg", "", "flour", ""]);
}
