//! Rendering the full screen into a TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use recipe_book::{App, Config, MemorySlot, RecipeBook, RecipeDraft, Stamp};

use super::common::fixtures::{fixed_ticker, FIXED_DISPLAY};
use super::common::terminal::{buffer_contains, render_app, row_of};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn book_with_tea() -> RecipeBook {
    let mut book = RecipeBook::open(MemorySlot::new(), &Config::default());
    book.submit(
        RecipeDraft::new("Tea", "water, tea leaves", "Boil."),
        Stamp::new(1, FIXED_DISPLAY),
    )
    .unwrap();
    book
}

#[tokio::test(start_paused = true)]
async fn test_header_shows_title_and_clock() {
    let mut app = App::new(RecipeBook::open(MemorySlot::new(), &Config::default()), fixed_ticker());
    let buffer = render_app(&mut app, 100, 30);

    assert_eq!(row_of(&buffer, "Recipe Book"), Some(0));
    assert_eq!(row_of(&buffer, FIXED_DISPLAY), Some(0));
    assert!(buffer_contains(&buffer, "No recipes yet"));
    assert!(buffer_contains(&buffer, "[ Add Recipe ]"));
}

#[tokio::test(start_paused = true)]
async fn test_recipe_card_lists_ingredients_and_stamp() {
    let mut app = App::new(book_with_tea(), fixed_ticker());
    let buffer = render_app(&mut app, 100, 30);

    assert!(buffer_contains(&buffer, "Tea"));
    assert!(buffer_contains(&buffer, "Ingredients: water, tea leaves"));
    assert!(buffer_contains(
        &buffer,
        &format!("-- Updated {FIXED_DISPLAY} --")
    ));
}

#[tokio::test(start_paused = true)]
async fn test_validation_message_is_rendered() {
    let mut app = App::new(RecipeBook::open(MemorySlot::new(), &Config::default()), fixed_ticker());
    press(&mut app, KeyCode::Enter);

    let buffer = render_app(&mut app, 100, 30);
    assert!(buffer_contains(&buffer, "Recipe Name is required"));
}

#[tokio::test(start_paused = true)]
async fn test_editing_switches_labels() {
    let mut app = App::new(book_with_tea(), fixed_ticker());
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Char('e'));

    let buffer = render_app(&mut app, 100, 30);
    assert!(buffer_contains(&buffer, "[ Update Recipe ]"));
    assert!(buffer_contains(&buffer, "(editing)"));
    assert!(buffer_contains(&buffer, "cancel edit"));
}

#[tokio::test(start_paused = true)]
async fn test_narrow_terminal_stacks_form_above_list() {
    let mut app = App::new(book_with_tea(), fixed_ticker());
    let buffer = render_app(&mut app, 60, 40);

    let form_row = row_of(&buffer, "Recipe Name").expect("form rendered");
    let list_row = row_of(&buffer, "Recipes ").expect("list rendered");
    assert!(form_row < list_row);
}
