mod global_footer;
mod header;
mod key_hints;
mod recipe_form;
mod recipe_list;
mod status_line;
mod text_input;
pub mod theme;

pub use global_footer::{FooterContext, GlobalFooter};
pub use header::{Header, APP_TITLE};
pub use key_hints::{key_hint_line, render_key_hints, KeyHintBarStyle};
pub use recipe_form::{RecipeForm, RecipeFormState, FORM_MIN_HEIGHT};
pub use recipe_list::{RecipeList, RecipeListState};
pub use status_line::{StatusKind, StatusLine, StatusMessage};
pub use text_input::TextInputState;
