pub mod book;
pub mod clock;
pub mod config;
pub mod data;
pub mod editor;
pub mod ui;
pub mod util;

pub use book::RecipeBook;
pub use clock::{Clock, ClockTicker, ManualClock, SystemClock};
pub use config::{Config, EditMode};
pub use data::{
    Database, DurableSlot, MemorySlot, Recipe, RecipeId, RecipeStore, SqliteSlot, StoreChange,
};
pub use editor::{FormError, FormField, RecipeDraft, RecipeEditor, Stamp, SubmitOutcome};
pub use ui::App;
