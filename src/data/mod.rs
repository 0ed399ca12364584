//! Data layer for the recipe book
//!
//! The recipe store lives in memory; a durable key-value slot (SQLite by
//! default) mirrors it through the persistence bridge.

mod app_state;
mod database;
mod ids;
mod migrations;
mod models;
mod persistence;
mod recipe_store;

pub use app_state::{DurableSlot, MemorySlot, SlotError, SqliteSlot};
pub use database::{Database, DatabaseError};
pub use ids::IdAllocator;
pub use models::{Recipe, RecipeId, StoredRecipes, RECIPES_SCHEMA_VERSION};
pub use persistence::{
    decode_recipes, encode_recipes, DecodedRecipes, LoadOutcome, PersistError,
    PersistenceBridge, DEFAULT_RECIPES_KEY,
};
pub use recipe_store::{RecipeStore, StoreChange, SubscriptionId};
