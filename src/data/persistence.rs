//! Keeps a durable slot in sync with the recipe store
//!
//! The slot is read once at startup and rewritten in full after every store
//! change. Layout:
//!
//! ```json
//! {"version": 1, "recipes": [{"id": 1700000000000, "displayId": "...", ...}]}
//! ```
//!
//! A bare array of recipes (no envelope) is still accepted on read.

use serde_json::Value;
use thiserror::Error;

use super::app_state::{DurableSlot, SlotError};
use super::models::{Recipe, StoredRecipes, RECIPES_SCHEMA_VERSION};
use super::recipe_store::{RecipeStore, SubscriptionId};

/// Default slot key holding the recipe list
pub const DEFAULT_RECIPES_KEY: &str = "recipes";

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Storage error: {0}")]
    Slot(#[from] SlotError),
    #[error("Malformed recipe data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unexpected recipe data shape: {0}")]
    Shape(&'static str),
    #[error("Unsupported recipe data version {found} (supported: {supported})")]
    UnsupportedVersion { found: u64, supported: u32 },
}

/// Decoded slot contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecipes {
    pub recipes: Vec<Recipe>,
    /// True when the slot held the unversioned array layout
    pub legacy: bool,
}

/// Result of replaying the slot into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet
    Empty,
    /// Recipes were appended to the store
    Loaded { count: usize, legacy: bool },
    /// Stored data was unusable; the store was left untouched
    Recovered {
        error: String,
        /// Where the unreadable contents were copied; `None` when nothing was stored
        backup_key: Option<String>,
    },
    /// The slot could not be read or backed up; it must not be overwritten
    Unavailable { error: String },
}

impl LoadOutcome {
    /// Whether later changes may be written back to the slot
    pub fn is_writable(&self) -> bool {
        !matches!(self, LoadOutcome::Unavailable { .. })
    }
}

/// Parse slot contents, validating the shape before building recipes.
pub fn decode_recipes(raw: &str) -> Result<DecodedRecipes, PersistError> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Array(_) => Ok(DecodedRecipes {
            recipes: serde_json::from_value(value)?,
            legacy: true,
        }),
        Value::Object(ref map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or(PersistError::Shape("missing numeric `version`"))?;
            if version > u64::from(RECIPES_SCHEMA_VERSION) {
                return Err(PersistError::UnsupportedVersion {
                    found: version,
                    supported: RECIPES_SCHEMA_VERSION,
                });
            }
            let stored: StoredRecipes = serde_json::from_value(value)?;
            Ok(DecodedRecipes {
                recipes: stored.recipes,
                legacy: false,
            })
        }
        _ => Err(PersistError::Shape("expected an array or an object")),
    }
}

/// Serialize recipes in the current versioned layout.
pub fn encode_recipes(recipes: &[Recipe]) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&StoredRecipes::current(recipes))?)
}

/// Bridge between a [`DurableSlot`] and a [`RecipeStore`]
pub struct PersistenceBridge {
    slot: Box<dyn DurableSlot>,
    key: String,
}

impl PersistenceBridge {
    pub fn new(slot: impl DurableSlot + 'static, key: impl Into<String>) -> Self {
        Self {
            slot: Box::new(slot),
            key: key.into(),
        }
    }

    /// Key that receives unreadable slot contents before they are overwritten
    pub fn backup_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    /// Replay stored recipes into `store` in one batch.
    ///
    /// Unreadable data is copied to [`Self::backup_key`] and the store is left
    /// as it was, so startup always succeeds. When no copy can be made the
    /// outcome is [`LoadOutcome::Unavailable`] and the slot must be left alone.
    pub fn load(&self, store: &mut RecipeStore) -> LoadOutcome {
        let raw = match self.slot.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Empty,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read recipe slot");
                return self.recover(e.to_string(), |backup_key| {
                    self.slot.backup(&self.key, backup_key)
                });
            }
        };

        match decode_recipes(&raw) {
            Ok(decoded) => {
                let count = decoded.recipes.len();
                store.extend(decoded.recipes);
                tracing::info!(
                    key = %self.key,
                    count,
                    legacy = decoded.legacy,
                    "Loaded recipes"
                );
                LoadOutcome::Loaded {
                    count,
                    legacy: decoded.legacy,
                }
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored recipes are unreadable");
                self.recover(e.to_string(), |backup_key| {
                    self.slot.write(backup_key, &raw).map(|()| true)
                })
            }
        }
    }

    fn recover(
        &self,
        error: String,
        copy: impl FnOnce(&str) -> Result<bool, SlotError>,
    ) -> LoadOutcome {
        let backup_key = self.backup_key();
        match copy(&backup_key) {
            Ok(true) => {
                tracing::warn!(backup_key = %backup_key, "Backed up unreadable recipes, starting empty");
                LoadOutcome::Recovered {
                    error,
                    backup_key: Some(backup_key),
                }
            }
            Ok(false) => LoadOutcome::Recovered {
                error,
                backup_key: None,
            },
            Err(backup_err) => {
                tracing::error!(
                    key = %self.key,
                    backup_key = %backup_key,
                    error = %backup_err,
                    "Failed to back up unreadable recipes, changes will not be saved"
                );
                LoadOutcome::Unavailable { error }
            }
        }
    }

    /// Overwrite the slot with `recipes`
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), PersistError> {
        let encoded = encode_recipes(recipes)?;
        self.slot.write(&self.key, &encoded)?;
        Ok(())
    }

    /// Move the bridge into a store subscription that saves after each change.
    ///
    /// Call after [`Self::load`] so the initial replay does not write back.
    pub fn attach(self, store: &mut RecipeStore) -> SubscriptionId {
        store.subscribe(move |change, recipes| {
            if let Err(e) = self.save(recipes) {
                tracing::warn!(
                    key = %self.key,
                    ?change,
                    error = %e,
                    "Failed to persist recipes"
                );
            } else {
                tracing::debug!(key = %self.key, count = recipes.len(), "Persisted recipes");
            }
        })
    }
}
