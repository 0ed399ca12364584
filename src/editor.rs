//! Add/edit flow for recipes
//!
//! ```text
//!   Idle ──submit──────────────▶ Idle      (append new recipe)
//!   Idle ──begin_edit(R)───────▶ Editing(R)
//!   Editing(R) ──submit────────▶ Idle      (replace R, or update in place)
//!   Editing(R) ──cancel────────▶ Idle      (store untouched)
//! ```
//!
//! Invalid drafts leave both the store and the state where they were.

use thiserror::Error;

use crate::clock::Clock;
use crate::config::EditMode;
use crate::data::{IdAllocator, Recipe, RecipeId, RecipeStore};

/// Form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Ingredients,
    Instructions,
}

impl FormField {
    pub const ALL: [FormField; 3] = [
        FormField::Name,
        FormField::Ingredients,
        FormField::Instructions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Recipe Name",
            FormField::Ingredients => "Ingredients (comma separated)",
            FormField::Instructions => "Instructions",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),
}

/// Split comma-separated ingredients, trimming each piece.
///
/// Empty pieces between consecutive commas are kept.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// Raw text of the three form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeDraft {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }

    /// Prefill from an existing recipe
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients_text(),
            instructions: recipe.instructions.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Ingredients => &self.ingredients,
            FormField::Instructions => &self.instructions,
        }
    }

    /// Every field must be non-empty. Whitespace counts as content.
    pub fn validate(&self) -> Result<(), FormError> {
        match FormField::ALL
            .into_iter()
            .find(|field| self.field(*field).is_empty())
        {
            Some(field) => Err(FormError::MissingField(field)),
            None => Ok(()),
        }
    }

    fn into_recipe(self, id: RecipeId, display_id: String) -> Recipe {
        Recipe::new(
            id,
            self.name,
            parse_ingredients(&self.ingredients),
            self.instructions,
        )
        .with_display_id(display_id)
    }
}

/// Time of a submission: millisecond timestamp for the id, text for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub now_ms: i64,
    pub display: String,
}

impl Stamp {
    pub fn new(now_ms: i64, display: impl Into<String>) -> Self {
        Self {
            now_ms,
            display: display.into(),
        }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            now_ms: now.timestamp_millis(),
            display: crate::clock::format_display_time(&now),
        }
    }
}

/// Editing state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(Recipe),
}

/// What a successful submit did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(RecipeId),
    Replaced { old: RecipeId, new: RecipeId },
    Updated(RecipeId),
}

impl SubmitOutcome {
    /// Id of the recipe now holding the submitted fields
    pub fn id(&self) -> RecipeId {
        match self {
            SubmitOutcome::Added(id) | SubmitOutcome::Updated(id) => *id,
            SubmitOutcome::Replaced { new, .. } => *new,
        }
    }
}

/// Drives add/edit against a [`RecipeStore`]
#[derive(Debug, Clone, Default)]
pub struct RecipeEditor {
    state: EditState,
    edit_mode: EditMode,
    ids: IdAllocator,
}

impl RecipeEditor {
    pub fn new(edit_mode: EditMode) -> Self {
        Self {
            state: EditState::Idle,
            edit_mode,
            ids: IdAllocator::new(),
        }
    }

    /// Make sure new ids sort after everything already in `store`
    pub fn observe_store(&mut self, store: &RecipeStore) {
        for recipe in store.recipes() {
            self.ids.observe(recipe.id);
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn editing(&self) -> Option<&Recipe> {
        match &self.state {
            EditState::Editing(recipe) => Some(recipe),
            EditState::Idle => None,
        }
    }

    /// Start editing `recipe`; returns the prefilled draft
    pub fn begin_edit(&mut self, recipe: &Recipe) -> RecipeDraft {
        tracing::debug!(id = %recipe.id, "Editing recipe");
        self.state = EditState::Editing(recipe.clone());
        RecipeDraft::from_recipe(recipe)
    }

    /// Drop any edit in progress without touching the store
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }

    /// Add (when idle) or apply the edit (when editing).
    pub fn submit(
        &mut self,
        draft: RecipeDraft,
        store: &mut RecipeStore,
        stamp: Stamp,
    ) -> Result<SubmitOutcome, FormError> {
        draft.validate()?;

        let outcome = match std::mem::take(&mut self.state) {
            EditState::Idle => {
                let id = self.ids.next(stamp.now_ms);
                store.add_recipe(draft.into_recipe(id, stamp.display));
                SubmitOutcome::Added(id)
            }
            EditState::Editing(original) => match self.edit_mode {
                EditMode::Replace => {
                    let id = self.ids.next(stamp.now_ms);
                    store.remove_recipe(original.id);
                    store.add_recipe(draft.into_recipe(id, stamp.display));
                    SubmitOutcome::Replaced {
                        old: original.id,
                        new: id,
                    }
                }
                EditMode::InPlace => {
                    let updated = draft.into_recipe(original.id, stamp.display);
                    if store.update_recipe(updated.clone()) {
                        SubmitOutcome::Updated(original.id)
                    } else {
                        // Deleted while being edited; bring it back at the end
                        store.add_recipe(updated);
                        SubmitOutcome::Added(original.id)
                    }
                }
            },
        };

        tracing::info!(?outcome, "Recipe saved");
        Ok(outcome)
    }
}
