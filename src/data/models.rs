//! Data models for recipes and their persisted form

use serde::{Deserialize, Serialize};

/// Creation-time timestamp (milliseconds) identifying a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub i64);

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecipeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RecipeId)
    }
}

/// A named list of ingredients plus preparation instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Creation-time identifier
    pub id: RecipeId,
    /// Human-readable stamp from the clock at the last create/update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,
    /// Display name
    pub name: String,
    /// Ordered ingredient list
    pub ingredients: Vec<String>,
    /// Free-form preparation text
    pub instructions: String,
}

impl Recipe {
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id,
            display_id: None,
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
        }
    }

    pub fn with_display_id(mut self, stamp: impl Into<String>) -> Self {
        self.display_id = Some(stamp.into());
        self
    }

    /// Ingredients joined the way the form shows them
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// Current version of the durable slot layout.
pub const RECIPES_SCHEMA_VERSION: u32 = 1;

/// Versioned envelope written to the durable slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecipes {
    pub version: u32,
    pub recipes: Vec<Recipe>,
}

impl StoredRecipes {
    pub fn current(recipes: &[Recipe]) -> Self {
        Self {
            version: RECIPES_SCHEMA_VERSION,
            recipes: recipes.to_vec(),
        }
    }
}
