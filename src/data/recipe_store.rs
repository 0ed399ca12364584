//! In-memory recipe store with change subscriptions

use super::models::{Recipe, RecipeId};

/// What changed in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// A recipe was appended
    Added(RecipeId),
    /// One or more recipes with this id were removed
    Removed { id: RecipeId, count: usize },
    /// A recipe was replaced in place
    Updated(RecipeId),
    /// A batch of recipes was appended at once
    Extended(usize),
}

/// Handle returned by [`RecipeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StoreChange, &[Recipe]) + Send>;

/// Ordered collection of recipes.
///
/// Every mutation that changes the contents notifies observers with the
/// change and the full list as it stands afterwards.
#[derive(Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer called after every change
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &[Recipe]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Append a recipe. No validation, no dedup.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        let id = recipe.id;
        self.recipes.push(recipe);
        self.notify(StoreChange::Added(id));
    }

    /// Remove every recipe with `id`. Unknown ids are a silent no-op.
    pub fn remove_recipe(&mut self, id: RecipeId) -> usize {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| recipe.id != id);
        let count = before - self.recipes.len();
        if count > 0 {
            self.notify(StoreChange::Removed { id, count });
        }
        count
    }

    /// Replace the first recipe sharing `recipe.id`, keeping its position.
    pub fn update_recipe(&mut self, recipe: Recipe) -> bool {
        let id = recipe.id;
        let Some(slot) = self.recipes.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        *slot = recipe;
        self.notify(StoreChange::Updated(id));
        true
    }

    /// Append many recipes with a single notification
    pub fn extend(&mut self, recipes: impl IntoIterator<Item = Recipe>) {
        let before = self.recipes.len();
        self.recipes.extend(recipes);
        let added = self.recipes.len() - before;
        if added > 0 {
            self.notify(StoreChange::Extended(added));
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn notify(&mut self, change: StoreChange) {
        tracing::trace!(?change, len = self.recipes.len(), "Recipe store changed");
        for (_, observer) in self.observers.iter_mut() {
            observer(&change, &self.recipes);
        }
    }
}

impl std::fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore")
            .field("recipes", &self.recipes)
            .field("observers", &self.observers.len())
            .finish()
    }
}
