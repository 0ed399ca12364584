//! Recipe book: the store, its persistence, and the add/edit flow in one place

use crate::config::Config;
use crate::data::{
    DurableSlot, LoadOutcome, PersistenceBridge, Recipe, RecipeId, RecipeStore, StoreChange,
    SubscriptionId,
};
use crate::editor::{FormError, RecipeDraft, RecipeEditor, Stamp, SubmitOutcome};

/// Owns the recipe store and keeps it mirrored into a durable slot
pub struct RecipeBook {
    store: RecipeStore,
    editor: RecipeEditor,
    load_outcome: LoadOutcome,
}

impl RecipeBook {
    /// Load recipes from `slot` and persist every later change back to it.
    ///
    /// A slot that could not be read or backed up is never written; the book
    /// then works in memory only.
    pub fn open(slot: impl DurableSlot + 'static, config: &Config) -> Self {
        let bridge = PersistenceBridge::new(slot, config.storage_key.clone());
        let mut store = RecipeStore::new();
        let load_outcome = bridge.load(&mut store);
        if load_outcome.is_writable() {
            bridge.attach(&mut store);
        } else {
            tracing::warn!(key = %config.storage_key, "Recipe slot left untouched for this session");
        }

        let mut editor = RecipeEditor::new(config.edit_mode);
        editor.observe_store(&store);

        Self {
            store,
            editor,
            load_outcome,
        }
    }

    /// A book with no durable backing
    pub fn in_memory(config: &Config) -> Self {
        Self {
            store: RecipeStore::new(),
            editor: RecipeEditor::new(config.edit_mode),
            load_outcome: LoadOutcome::Empty,
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.store.recipes()
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn editor(&self) -> &RecipeEditor {
        &self.editor
    }

    pub fn editing(&self) -> Option<&Recipe> {
        self.editor.editing()
    }

    /// Observe store changes (e.g. to schedule a redraw)
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &[Recipe]) + Send + 'static,
    {
        self.store.subscribe(observer)
    }

    /// Add a new recipe or apply the edit in progress
    pub fn submit(&mut self, draft: RecipeDraft, stamp: Stamp) -> Result<SubmitOutcome, FormError> {
        self.editor.submit(draft, &mut self.store, stamp)
    }

    /// Start editing the recipe with `id`; returns the prefilled draft
    pub fn begin_edit(&mut self, id: RecipeId) -> Option<RecipeDraft> {
        let recipe = self.store.get(id)?.clone();
        Some(self.editor.begin_edit(&recipe))
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Remove by id; unknown ids are ignored
    pub fn remove(&mut self, id: RecipeId) -> usize {
        let removed = self.store.remove_recipe(id);
        if removed == 0 {
            tracing::debug!(%id, "Remove ignored, no recipe with that id");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditMode;
    use crate::data::{decode_recipes, MemorySlot, SlotError, DEFAULT_RECIPES_KEY};

    fn stamp(ms: i64) -> Stamp {
        Stamp::new(ms, "5, March 2024 - 9:7:3")
    }

    fn stored(slot: &MemorySlot) -> Vec<Recipe> {
        let raw = slot.read(DEFAULT_RECIPES_KEY).unwrap().unwrap();
        decode_recipes(&raw).unwrap().recipes
    }

    #[test]
    fn test_changes_reach_the_slot() {
        let slot = MemorySlot::new();
        let mut book = RecipeBook::open(slot.clone(), &Config::default());
        assert_eq!(book.load_outcome(), &LoadOutcome::Empty);

        let id = book
            .submit(RecipeDraft::new("Tea", "water, tea leaves", "Boil."), stamp(10))
            .unwrap()
            .id();
        assert_eq!(stored(&slot).len(), 1);

        book.remove(id);
        assert!(stored(&slot).is_empty());
    }

    #[test]
    fn test_reopen_restores_recipes_in_order() {
        let slot = MemorySlot::new();
        {
            let mut book = RecipeBook::open(slot.clone(), &Config::default());
            book.submit(RecipeDraft::new("A", "x", "y"), stamp(1)).unwrap();
            book.submit(RecipeDraft::new("B", "x", "y"), stamp(2)).unwrap();
        }

        let book = RecipeBook::open(slot, &Config::default());
        let names: Vec<_> = book.recipes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(
            book.load_outcome(),
            &LoadOutcome::Loaded {
                count: 2,
                legacy: false
            }
        );
    }

    #[test]
    fn test_edit_flow_respects_configured_mode() {
        let config = Config::default().with_edit_mode(EditMode::InPlace);
        let mut book = RecipeBook::open(MemorySlot::new(), &config);
        let id = book
            .submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(1))
            .unwrap()
            .id();

        let mut draft = book.begin_edit(id).unwrap();
        draft.name = "Iced Tea".into();
        book.submit(draft, stamp(2)).unwrap();

        assert_eq!(book.recipes()[0].id, id);
        assert_eq!(book.recipes()[0].name, "Iced Tea");
        assert!(book.editing().is_none());
    }

    #[test]
    fn test_add_after_loading_max_id() {
        let slot = MemorySlot::new();
        slot.write(
            DEFAULT_RECIPES_KEY,
            r#"[{"id":9223372036854775807,"name":"Old","ingredients":[],"instructions":""}]"#,
        )
        .unwrap();

        let mut book = RecipeBook::open(slot.clone(), &Config::default());
        let id = book
            .submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(10))
            .unwrap()
            .id();

        assert_eq!(id, RecipeId(10));
        assert_eq!(stored(&slot).len(), 2);
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let mut book = RecipeBook::in_memory(&Config::default());
        assert!(book.begin_edit(RecipeId(1)).is_none());
        assert!(book.editing().is_none());
    }

    /// Reads fail and writes are rejected, so nothing can be backed up
    struct LockedSlot(MemorySlot);

    impl DurableSlot for LockedSlot {
        fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
            Err(SlotError::NotText(key.to_string()))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
            self.0.write(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), SlotError> {
            self.0.remove(key)
        }

        fn backup(&self, key: &str, _backup_key: &str) -> Result<bool, SlotError> {
            Err(SlotError::NotText(key.to_string()))
        }
    }

    #[test]
    fn test_unavailable_slot_is_never_overwritten() {
        let inner = MemorySlot::new();
        inner.write(DEFAULT_RECIPES_KEY, "original").unwrap();

        let mut book = RecipeBook::open(LockedSlot(inner.clone()), &Config::default());
        assert!(matches!(book.load_outcome(), LoadOutcome::Unavailable { .. }));

        let id = book
            .submit(RecipeDraft::new("Tea", "water", "Boil."), stamp(1))
            .unwrap()
            .id();
        book.remove(id);

        assert_eq!(
            inner.read(DEFAULT_RECIPES_KEY).unwrap(),
            Some("original".to_string())
        );
        assert!(!inner.contains("recipes.corrupt"));
    }
}
