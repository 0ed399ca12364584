//! Timestamp-based recipe id allocation

use super::models::RecipeId;

/// Hands out millisecond timestamps as ids, never repeating or going backwards.
///
/// Two recipes created in the same millisecond get `t` and `t + 1`. Once the
/// floor reaches `i64::MAX` the allocator restarts from `now_ms`, so ids may
/// then repeat ones already stored.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Option<i64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the floor so future ids sort after `id`.
    pub fn observe(&mut self, id: RecipeId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }

    /// Allocate an id for a recipe created at `now_ms`.
    pub fn next(&mut self, now_ms: i64) -> RecipeId {
        let id = match self.last {
            Some(last) if now_ms <= last => match last.checked_add(1) {
                Some(id) => id,
                None => {
                    tracing::warn!(now_ms, "Recipe id space exhausted, falling back to clock time");
                    now_ms
                }
            },
            _ => now_ms,
        };
        self.last = Some(id);
        RecipeId(id)
    }
}
