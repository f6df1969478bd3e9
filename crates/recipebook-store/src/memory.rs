use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use recipebook_types::RecipeMap;

use crate::error::StoreResult;
use crate::traits::RecipeStorage;

/// In-memory storage backend.
///
/// Intended for tests and benchmark runs. Holds a copy of the last saved
/// map behind a `RwLock` and counts how many times `save` was called.
pub struct InMemoryStorage {
    recipes: RwLock<RecipeMap>,
    saves: AtomicUsize,
}

impl InMemoryStorage {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::with_recipes(RecipeMap::new())
    }

    /// Create a backend whose first `load` returns `recipes`.
    pub fn with_recipes(recipes: RecipeMap) -> Self {
        Self {
            recipes: RwLock::new(recipes),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    /// A copy of the last saved map.
    pub fn snapshot(&self) -> RecipeMap {
        self.recipes.read().expect("lock poisoned").clone()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStorage for InMemoryStorage {
    fn load(&self) -> RecipeMap {
        self.snapshot()
    }

    fn save(&self, recipes: &RecipeMap) -> StoreResult<()> {
        let mut stored = self.recipes.write().expect("lock poisoned");
        stored.clone_from(recipes);
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.recipes.read().map(|m| m.len()).unwrap_or_default();
        f.debug_struct("InMemoryStorage")
            .field("recipe_count", &count)
            .field("saves", &self.save_count())
            .finish()
    }
}
