use recipebook_types::{Recipe, RecipeMap};
use tracing::debug;

use crate::error::StoreResult;
use crate::traits::{RecipeCollection, RecipeStorage};

/// In-memory owner of the live recipe map.
///
/// The map is loaded wholesale when the store is opened and written back
/// wholesale after every successful [`add`](Self::add) or
/// [`delete`](Self::delete). If a save fails the in-memory change is kept
/// and the error is returned.
pub struct RecipeStore<S> {
    recipes: RecipeMap,
    storage: S,
}

impl<S: RecipeStorage> RecipeStore<S> {
    /// Open a store over `storage`, loading whatever it holds.
    pub fn open(storage: S) -> Self {
        let recipes = storage.load();
        debug!(count = recipes.len(), "opened recipe store");
        Self { recipes, storage }
    }

    /// Add a recipe under a new name and persist.
    ///
    /// Returns `Ok(false)` without touching storage if `name` is taken.
    pub fn add(
        &mut self,
        name: &str,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
    ) -> StoreResult<bool> {
        if self.recipes.contains_key(name) {
            debug!(name, "recipe already exists");
            return Ok(false);
        }
        self.recipes
            .insert(name.to_string(), Recipe::new(ingredients, instructions));
        self.storage.save(&self.recipes)?;
        debug!(name, "added recipe");
        Ok(true)
    }

    /// Delete a recipe and persist.
    ///
    /// Returns `Ok(false)` without touching storage if `name` is absent.
    pub fn delete(&mut self, name: &str) -> StoreResult<bool> {
        if self.recipes.shift_remove(name).is_none() {
            debug!(name, "no such recipe");
            return Ok(false);
        }
        self.storage.save(&self.recipes)?;
        debug!(name, "deleted recipe");
        Ok(true)
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// All recipe names in map order.
    pub fn list_names(&self) -> Vec<String> {
        self.recipes.keys().cloned().collect()
    }

    /// Discard the in-memory map and load it again from storage.
    pub fn reload(&mut self) {
        self.recipes = self.storage.load();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Borrow the live map.
    pub fn recipes(&self) -> &RecipeMap {
        &self.recipes
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: RecipeStorage> RecipeCollection for RecipeStore<S> {
    fn add(&mut self, name: &str, ingredients: &[String], instructions: &str) -> StoreResult<bool> {
        RecipeStore::add(self, name, ingredients.to_vec(), instructions)
    }

    fn get(&self, name: &str) -> Option<&Recipe> {
        RecipeStore::get(self, name)
    }

    fn delete(&mut self, name: &str) -> StoreResult<bool> {
        RecipeStore::delete(self, name)
    }

    fn names(&self) -> Vec<String> {
        self.list_names()
    }
}

impl<S> std::fmt::Debug for RecipeStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore")
            .field("recipe_count", &self.recipes.len())
            .finish()
    }
}
