use recipebook_types::{Recipe, RecipeMap};

use crate::error::StoreResult;
use crate::traits::RecipeCollection;

/// Recipes held as a linear list of `(name, recipe)` pairs.
///
/// Every lookup is a scan from the front. This representation exists only
/// to be measured against [`RecipeStore`](crate::RecipeStore); it is
/// never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeList {
    entries: Vec<(String, Recipe)>,
}

impl RecipeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a map into list form, preserving its order.
    pub fn from_map(recipes: &RecipeMap) -> Self {
        Self {
            entries: recipes
                .iter()
                .map(|(name, recipe)| (name.clone(), recipe.clone()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert unless `name` is already present.
    pub fn insert(&mut self, name: &str, recipe: Recipe) -> bool {
        if self.entries.iter().any(|(existing, _)| existing == name) {
            return false;
        }
        self.entries.push((name.to_string(), recipe));
        true
    }

    /// Remove the entry named `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|(existing, _)| existing == name) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Recipe> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, recipe)| recipe)
    }
}

impl RecipeCollection for RecipeList {
    fn add(&mut self, name: &str, ingredients: &[String], instructions: &str) -> StoreResult<bool> {
        Ok(self.insert(name, Recipe::new(ingredients.to_vec(), instructions)))
    }

    fn get(&self, name: &str) -> Option<&Recipe> {
        self.lookup(name)
    }

    fn delete(&mut self, name: &str) -> StoreResult<bool> {
        Ok(self.remove(name))
    }

    fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }
}
