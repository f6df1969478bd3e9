use recipebook_types::{Recipe, RecipeMap};

use crate::error::StoreResult;

/// Where a recipe map is persisted between runs.
///
/// All implementations must satisfy these invariants:
/// - `load` never fails. Missing or malformed data loads as an empty map.
/// - `save` replaces everything previously saved with the given map.
/// - Errors from `save` are propagated, never silently ignored.
pub trait RecipeStorage {
    /// Read the persisted map, or an empty map if there is nothing usable.
    fn load(&self) -> RecipeMap;

    /// Overwrite the persisted map with `recipes`.
    fn save(&self, recipes: &RecipeMap) -> StoreResult<()>;
}

impl<S: RecipeStorage + ?Sized> RecipeStorage for &S {
    fn load(&self) -> RecipeMap {
        (**self).load()
    }

    fn save(&self, recipes: &RecipeMap) -> StoreResult<()> {
        (**self).save(recipes)
    }
}

/// A collection of uniquely named recipes.
///
/// Implemented by the map-backed [`RecipeStore`](crate::RecipeStore) and
/// the list-backed [`RecipeList`](crate::RecipeList). For any sequence of
/// operations both end up holding the same set of names.
pub trait RecipeCollection {
    /// Insert a recipe. Returns `false` and changes nothing if `name`
    /// is already present.
    fn add(&mut self, name: &str, ingredients: &[String], instructions: &str) -> StoreResult<bool>;

    /// Look a recipe up by name.
    fn get(&self, name: &str) -> Option<&Recipe>;

    /// Remove a recipe. Returns `false` if `name` was not present.
    fn delete(&mut self, name: &str) -> StoreResult<bool>;

    /// All recipe names, in collection order.
    fn names(&self) -> Vec<String>;
}
