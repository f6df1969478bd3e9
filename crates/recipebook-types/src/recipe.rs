use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Recipes keyed by name.
///
/// Iteration follows insertion order, so a map loaded from disk lists
/// recipes in file order and newly added recipes come last.
pub type RecipeMap = IndexMap<String, Recipe>;

/// A stored recipe. The name is not part of the record; it is the key
/// under which the recipe lives in a [`RecipeMap`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Ingredients in the order they were entered.
    pub ingredients: Vec<String>,
    /// Free-form preparation instructions.
    pub instructions: String,
}

impl Recipe {
    pub fn new(ingredients: Vec<String>, instructions: impl Into<String>) -> Self {
        Self {
            ingredients,
            instructions: instructions.into(),
        }
    }

    /// Ingredients joined one per line, for read-only display.
    pub fn ingredient_lines(&self) -> String {
        self.ingredients.join("\n")
    }
}
