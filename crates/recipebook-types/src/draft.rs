use crate::recipe::Recipe;

/// A recipe as typed into the add form: a name, a comma-separated
/// ingredient field, and instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl RecipeDraft {
    /// Build a draft from the three raw form fields.
    ///
    /// The ingredient field is split on `,` and every part is trimmed.
    /// Empty parts are kept, so an empty field yields a single empty
    /// ingredient. The name and instructions are taken verbatim.
    pub fn from_fields(name: &str, ingredients: &str, instructions: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: split_ingredients(ingredients),
            instructions: instructions.to_string(),
        }
    }

    /// Split the draft into its map key and stored record.
    pub fn into_parts(self) -> (String, Recipe) {
        (self.name, Recipe::new(self.ingredients, self.instructions))
    }
}

/// Split a comma-separated ingredient field into trimmed entries.
pub fn split_ingredients(field: &str) -> Vec<String> {
    field.split(',').map(|part| part.trim().to_string()).collect()
}
