//! Foundation types for recipebook.
//!
//! Every other recipebook crate depends on `recipebook-types`.
//!
//! # Key Types
//!
//! - [`Recipe`] -- ingredients and instructions stored under a unique name
//! - [`RecipeMap`] -- insertion-ordered map from recipe name to [`Recipe`]
//! - [`RecipeDraft`] -- a recipe as entered by a user, before it is stored

pub mod draft;
pub mod recipe;

pub use draft::RecipeDraft;
pub use recipe::{Recipe, RecipeMap};
