//! Recipe storage for recipebook.
//!
//! The live data is a single [`RecipeMap`] owned by a [`RecipeStore`] and
//! rewritten wholesale to its [`RecipeStorage`] backend after every
//! successful add or delete.
//!
//! # Storage Backends
//!
//! All backends implement the [`RecipeStorage`] trait:
//!
//! - [`JsonFileStorage`] -- the backing JSON file
//! - [`InMemoryStorage`] -- lock-protected map for tests and benchmark runs
//!
//! # Representations
//!
//! [`RecipeStore`] (map-based) and [`RecipeList`] (linear list of pairs)
//! both implement [`RecipeCollection`], so the same sequence of operations
//! can be replayed against either one.
//!
//! # Design Rules
//!
//! 1. Loading never fails: a missing or unreadable file is an empty map.
//! 2. Saving overwrites the whole file; write failures are propagated.
//! 3. Recipes are never edited in place, only added or deleted.
//! 4. Names are unique: adding an existing name is refused, not replaced.

pub mod error;
pub mod file;
pub mod list;
pub mod memory;
pub mod store;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::{JsonFileStorage, DEFAULT_RECIPES_FILE};
pub use list::RecipeList;
pub use memory::InMemoryStorage;
pub use store::RecipeStore;
pub use traits::{RecipeCollection, RecipeStorage};

pub use recipebook_types::{Recipe, RecipeMap};
