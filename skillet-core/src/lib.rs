pub mod listtext;
pub mod query;
pub mod recipe;
pub mod store;
pub mod validate;

pub use query::{RecipeFilter, NO_TAG_FILTER};
pub use recipe::{Recipe, RecipeDraft};
pub use store::{MemoryStore, RecipeStore, StoreError};
pub use validate::{ensure_present, FieldValue, ValidationError};
