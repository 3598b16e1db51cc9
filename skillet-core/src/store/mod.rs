//! Persistence boundary for recipe records.
//!
//! The store is a trait so the core (codec, validator, query filter) and its
//! callers can be exercised against [`MemoryStore`] without a live database.
//! The production Postgres implementation lives in the server crate.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::query::RecipeFilter;
use crate::recipe::{Recipe, RecipeDraft};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached. Fatal to the operation, not
    /// to the process; the next operation retries the connection.
    #[error("storage connection failed: {0}")]
    Connection(String),

    /// The id does not exist (update/delete of a vanished record).
    #[error("recipe not found")]
    NotFound,

    /// Any other backend failure.
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// One logical collection of recipe documents keyed by a store-assigned id.
///
/// Updates replace all editable fields at once; there is no partial patch.
/// Reads after a concurrent external write see last-write-wins storage
/// semantics, and no conflict detection is attempted.
#[async_trait]
pub trait RecipeStore: Send + Sync + fmt::Debug {
    /// Insert a new record and return its assigned id.
    async fn create(&self, draft: RecipeDraft) -> Result<Uuid, StoreError>;

    /// Fetch one record, or `None` if the id is absent.
    async fn get(&self, id: Uuid) -> Result<Option<Recipe>, StoreError>;

    /// Overwrite all editable fields of an existing record.
    async fn update(&self, id: Uuid, draft: RecipeDraft) -> Result<(), StoreError>;

    /// Permanently remove a record.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Return the records matching `filter`, sorted by title (ties by id).
    async fn search(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, StoreError>;

    /// Distinct tag values across all records, sorted ascending.
    ///
    /// Recomputed on every call; tags differing only by case stay distinct.
    async fn distinct_tags(&self) -> Result<Vec<String>, StoreError>;
}
