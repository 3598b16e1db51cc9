//! In-memory recipe store.
//!
//! Backs tests and offline use without a database. Evaluates the query
//! filter in process, so it is also the executable reference for the
//! predicate semantics the SQL translation must preserve.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;
use uuid::Uuid;

use super::{RecipeStore, StoreError};
use crate::query::{sort_results, RecipeFilter};
use crate::recipe::{Recipe, RecipeDraft};

/// A [`RecipeStore`] holding everything in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, Recipe>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn create(&self, draft: RecipeDraft) -> Result<Uuid, StoreError> {
        let now = Utc::now();
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: draft.title,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        let id = recipe.id;
        self.records.write().unwrap().insert(id, recipe);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Recipe>, StoreError> {
        Ok(self.records.read().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: Uuid, draft: RecipeDraft) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        let recipe = records.get_mut(&id).ok_or(StoreError::NotFound)?;

        recipe.title = draft.title;
        recipe.ingredients = draft.ingredients;
        recipe.instructions = draft.instructions;
        recipe.tags = draft.tags;
        recipe.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        match self.records.write().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    async fn search(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, StoreError> {
        let mut results: Vec<Recipe> = self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|recipe| filter.matches(recipe))
            .cloned()
            .collect();
        sort_results(&mut results);
        Ok(results)
    }

    async fn distinct_tags(&self) -> Result<Vec<String>, StoreError> {
        let tags: BTreeSet<String> = self
            .records
            .read()
            .unwrap()
            .values()
            .flat_map(|recipe| recipe.tags.iter().cloned())
            .collect();
        Ok(tags.into_iter().collect())
    }
}
