//! Postgres-backed recipe store.
//!
//! Implements the `RecipeStore` contract from `skillet-core` on top of the
//! diesel connection pool. The SQL translation of `RecipeFilter` mirrors the
//! pure predicate in `skillet_core::query`: case-insensitive substring on the
//! title or any tag, exact containment for the tag selector.

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Bool, Text};
use uuid::Uuid;

use skillet_core::{Recipe, RecipeDraft, RecipeFilter, RecipeStore, StoreError};

use crate::db::{DbConn, DbPool};
use crate::models::{NewRecipeRow, RecipeRow};
use crate::raw_sql;
use crate::schema::recipes;

#[derive(Debug)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConn, StoreError> {
        self.pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

fn backend(e: diesel::result::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// Escape LIKE wildcards in a user search term and wrap it for substring
/// matching.
fn like_pattern(term: &str) -> String {
    format!("%{}%", term.replace('%', "\\%").replace('_', "\\_"))
}

#[derive(QueryableByName)]
struct TagRow {
    #[diesel(sql_type = Text)]
    tag: String,
}

#[async_trait]
impl RecipeStore for PgStore {
    async fn create(&self, draft: RecipeDraft) -> Result<Uuid, StoreError> {
        let mut conn = self.conn()?;

        let row = NewRecipeRow {
            title: &draft.title,
            ingredients: &draft.ingredients,
            instructions: &draft.instructions,
            tags: &draft.tags,
        };

        diesel::insert_into(recipes::table)
            .values(&row)
            .returning(recipes::id)
            .get_result(&mut conn)
            .map_err(backend)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Recipe>, StoreError> {
        let mut conn = self.conn()?;

        match recipes::table
            .find(id)
            .select(RecipeRow::as_select())
            .first::<RecipeRow>(&mut conn)
        {
            Ok(row) => Ok(Some(row.into())),
            Err(diesel::NotFound) => Ok(None),
            Err(e) => Err(backend(e)),
        }
    }

    async fn update(&self, id: Uuid, draft: RecipeDraft) -> Result<(), StoreError> {
        let mut conn = self.conn()?;

        // Full overwrite of every editable field, per the form's contract.
        let updated = diesel::update(recipes::table.find(id))
            .set((
                recipes::title.eq(draft.title.as_str()),
                recipes::ingredients.eq(draft.ingredients.as_slice()),
                recipes::instructions.eq(draft.instructions.as_str()),
                recipes::tags.eq(draft.tags.as_slice()),
                recipes::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .map_err(backend)?;

        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(recipes::table.find(id))
            .execute(&mut conn)
            .map_err(backend)?;

        if deleted == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn search(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, StoreError> {
        let mut conn = self.conn()?;

        let mut query = recipes::table
            .select(RecipeRow::as_select())
            .into_boxed();

        // Search term: ILIKE on the title OR on any element of the tags
        // array. Diesel has no DSL for unnest, so the tag side is raw SQL
        // with the pattern passed via bind.
        if let Some(term) = &filter.search {
            let pattern = like_pattern(term);
            query = query.filter(
                recipes::title.ilike(pattern.clone()).or(sql::<Bool>(
                    "EXISTS (SELECT 1 FROM unnest(tags) AS t WHERE t ILIKE ",
                )
                .bind::<Text, _>(pattern)
                .sql(")")),
            );
        }

        // Tag selector: exact containment in the tags array.
        if let Some(tag) = &filter.tag {
            query = query.filter(
                sql::<Bool>("")
                    .bind::<Text, _>(tag.as_str())
                    .sql(" = ANY(tags)"),
            );
        }

        let rows: Vec<RecipeRow> = query
            .order((recipes::title.asc(), recipes::id.asc()))
            .load(&mut conn)
            .map_err(backend)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn distinct_tags(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn()?;

        let rows: Vec<TagRow> = sql_query(raw_sql::DISTINCT_TAGS_QUERY)
            .load(&mut conn)
            .map_err(backend)?;

        Ok(rows.into_iter().map(|r| r.tag).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("egg"), "%egg%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
