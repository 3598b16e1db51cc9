//! Behavioral tests for the store contract, run against `MemoryStore`.
//!
//! These cover the full form-to-store flow: decode the text fields, validate,
//! then create/search/update/delete through the `RecipeStore` interface.

use skillet_core::{MemoryStore, RecipeDraft, RecipeFilter, RecipeStore, StoreError};

fn draft(title: &str, ingredients_text: &str, instructions: &str, tags_text: &str) -> RecipeDraft {
    RecipeDraft::from_form(title, ingredients_text, instructions, tags_text)
        .expect("draft should validate")
}

#[tokio::test]
async fn test_add_stores_decoded_lists() {
    let store = MemoryStore::new();

    let id = store
        .create(draft(
            "Pancakes",
            "flour\nmilk\negg",
            "Mix and fry.",
            "breakfast, easy",
        ))
        .await
        .unwrap();

    let stored = store.get(id).await.unwrap().expect("recipe should exist");
    assert_eq!(stored.id, id);
    assert_eq!(stored.title, "Pancakes");
    assert_eq!(stored.ingredients, vec!["flour", "milk", "egg"]);
    assert_eq!(stored.instructions, "Mix and fry.");
    assert_eq!(stored.tags, vec!["breakfast", "easy"]);
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let store = MemoryStore::new();
    let id = store
        .create(draft("Pancakes", "flour\nmilk\negg", "Mix and fry.", "breakfast, easy"))
        .await
        .unwrap();

    // The form resubmits ingredients/tags unchanged, so they survive a
    // title-only edit.
    store
        .update(
            id,
            draft(
                "Fluffy Pancakes",
                "flour\nmilk\negg",
                "Mix and fry.",
                "breakfast, easy",
            ),
        )
        .await
        .unwrap();

    let stored = store.get(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Fluffy Pancakes");
    assert_eq!(stored.ingredients, vec!["flour", "milk", "egg"]);
    assert_eq!(stored.tags, vec!["breakfast", "easy"]);

    // Omitting tags on a full-overwrite update clears them.
    store
        .update(id, draft("Fluffy Pancakes", "flour\nmilk\negg", "Mix and fry.", ""))
        .await
        .unwrap();
    let stored = store.get(id).await.unwrap().unwrap();
    assert!(stored.tags.is_empty());
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let store = MemoryStore::new();
    let err = store
        .update(uuid::Uuid::new_v4(), draft("X", "y", "z", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn test_delete_removes_record_and_its_tags() {
    let store = MemoryStore::new();
    let keep = store
        .create(draft("Granola", "oats", "Bake.", "Breakfast"))
        .await
        .unwrap();
    let gone = store
        .create(draft("Flan", "eggs", "Chill.", "Dessert"))
        .await
        .unwrap();

    store.delete(gone).await.unwrap();

    assert_eq!(store.len(), 1);
    assert!(store.get(gone).await.unwrap().is_none());
    assert!(store.get(keep).await.unwrap().is_some());

    // The deleted record's tag drops out of the vocabulary.
    assert_eq!(store.distinct_tags().await.unwrap(), vec!["Breakfast"]);

    let err = store.delete(gone).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn test_search_filters_and_sorts_by_title() {
    let store = MemoryStore::new();
    store
        .create(draft("Egg Salad", "eggs\nmayo", "Mix.", "lunch"))
        .await
        .unwrap();
    store
        .create(draft("Granola", "oats", "Bake.", "Breakfast, egg-free"))
        .await
        .unwrap();
    store
        .create(draft("Beef Stew", "beef", "Simmer.", "dinner"))
        .await
        .unwrap();

    // Substring search hits titles and tags, case-insensitively.
    let results = store
        .search(&RecipeFilter::new(Some("egg"), None))
        .await
        .unwrap();
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Egg Salad", "Granola"]);

    // Exact tag filter.
    let results = store
        .search(&RecipeFilter::new(None, Some("dinner")))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Beef Stew");

    // No filter returns everything, sorted by title.
    let results = store.search(&RecipeFilter::default()).await.unwrap();
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Beef Stew", "Egg Salad", "Granola"]);
}

#[tokio::test]
async fn test_distinct_tags_dedupes_and_sorts() {
    let store = MemoryStore::new();
    store.create(draft("One", "a", "x", "A, B")).await.unwrap();
    store.create(draft("Two", "b", "y", "B, C")).await.unwrap();

    assert_eq!(store.distinct_tags().await.unwrap(), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_distinct_tags_preserves_case_variants() {
    let store = MemoryStore::new();
    store
        .create(draft("One", "a", "x", "dessert"))
        .await
        .unwrap();
    store
        .create(draft("Two", "b", "y", "Dessert"))
        .await
        .unwrap();

    // No case normalization: the two spellings are distinct vocabulary
    // entries.
    assert_eq!(
        store.distinct_tags().await.unwrap(),
        vec!["Dessert", "dessert"]
    );
}
