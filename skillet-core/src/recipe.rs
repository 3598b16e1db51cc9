//! Recipe domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listtext;
use crate::validate::{ensure_present, FieldValue, ValidationError};

/// A stored recipe record.
///
/// `id` is assigned by the store on create and never changes. Timestamps are
/// maintained by the store, not the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The four editable fields of a recipe, decoded and validated.
///
/// Used for both Add and Update. An update always overwrites all four
/// fields; there is no partial patch.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub tags: Vec<String>,
}

impl RecipeDraft {
    /// Build a draft from raw form input.
    ///
    /// Ingredients and tags arrive as free-form text blocks (comma- or
    /// newline-separated) and are decoded with the list-text codec. Title,
    /// Ingredients and Instructions must be non-blank; tags may be empty.
    pub fn from_form(
        title: &str,
        ingredients_text: &str,
        instructions: &str,
        tags_text: &str,
    ) -> Result<Self, ValidationError> {
        let title = title.trim().to_string();
        let ingredients = listtext::decode(ingredients_text);
        let instructions = instructions.trim().to_string();
        let tags = listtext::decode(tags_text);

        ensure_present(&[
            ("Title", FieldValue::Text(&title)),
            ("Ingredients", FieldValue::List(&ingredients)),
            ("Instructions", FieldValue::Text(&instructions)),
        ])?;

        Ok(Self {
            title,
            ingredients,
            instructions,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_decodes_list_fields() {
        let draft = RecipeDraft::from_form(
            "Pancakes",
            "flour\nmilk\negg",
            "Mix and fry.",
            "breakfast, easy",
        )
        .unwrap();

        assert_eq!(draft.title, "Pancakes");
        assert_eq!(draft.ingredients, vec!["flour", "milk", "egg"]);
        assert_eq!(draft.instructions, "Mix and fry.");
        assert_eq!(draft.tags, vec!["breakfast", "easy"]);
    }

    #[test]
    fn test_from_form_allows_empty_tags() {
        let draft = RecipeDraft::from_form("Toast", "bread", "Toast it.", "").unwrap();
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_from_form_requires_title() {
        let err = RecipeDraft::from_form("  ", "bread", "Toast it.", "").unwrap_err();
        assert_eq!(err.to_string(), "Title is required!");
    }

    #[test]
    fn test_from_form_requires_ingredients() {
        let err = RecipeDraft::from_form("Toast", " \n ", "Toast it.", "").unwrap_err();
        assert_eq!(err.to_string(), "Ingredients is required!");
    }

    #[test]
    fn test_from_form_requires_instructions() {
        let err = RecipeDraft::from_form("Toast", "bread", "", "").unwrap_err();
        assert_eq!(err.to_string(), "Instructions is required!");
    }
}
