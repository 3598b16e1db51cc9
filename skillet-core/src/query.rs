//! Search/filter query model.
//!
//! The UI's search box and tag selector reduce to a [`RecipeFilter`], the
//! single predicate every store backend evaluates. The in-memory store runs
//! [`RecipeFilter::matches`] directly; the Postgres store translates the same
//! conditions to SQL.

use crate::recipe::Recipe;

/// Tag-selector value meaning "no tag filter". Pickers show it as the
/// first/default choice ahead of the real vocabulary.
pub const NO_TAG_FILTER: &str = "(All)";

/// Filter built from the search term and tag selector.
///
/// `None` means "no condition". Blank inputs and the [`NO_TAG_FILTER`]
/// sentinel are normalized to `None` by [`RecipeFilter::new`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Case-insensitive substring matched against the title or any tag.
    pub search: Option<String>,
    /// Exact (case-sensitive) tag the record must carry.
    pub tag: Option<String>,
}

impl RecipeFilter {
    /// Normalize raw UI input into a filter, treating blank values as unset.
    pub fn new(search_term: Option<&str>, tag_filter: Option<&str>) -> Self {
        fn normalize(value: Option<&str>) -> Option<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        }

        Self {
            search: normalize(search_term),
            tag: normalize(tag_filter).filter(|tag| tag != NO_TAG_FILTER),
        }
    }

    /// Evaluate the predicate against one record.
    ///
    /// The search term must appear case-insensitively in the title or in at
    /// least one tag; the tag condition requires exact containment. Both
    /// conditions must hold when both are set; an empty filter matches
    /// everything.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            let in_title = recipe.title.to_lowercase().contains(&needle);
            let in_tags = recipe
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle));
            if !in_title && !in_tags {
                return false;
            }
        }

        if let Some(wanted) = &self.tag {
            if !recipe.tags.iter().any(|tag| tag == wanted) {
                return false;
            }
        }

        true
    }
}

/// Sort search results into their presentation order: title ascending, ties
/// broken by id so the order is total.
pub fn sort_results(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn recipe(title: &str, tags: &[&str]) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            ingredients: vec!["something".to_string()],
            instructions: "Cook.".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RecipeFilter::new(None, None);
        assert!(filter.matches(&recipe("Egg Salad", &[])));
        assert!(filter.matches(&recipe("Toast", &["breakfast"])));
    }

    #[test]
    fn test_blank_inputs_normalize_to_unset() {
        assert_eq!(RecipeFilter::new(Some("  "), Some("")), RecipeFilter::default());
    }

    #[test]
    fn test_all_sentinel_means_no_tag_filter() {
        let filter = RecipeFilter::new(Some("egg"), Some(NO_TAG_FILTER));
        assert_eq!(filter.tag, None);
        assert!(filter.matches(&recipe("Egg Salad", &[])));
    }

    #[test]
    fn test_search_matches_title_or_tag_substring() {
        let filter = RecipeFilter::new(Some("egg"), None);

        // Case-insensitive substring in the title...
        assert!(filter.matches(&recipe("Egg Salad", &[])));
        // ...or in any tag.
        assert!(filter.matches(&recipe("Granola", &["Breakfast", "egg-free"])));
        // Neither: no match.
        assert!(!filter.matches(&recipe("Beef Stew", &["dinner"])));
    }

    #[test]
    fn test_tag_filter_requires_exact_containment() {
        let filter = RecipeFilter::new(None, Some("Dessert"));

        assert!(filter.matches(&recipe("Brownies", &["Dessert", "easy"])));
        // Case matters for the tag selector.
        assert!(!filter.matches(&recipe("Flan", &["dessert"])));
        // Substring is not enough.
        assert!(!filter.matches(&recipe("Cheese Plate", &["Desserts"])));
    }

    #[test]
    fn test_search_and_tag_combine_with_and() {
        let filter = RecipeFilter::new(Some("egg"), Some("Dessert"));

        assert!(filter.matches(&recipe("Egg Custard", &["Dessert"])));
        assert!(!filter.matches(&recipe("Egg Salad", &["lunch"])));
        assert!(!filter.matches(&recipe("Brownies", &["Dessert"])));
    }

    #[test]
    fn test_sort_results_orders_by_title_then_id() {
        let mut recipes = vec![
            recipe("Waffles", &[]),
            recipe("Crepes", &[]),
            recipe("Pancakes", &[]),
        ];
        sort_results(&mut recipes);
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Crepes", "Pancakes", "Waffles"]);

        // Equal titles fall back to id order, so the sort stays total.
        let mut dupes = vec![recipe("Toast", &[]), recipe("Toast", &[])];
        sort_results(&mut dupes);
        assert!(dupes[0].id <= dupes[1].id);
    }
}
