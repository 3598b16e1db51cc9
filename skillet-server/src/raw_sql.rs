//! Raw SQL fragments that can't be expressed in Diesel's type-safe DSL.
//!
//! # Safety
//!
//! All SQL in this module has been reviewed for SQL injection safety:
//! - User input is ALWAYS passed via `.bind()` parameters
//! - No string concatenation or interpolation with user data

/// Query for the distinct tag vocabulary across all recipes.
///
/// Uses `unnest()` to expand the tags array, which isn't in Diesel's DSL.
/// Plain `text[]` comparison keeps tags that differ only by case distinct.
///
/// # Safety
/// Static SQL string with no user input.
pub const DISTINCT_TAGS_QUERY: &str =
    "SELECT DISTINCT unnest(tags) AS tag FROM recipes ORDER BY tag";
