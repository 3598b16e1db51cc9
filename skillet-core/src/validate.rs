//! Required-field validation for the recipe form.

use thiserror::Error;

/// A required field was missing or blank.
///
/// The display string is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} is required!")]
pub struct ValidationError {
    /// Label of the first field that failed the check.
    pub label: String,
}

/// A form value under validation: either free text or a decoded item list.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

/// Check that every labeled value is present and non-blank.
///
/// Fail-fast: reports the first blank field, in argument order.
pub fn ensure_present(fields: &[(&str, FieldValue<'_>)]) -> Result<(), ValidationError> {
    for (label, value) in fields {
        if value.is_blank() {
            return Err(ValidationError {
                label: label.to_string(),
            });
        }
    }
    Ok(())
}
