//! List-text codec.
//!
//! Converts between a free-form text block (as typed into a multi-line form
//! field) and an ordered list of clean string items. Used for the ingredients
//! and tags fields.

/// Parse a multi-line or comma-separated text block into a clean list.
///
/// If the trimmed input contains a newline the text is split on line
/// boundaries, otherwise on commas, so a single comma-separated line and
/// one-item-per-line input both work without a mode switch. Pieces are
/// trimmed and empty pieces dropped. Never fails; blank input yields an
/// empty list.
pub fn decode(text: &str) -> Vec<String> {
    let pieces: Vec<&str> = if text.trim().contains('\n') {
        text.lines().collect()
    } else {
        text.split(',').collect()
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join a list back into multiline text for display/editing.
///
/// Left inverse of [`decode`] for any list `decode` can produce:
/// `decode(&encode(items)) == items` whenever the items are trimmed,
/// non-empty and contain no embedded newlines.
pub fn encode(items: &[String]) -> String {
    items.join("\n")
}
