//! Filename derivation for drafts.
//!
//! Titles are free text; filenames are not. The sanitiser keeps ASCII letters and digits, turns
//! every space into a hyphen and drops everything else without replacement.

use crate::constants::DRAFT_FILE_EXTENSION;
use crate::{DraftError, DraftResult};

/// Sanitises a post title into a filename stem.
///
/// - `A-Z`, `a-z`, `0-9` are kept verbatim
/// - each `' '` becomes exactly one `'-'` (runs of spaces are not collapsed)
/// - every other character, including non-ASCII letters and tabs, is dropped
///
/// The function is total: any input produces an output, possibly empty.
pub fn sanitise_title(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => Some(c),
            ' ' => Some('-'),
            _ => None,
        })
        .collect()
}

/// Builds the draft filename (`<sanitised-title>.md`) for a title.
///
/// # Errors
///
/// Returns `DraftError::InvalidInput` if the title sanitises to an empty stem, which would
/// otherwise produce a hidden file named `.md`.
pub fn draft_filename(title: &str) -> DraftResult<String> {
    let stem = sanitise_title(title);
    if stem.is_empty() {
        return Err(DraftError::InvalidInput(
            "Title must contain at least one letter, digit or space".into(),
        ));
    }
    Ok(format!("{}.{}", stem, DRAFT_FILE_EXTENSION))
}
