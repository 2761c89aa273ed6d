//! Jekyll front-matter rendering for drafts.
//!
//! The block is assembled as plain text in a fixed field order so that output stays
//! byte-compatible with drafts written by earlier versions of the writer:
//!
//! ```text
//! ---
//! layout: post
//! title: "<title>"
//! date: <YYYY-MM-DD>
//! categories: [["c1"], "c2"]     (only when categories are present)
//! tags: [["t1"], "t2"]           (only when tags are present)
//! series: <series>               (only when non-empty, unquoted)
//! summary: "<summary>"           (only when non-empty, quoted)
//! ---
//! ```
//!
//! Values are not escaped. A title containing `"` yields front matter that YAML parsers reject;
//! callers that care must avoid such titles.

use crate::constants::{DEFAULT_LAYOUT, FRONT_MATTER_DATE_FORMAT, FRONT_MATTER_DELIMITER};
use crate::drafts::DraftRecord;
use chrono::NaiveDate;

/// Renders the front-matter block for `record`, dated `date`.
///
/// The returned string starts with the opening delimiter and ends with the closing delimiter,
/// with no trailing newline.
pub fn render_front_matter(record: &DraftRecord, date: NaiveDate) -> String {
    let mut lines = vec![
        FRONT_MATTER_DELIMITER.to_string(),
        format!("layout: {}", DEFAULT_LAYOUT),
        format!("title: \"{}\"", record.title.as_str()),
        format!("date: {}", date.format(FRONT_MATTER_DATE_FORMAT)),
    ];

    if let Some(categories) = bracketed_list(&record.categories) {
        lines.push(format!("categories: [{}]", categories));
    }

    if let Some(tags) = bracketed_list(&record.tags) {
        lines.push(format!("tags: [{}]", tags));
    }

    if let Some(series) = record.series.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("series: {}", series));
    }

    if let Some(summary) = record.summary.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("summary: \"{}\"", summary));
    }

    lines.push(FRONT_MATTER_DELIMITER.to_string());
    lines.join("\n")
}

/// Builds the inner list text for a categories/tags line.
///
/// The first item is wrapped in its own brackets and later items are appended after it, so
/// `["a", "b"]` becomes `["a"], "b"`. The caller adds one more pair of brackets around the
/// result. Returns `None` for an empty list.
fn bracketed_list(items: &[String]) -> Option<String> {
    let (first, rest) = items.split_first()?;
    let mut list = format!("[\"{}\"]", first);
    for item in rest {
        list.push_str(&format!(", \"{}\"", item));
    }
    Some(list)
}
