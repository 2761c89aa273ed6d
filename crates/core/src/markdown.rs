//! Markdown generation from a title and free-form notes.
//!
//! This is the stand-in for an AI-backed drafting step. The contract is purely textual: the
//! title becomes a level-1 header and the notes follow after a blank line, with no escaping,
//! trimming or summarisation applied to either.

/// Prefix that turns the title line into a level-1 header.
const TITLE_HEADER_PREFIX: &str = "# ";

/// Service for turning notes into a markdown document.
#[derive(Debug, Clone, Default)]
pub struct MarkdownService;

impl MarkdownService {
    /// Creates a new `MarkdownService` instance.
    pub fn new() -> Self {
        Self
    }

    /// Generates a markdown document from a title and notes.
    ///
    /// Output format:
    /// ```markdown
    /// # <title>
    ///
    /// <notes>
    /// ```
    ///
    /// Both inputs are copied byte-for-byte. Empty inputs are allowed and produce the degenerate
    /// document `"# \n\n"`.
    pub fn generate(&self, title: &str, notes: &str) -> String {
        format!("{}{}\n\n{}", TITLE_HEADER_PREFIX, title, notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_concatenates_title_and_notes() {
        let service = MarkdownService::new();
        let result = service.generate("Hello", "Some notes.");
        assert_eq!(result, "# Hello\n\nSome notes.");
    }

    #[test]
    fn test_generate_does_not_trim_or_escape() {
        let service = MarkdownService::new();
        let title = "  # Already a header *bold* ";
        let notes = "\n---\nline with trailing space \n";
        let result = service.generate(title, notes);
        assert_eq!(result, format!("# {}\n\n{}", title, notes));
    }

    #[test]
    fn test_generate_empty_inputs() {
        let service = MarkdownService::new();
        assert_eq!(service.generate("", ""), "# \n\n");
    }

    #[test]
    fn test_generate_preserves_unicode() {
        let service = MarkdownService::new();
        let result = service.generate("Café ☕", "Ünïcödé notes");
        assert_eq!(result, "# Café ☕\n\nÜnïcödé notes");
    }
}
