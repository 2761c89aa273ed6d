//! Constants used throughout the drafts core crate.
//!
//! This module contains the directory, filename and front-matter constants so that the writer,
//! the CLI and the tests agree on the on-disk layout.

/// Directory name, relative to a site root, that Jekyll reads unpublished drafts from.
pub const DRAFTS_DIR_NAME: &str = "_drafts";

/// File extension given to every written draft.
pub const DRAFT_FILE_EXTENSION: &str = "md";

/// Layout written into every draft's front matter.
pub const DEFAULT_LAYOUT: &str = "post";

/// Delimiter line that opens and closes a front-matter block.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// `chrono` format string for the front-matter `date` field.
pub const FRONT_MATTER_DATE_FORMAT: &str = "%Y-%m-%d";
