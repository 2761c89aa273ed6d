//! # Drafts Core
//!
//! Core logic for the draft generator and draft writer services.
//!
//! This crate contains pure text operations and the single filesystem write:
//! - Markdown generation from a title and notes ([`MarkdownService`])
//! - Jekyll front-matter rendering ([`front_matter`])
//! - Title-to-filename sanitisation ([`filename`])
//! - Writing drafts under `<path>/_drafts/` ([`DraftService`])
//!
//! **No API concerns**: JSON-RPC envelopes, HTTP servers and error codes belong in `api-shared`,
//! `api-generator` and `api-writer`.

pub mod constants;
pub mod drafts;
pub mod error;
pub mod filename;
pub mod front_matter;
pub mod markdown;

pub use constants::DRAFTS_DIR_NAME;
pub use drafts::{Clock, DraftRecord, DraftService, FixedClock, SystemClock};
pub use drafts_types::NonEmptyText;
pub use error::{DraftError, DraftResult};
pub use filename::{draft_filename, sanitise_title};
pub use markdown::MarkdownService;
