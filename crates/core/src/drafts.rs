//! Writing Jekyll drafts to disk.
//!
//! A draft lands at `<path>/_drafts/<sanitised-title>.md` and contains the rendered front
//! matter, a newline, then the body verbatim. Existing files with the same name are replaced
//! without warning.
//!
//! Content is staged in a temporary file inside `_drafts/` and renamed over the target, so two
//! concurrent writes of the same title leave one complete file (last rename wins) rather than
//! interleaved bytes. There is no per-path locking beyond that.

use crate::constants::DRAFTS_DIR_NAME;
use crate::filename::draft_filename;
use crate::front_matter::render_front_matter;
use crate::{DraftError, DraftResult};
use chrono::NaiveDate;
use drafts_types::NonEmptyText;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Staged files are created owner-only; drafts are readable by the site build.
#[cfg(unix)]
const DRAFT_FILE_MODE: u32 = 0o644;

/// A draft post as accepted by the writer.
///
/// `title` and `path` are required; everything else may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRecord {
    pub title: NonEmptyText,
    /// Base directory of the site; `_drafts/` is created beneath it.
    pub path: NonEmptyText,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub series: Option<String>,
    pub summary: Option<String>,
    /// Free text appended after the front matter.
    pub body: String,
}

impl DraftRecord {
    /// Directory the draft file is written into.
    pub fn drafts_dir(&self) -> PathBuf {
        Path::new(self.path.as_str()).join(DRAFTS_DIR_NAME)
    }
}

/// Source of the front-matter date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock that always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Renders and writes drafts.
#[derive(Clone)]
pub struct DraftService {
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for DraftService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftService").finish_non_exhaustive()
    }
}

impl Default for DraftService {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftService {
    /// Creates a `DraftService` dated by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Renders the full file content for `record`: front matter, a newline, then the body.
    pub fn render(&self, record: &DraftRecord) -> String {
        let front_matter = render_front_matter(record, self.clock.today());
        format!("{}\n{}", front_matter, record.body)
    }

    /// Writes `record` to `<path>/_drafts/<sanitised-title>.md`.
    ///
    /// # Returns
    ///
    /// The path of the written file.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` if:
    /// - the title sanitises to an empty filename (`InvalidInput`); nothing is created
    /// - the `_drafts` directory cannot be created (`DraftsDirCreation`)
    /// - the file cannot be written or moved into place (`FileWrite`)
    pub fn write(&self, record: &DraftRecord) -> DraftResult<PathBuf> {
        let filename = draft_filename(record.title.as_str())?;

        let drafts_dir = record.drafts_dir();
        fs::create_dir_all(&drafts_dir).map_err(DraftError::DraftsDirCreation)?;

        let target = drafts_dir.join(filename);
        let content = self.render(record);

        let mut staged =
            tempfile::NamedTempFile::new_in(&drafts_dir).map_err(DraftError::FileWrite)?;
        staged
            .write_all(content.as_bytes())
            .map_err(DraftError::FileWrite)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(DRAFT_FILE_MODE))
                .map_err(DraftError::FileWrite)?;
        }
        staged
            .persist(&target)
            .map_err(|e| DraftError::FileWrite(e.error))?;

        tracing::info!("Draft written to: {}", target.display());

        Ok(target)
    }
}
