#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Failed to create drafts directory: {0}")]
    DraftsDirCreation(std::io::Error),
    #[error("Failed to write file: {0}")]
    FileWrite(std::io::Error),
}

impl DraftError {
    /// Whether the error was caused by the caller's input rather than the filesystem.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DraftError::InvalidInput(_))
    }
}

pub type DraftResult<T> = std::result::Result<T, DraftError>;
