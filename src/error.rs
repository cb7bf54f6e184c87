use thiserror::Error;

/// Everything an operation against the tracker can fail with.
///
/// The first four variants are user-facing and recoverable: the shell reports them and
/// returns to the menu with the store untouched. The rest are hard failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("a user named '{0}' already exists")]
    DuplicateName(String),
    #[error("invalid input: {0}")]
    FormatError(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

impl TrackerError {
    /// Input ran out; the session ends normally.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Console(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::DuplicateName(_) | Self::FormatError(_) | Self::InvalidDate(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
