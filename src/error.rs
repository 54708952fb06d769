//! Error type shared by the checked entry points and the filter.

use thiserror::Error;

/// Errors returned by fuzzysearch
#[derive(Error, Debug)]
pub enum MatchError {
    /// A required argument was absent
    #[error("invalid argument: {0} is absent")]
    InvalidArgument(&'static str),
    /// Reading candidates or writing matches failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Encoding a match record failed
    #[error("failed to serialize match: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MatchError {
    /// Whether this error comes from a closed downstream pipe.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
