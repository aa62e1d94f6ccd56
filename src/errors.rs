use thiserror::Error;

/// Error type that captures the failures this crate can raise itself.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A period token could not be parsed into a granularity and date range.
    #[error("invalid period token `{token}`: {reason}")]
    InvalidToken { token: String, reason: String },
    #[error("CSV export error: {0}")]
    Export(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    pub(crate) fn invalid_token(token: &str, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
