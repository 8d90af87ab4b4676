use fdk_core::Round;

/// Errors that can occur during cache operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No beacon has been observed since startup. Recoverable by retrying
    /// once the background refresh has completed an iteration.
    NotYetAvailable,
    /// An on-demand fetch timed out or the source reported failure.
    /// Recoverable by retry; retry policy belongs to the caller.
    SourceUnavailable { round: Round, cause: String },
    /// The cache was shut down. Not recoverable on this instance.
    Closed,
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotYetAvailable => write!(f, "no beacon fetched yet"),
            Self::SourceUnavailable { round, cause } => {
                write!(f, "source unavailable for round {}: {}", round, cause)
            }
            Self::Closed => write!(f, "cache is closed"),
        }
    }
}

impl std::error::Error for CacheError {}
