use fdk_beacon::CacheError;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// The beacon step failed; see [`CacheError`] for recoverability.
    Cache(CacheError),
    /// The deck cannot seat this many players (2 hole cards each plus
    /// 5 board cards).
    InsufficientCards { required: usize, available: usize },
}

impl std::fmt::Display for DealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cache(e) => write!(f, "{}", e),
            Self::InsufficientCards {
                required,
                available,
            } => write!(
                f,
                "insufficient cards: need {} but deck holds {}",
                required, available
            ),
        }
    }
}

impl std::error::Error for DealError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cache(e) => Some(e),
            Self::InsufficientCards { .. } => None,
        }
    }
}

impl From<CacheError> for DealError {
    fn from(e: CacheError) -> Self {
        Self::Cache(e)
    }
}
