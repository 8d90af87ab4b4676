/// Errors that can occur while parsing card text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    InvalidSuit(String),
    InvalidRank(String),
}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSuit(s) => write!(f, "invalid suit: {}", s),
            Self::InvalidRank(s) => write!(f, "invalid rank: {}", s),
        }
    }
}

impl std::error::Error for CardError {}
