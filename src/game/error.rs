/// Errors raised by game transitions and their adapters.
///
/// A claim that was already made today is not an error; see [`super::Claim`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move outside rock, paper, scissors.
    InvalidChoice(String),
    /// A withdrawal (or other bounded input) outside its limits.
    /// Carries the user-facing reason.
    Validation(String),
    /// Persisted record could not be read or written.
    Persistence(String),
    /// Frame session id with no stored state.
    SessionNotFound(String),
    /// Wallet address that is not `0x` + 40 hex digits.
    InvalidAddress(String),
    /// Client input that names no known command.
    UnknownCommand(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChoice(s) => write!(f, "invalid choice: {}", s),
            Self::Validation(s) => write!(f, "{}", s),
            Self::Persistence(s) => write!(f, "persistence failure: {}", s),
            Self::SessionNotFound(s) => write!(f, "session not found: {}", s),
            Self::InvalidAddress(s) => write!(f, "invalid address: {}", s),
            Self::UnknownCommand(s) => write!(f, "unknown command: {}", s),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}
