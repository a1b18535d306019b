//! Error types for the library consumer.

/// Consumer errors.
#[derive(Debug, thiserror::Error)]
pub enum ConsumerError {
    /// Missing or invalid configuration.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Release event could not be parsed or is incomplete.
    #[error("invalid release event: {message}")]
    InvalidEvent { message: String },

    /// Task launcher rejected the credentials.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Task launch was rejected or reported failures.
    #[error("task launch failed: {message}")]
    Launch { message: String },

    /// Network error.
    #[error("network error: {message}")]
    Network { message: String },

    /// Reading input failed.
    #[error("io error: {message}")]
    Io { message: String },
}

impl ConsumerError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::InvalidEvent { .. } => 2,
            Self::Unauthorized { .. } => 3,
            Self::Launch { .. } => 4,
            Self::Network { .. } => 5,
            Self::Io { .. } => 6,
        }
    }

    /// Whether the error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<reqwest::Error> for ConsumerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConsumerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for consumer operations.
pub type ConsumerResult<T> = Result<T, ConsumerError>;
