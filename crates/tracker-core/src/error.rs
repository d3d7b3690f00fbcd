use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl EventError {
    /// The underlying parser or storage text, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message } | Self::Storage { message } => message,
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Event(#[from] EventError),
    #[error("internal error: {message}")]
    Internal { message: String },
}
