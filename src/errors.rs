use std::fmt;

#[derive(Clone, Debug)]
pub enum ApiError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl ApiError {
    /// Message suitable for display, without the variant prefix.
    /// Returns `None` when the failure carries no usable message, e.g. an
    /// HTTP error with an empty body.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        let message = match self {
            ApiError::Config(message)
            | ApiError::Network(message)
            | ApiError::Timeout(message)
            | ApiError::Parse(message)
            | ApiError::Serialization(message)
            | ApiError::Http { message, .. } => message,
        };
        let trimmed = message.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(message) => write!(formatter, "Config error: {message}"),
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ApiError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
            ApiError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
