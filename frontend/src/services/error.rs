use thiserror::Error;

/// Failure talking to the ledger store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Short text suitable for an inline form message
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Status { message, .. } if !message.trim().is_empty() => message.trim().to_string(),
            _ => self.to_string(),
        }
    }
}
