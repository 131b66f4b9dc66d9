//! Typed error handling for the admin client
//!
//! Every API operation returns [`ApiError`] on failure so controllers can
//! distinguish a request that never got a response from one the server
//! rejected. Both carry a user-facing message: errors are recovered at the
//! UI layer, never fatal.

use std::fmt;

/// The error type for all API client operations.
#[derive(Debug)]
pub enum ApiError {
    /// No usable response was received (connection refused, DNS failure,
    /// unreadable body, ...).
    Transport(reqwest::Error),

    /// The server answered with a non-success status. `message` is already
    /// cleaned up for display.
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// HTTP status of the rejection, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Rejected { status, .. } => Some(*status),
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "No se pudo conectar con el servidor".to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "request failed: {}", e),
            ApiError::Rejected { status, message } => {
                write!(f, "server rejected request ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            ApiError::Rejected { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error)
    }
}
