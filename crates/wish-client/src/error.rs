//! Error Types
//!
//! `ApiError` covers everything the transport can fail with; its `Display`
//! is the text shown to the user. `ValidationError` covers the local form
//! checks that never reach the network.

use serde::Deserialize;
use thiserror::Error;

/// Fallback text when the server gives no usable message
pub const GENERIC_FAILURE: &str = "API request failed";

/// Result of every transport call. `Err` means "do not proceed"; the
/// transport has already notified the user (and signed out on 401).
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401: session expired or token invalid
    #[error("Session expired, please login again")]
    Unauthorized,
    /// Any other non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Network failure before a response arrived
    #[error("{0}")]
    Transport(String),
    /// 2xx response whose body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("Invalid request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a `Rejected` error from a non-2xx body.
    ///
    /// The API reports `{"error": ...}` for business failures and
    /// `{"status": "error", "message": ...}` from its 404/500 handlers.
    pub fn rejected(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<String>,
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        ApiError::Rejected { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Local form validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please fill in title and content")]
    MissingWishFields,
    #[error("Please login first")]
    NotSignedIn,
}
