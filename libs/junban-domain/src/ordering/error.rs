//! Domain errors for ordering operations
//!
//! These are domain-level errors that abstract away infrastructure details.
//! Empty submissions and unconfigured publishing are not errors; they are
//! reported through `SubmitOutcome` and `LikeOutcome`.

use thiserror::Error;

/// Errors that can occur while submitting, retrieving or liking pages
#[derive(Error, Debug)]
pub enum OrderingError {
    /// The document store is missing or could not be reached
    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),

    /// No page exists for the given identifier
    #[error("Page not found: {0}")]
    NotFound(String),

    /// A stored document could not be decoded
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    /// The publish sink was reachable but the call failed
    #[error("Publish failed: {0}")]
    PublishFailed(String),
}

impl OrderingError {
    /// Create a store unavailable error with a message
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Create a not found error for the given page id
    pub fn not_found(page_id: impl Into<String>) -> Self {
        Self::NotFound(page_id.into())
    }

    /// Create an invalid record error with a message
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Create a publish failure with the sink's message
    pub fn publish_failed(msg: impl Into<String>) -> Self {
        Self::PublishFailed(msg.into())
    }

    /// Whether this error means the page does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for ordering operations
pub type Result<T> = std::result::Result<T, OrderingError>;
