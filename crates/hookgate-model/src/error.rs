//! Error types for authorizer event parsing.

/// Errors raised while reading an authorizer event.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The event is not valid JSON or does not match the authorizer event shape.
    #[error("invalid authorizer event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}
