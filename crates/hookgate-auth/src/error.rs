//! Error types for webhook authentication.
//!
//! Every variant is a reason to deny the request. Callers log the reason and
//! return a bare `Unauthorized` to the client.

/// Errors that can occur while authenticating a webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Neither `X-Hub-Signature` nor `X-Hook-UUID` is present.
    #[error("No recognized trust header")]
    MissingTrustHeader,

    /// Both `X-Hub-Signature` and `X-Hook-UUID` are present.
    #[error("Conflicting trust headers")]
    AmbiguousTrustHeaders,

    /// The stage variable the selected strategy needs is missing or empty.
    #[error("Missing trust variable: {0}")]
    MissingTrustVariable(&'static str),

    /// The computed HMAC signature does not match `X-Hub-Signature`.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,

    /// `X-Hook-UUID` does not match the expected hook ID.
    #[error("Hook UUID does not match")]
    TokenDoesNotMatch,

    /// The HMAC primitive rejected the signing key.
    #[error("Invalid signing key")]
    InvalidSigningKey,
}
