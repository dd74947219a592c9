//! Bitbucket webhook verification.
//!
//! Bitbucket does not sign payloads. Each delivery carries the hook's UUID in
//! `X-Hook-UUID`, and the request is trusted when it equals the configured
//! hook ID.

use tracing::debug;

use crate::compare::ComparisonMode;
use crate::error::AuthError;

/// Header carrying the Bitbucket hook UUID.
pub const BITBUCKET_UUID_HEADER: &str = "X-Hook-UUID";

/// Verify an `X-Hook-UUID` value against the expected hook ID.
///
/// # Errors
///
/// Returns [`AuthError::TokenDoesNotMatch`] if the values differ.
pub fn verify_bitbucket_hook(
    expected: &str,
    provided: &str,
    mode: ComparisonMode,
) -> Result<(), AuthError> {
    if mode.matches(provided, expected) {
        debug!(%mode, "Bitbucket hook UUID verified");
        Ok(())
    } else {
        debug!(%mode, "Bitbucket hook UUID mismatch");
        Err(AuthError::TokenDoesNotMatch)
    }
}
