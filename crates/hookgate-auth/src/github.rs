//! GitHub webhook signature verification.
//!
//! GitHub signs each delivery with the webhook secret:
//!
//! ```text
//! X-Hub-Signature: sha1=<hex(HMAC-SHA1(secret, body))>
//! ```
//!
//! Verification recomputes the header value from the raw body and compares
//! the whole string, prefix included.

use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use tracing::debug;

use crate::compare::ComparisonMode;
use crate::error::AuthError;

/// Header carrying the GitHub signature.
pub const GITHUB_SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Prefix of the `X-Hub-Signature` value.
pub const SIGNATURE_PREFIX: &str = "sha1=";

type HmacSha1 = Hmac<Sha1>;

/// Compute the `X-Hub-Signature` value for `body`: `sha1=` + lowercase hex HMAC-SHA1.
pub fn sign_github_payload(secret: &str, body: &[u8]) -> Result<String, AuthError> {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::InvalidSigningKey)?;
    mac.update(body);
    let digest = mac.finalize().into_bytes();
    Ok(format!("{SIGNATURE_PREFIX}{}", hex::encode(digest)))
}

/// Verify an `X-Hub-Signature` value against the raw body.
///
/// # Errors
///
/// Returns [`AuthError::SignatureDoesNotMatch`] if the signature differs, or
/// [`AuthError::InvalidSigningKey`] if the HMAC cannot be initialized.
pub fn verify_github_signature(
    secret: &str,
    body: &[u8],
    provided: &str,
    mode: ComparisonMode,
) -> Result<(), AuthError> {
    let expected = sign_github_payload(secret, body)?;

    if mode.matches(provided, &expected) {
        debug!(body_len = body.len(), %mode, "GitHub signature verified");
        Ok(())
    } else {
        debug!(body_len = body.len(), %mode, "GitHub signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}
