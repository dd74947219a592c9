//! GitHub and Bitbucket webhook verification for HookGate.
//!
//! Webhook providers prove a delivery came from them in one of two ways:
//!
//! - **GitHub** signs the raw body with HMAC-SHA1 using a shared secret and
//!   sends `sha1=<hex>` in the `X-Hub-Signature` header.
//! - **Bitbucket** sends the hook's UUID in the `X-Hook-UUID` header, which
//!   is compared with the expected value.
//!
//! [`TrustHeader::detect`] picks the strategy from the headers that are
//! present. [`verify_github_signature`] and [`verify_bitbucket_hook`] run it.
//!
//! # Usage
//!
//! ```rust
//! use hookgate_auth::{ComparisonMode, sign_github_payload, verify_github_signature};
//!
//! let body = br#"{"action":"opened"}"#;
//! let signature = sign_github_payload("s3cr3t", body).unwrap();
//! assert!(verify_github_signature("s3cr3t", body, &signature, ComparisonMode::ConstantTime).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`bitbucket`] - Shared-token verification (`X-Hook-UUID`)
//! - [`compare`] - Constant-time and legacy string comparison
//! - [`error`] - Authentication error types
//! - [`github`] - HMAC-SHA1 signing and verification (`X-Hub-Signature`)
//! - [`provider`] - Trust header detection

pub mod bitbucket;
pub mod compare;
pub mod error;
pub mod github;
pub mod provider;

pub use bitbucket::{BITBUCKET_UUID_HEADER, verify_bitbucket_hook};
pub use compare::ComparisonMode;
pub use error::AuthError;
pub use github::{GITHUB_SIGNATURE_HEADER, sign_github_payload, verify_github_signature};
pub use provider::{Provider, TrustHeader};
