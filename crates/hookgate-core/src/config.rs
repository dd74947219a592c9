//! Authorizer configuration.
//!
//! Driven by environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOOKGATE_COMPARISON` | `constant-time` | `constant-time` or `legacy` |
//! | `HOOKGATE_DUAL_HEADER_POLICY` | `reject` | `reject` or `prefer-signature` |
//! | `HOOKGATE_PRINCIPAL_ID` | `me` | Principal reported in the grant |
//! | `HOOKGATE_REJECT_EMPTY_SECRET` | `false` | Deny GitHub requests when `GithubSecret` is empty |

use std::env;
use std::fmt;

use hookgate_auth::ComparisonMode;
use hookgate_model::policy::DEFAULT_PRINCIPAL_ID;

use crate::error::ConfigError;

const COMPARISON_VAR: &str = "HOOKGATE_COMPARISON";
const DUAL_HEADER_POLICY_VAR: &str = "HOOKGATE_DUAL_HEADER_POLICY";
const PRINCIPAL_ID_VAR: &str = "HOOKGATE_PRINCIPAL_ID";
const REJECT_EMPTY_SECRET_VAR: &str = "HOOKGATE_REJECT_EMPTY_SECRET";

/// What to do when a request carries both `X-Hub-Signature` and `X-Hook-UUID`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DualHeaderPolicy {
    /// Deny the request.
    #[default]
    Reject,
    /// Evaluate only the GitHub signature and ignore `X-Hook-UUID`.
    PreferSignature,
}

impl DualHeaderPolicy {
    /// Parse a policy from its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "prefer-signature" | "prefer_signature" => Some(Self::PreferSignature),
            _ => None,
        }
    }

    /// The configuration name of this policy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::PreferSignature => "prefer-signature",
        }
    }
}

impl fmt::Display for DualHeaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerConfig {
    /// How signatures and hook UUIDs are compared.
    pub comparison: ComparisonMode,
    /// Handling of requests that carry both trust headers.
    pub dual_header_policy: DualHeaderPolicy,
    /// Principal attached to every grant.
    pub principal_id: String,
    /// Treat an empty `GithubSecret` as missing instead of as an empty HMAC key.
    pub reject_empty_secret: bool,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            comparison: ComparisonMode::default(),
            dual_header_policy: DualHeaderPolicy::default(),
            principal_id: DEFAULT_PRINCIPAL_ID.to_owned(),
            reject_empty_secret: false,
        }
    }
}

impl AuthorizerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(COMPARISON_VAR) {
            config.comparison = ComparisonMode::from_name(&v).ok_or(ConfigError::InvalidValue {
                key: COMPARISON_VAR,
                value: v,
            })?;
        }
        if let Some(v) = lookup(DUAL_HEADER_POLICY_VAR) {
            config.dual_header_policy =
                DualHeaderPolicy::from_name(&v).ok_or(ConfigError::InvalidValue {
                    key: DUAL_HEADER_POLICY_VAR,
                    value: v,
                })?;
        }
        if let Some(v) = lookup(PRINCIPAL_ID_VAR) {
            let v = v.trim();
            if !v.is_empty() {
                config.principal_id = v.to_owned();
            }
        }
        if let Some(v) = lookup(REJECT_EMPTY_SECRET_VAR) {
            config.reject_empty_secret = parse_flag(&v).ok_or(ConfigError::InvalidValue {
                key: REJECT_EMPTY_SECRET_VAR,
                value: v,
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
