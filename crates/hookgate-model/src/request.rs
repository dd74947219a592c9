//! Inbound authorizer event.
//!
//! API Gateway sends `null` for `headers`, `body` and `stageVariables` when
//! they are absent. All three fields treat `null` the same as a missing key
//! and fall back to an empty value. Unknown event fields (`type`,
//! `requestContext`, `multiValueHeaders`, ...) are ignored.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// Stage variable holding the GitHub webhook secret.
pub const GITHUB_SECRET_VARIABLE: &str = "GithubSecret";

/// Stage variable holding the expected Bitbucket hook UUID.
pub const HOOK_ID_VARIABLE: &str = "HookID";

/// A `REQUEST` authorizer event as delivered by API Gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorizationRequest {
    /// Request headers, keyed exactly as delivered (no case folding).
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,

    /// Raw request payload. Only ever used as signing input.
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,

    /// The invoked method ARN, e.g.
    /// `arn:aws:execute-api:eu-west-1:130217157771:jr7vqbm836/v1/POST/build`.
    #[serde(rename = "methodArn", default, deserialize_with = "null_as_default")]
    pub routing_identifier: String,

    /// Stage variables carrying the webhook secrets.
    #[serde(
        rename = "stageVariables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub trust_variables: TrustVariables,
}

impl AuthorizationRequest {
    /// Create a request for the given method ARN with no headers, body or secrets.
    pub fn new(routing_identifier: impl Into<String>) -> Self {
        Self {
            routing_identifier: routing_identifier.into(),
            ..Self::default()
        }
    }

    /// Parse an authorizer event from its JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the trust variables.
    #[must_use]
    pub fn with_trust_variables(mut self, trust_variables: TrustVariables) -> Self {
        self.trust_variables = trust_variables;
        self
    }

    /// Look up a header by its exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Secrets and expected values supplied through stage variables.
///
/// The `Debug` output never includes the secret values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustVariables {
    /// Shared HMAC key for GitHub webhooks.
    #[serde(
        rename = "GithubSecret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub github_secret: Option<String>,

    /// Expected `X-Hook-UUID` value for Bitbucket webhooks.
    #[serde(rename = "HookID", default, skip_serializing_if = "Option::is_none")]
    pub hook_id: Option<String>,
}

impl TrustVariables {
    /// Trust variables with only a GitHub secret.
    pub fn github(secret: impl Into<String>) -> Self {
        Self {
            github_secret: Some(secret.into()),
            hook_id: None,
        }
    }

    /// Trust variables with only a Bitbucket hook ID.
    pub fn bitbucket(hook_id: impl Into<String>) -> Self {
        Self {
            github_secret: None,
            hook_id: Some(hook_id.into()),
        }
    }

    /// The GitHub secret, if set. An empty string is a valid HMAC key.
    #[must_use]
    pub fn github_secret(&self) -> Option<&str> {
        self.github_secret.as_deref()
    }

    /// The Bitbucket hook ID, if set.
    #[must_use]
    pub fn hook_id(&self) -> Option<&str> {
        self.hook_id.as_deref()
    }
}

impl fmt::Debug for TrustVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustVariables")
            .field("github_secret", &self.github_secret.as_ref().map(|_| "..."))
            .field("hook_id", &self.hook_id.as_ref().map(|_| "..."))
            .finish()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
