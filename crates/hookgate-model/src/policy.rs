//! IAM policy documents returned by the authorizer.
//!
//! The response follows the API Gateway Lambda authorizer output format:
//!
//! ```json
//! {
//!   "principalId": "me",
//!   "policyDocument": {
//!     "Version": "2012-10-17",
//!     "Statement": [
//!       { "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "/build" }
//!     ]
//!   }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// IAM policy language version.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The only action an authorizer grants.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Principal reported for every admitted webhook.
pub const DEFAULT_PRINCIPAL_ID: &str = "me";

/// Statement effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Grant the action.
    Allow,
    /// Refuse the action.
    Deny,
}

impl Effect {
    /// The IAM spelling of this effect.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    /// The action, always [`INVOKE_ACTION`] for authorizer output.
    pub action: String,
    /// Whether the action is allowed or denied.
    pub effect: Effect,
    /// The resource the statement applies to.
    pub resource: String,
}

/// An IAM policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// Policy language version.
    pub version: String,
    /// Policy statements.
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// A document with one `execute-api:Invoke` statement.
    pub fn invoke(effect: Effect, resource: impl Into<String>) -> Self {
        Self {
            version: POLICY_VERSION.to_owned(),
            statement: vec![Statement {
                action: INVOKE_ACTION.to_owned(),
                effect,
                resource: resource.into(),
            }],
        }
    }
}

/// Lambda authorizer response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    /// The principal the request is attributed to.
    pub principal_id: String,
    /// The policy, omitted when no effect or resource was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
}

impl AuthorizerResponse {
    /// Serialize the response to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build an authorizer response.
///
/// The policy document is only attached when both `effect` and `resource` are
/// present and the resource is non-empty.
#[must_use]
pub fn generate_policy(
    principal_id: &str,
    effect: Option<Effect>,
    resource: Option<&str>,
) -> AuthorizerResponse {
    let policy_document = match (effect, resource) {
        (Some(effect), Some(resource)) if !resource.is_empty() => {
            Some(PolicyDocument::invoke(effect, resource))
        }
        _ => None,
    };

    AuthorizerResponse {
        principal_id: principal_id.to_owned(),
        policy_document,
    }
}
