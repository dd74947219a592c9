//! The authorizer outcome.

use crate::policy::{
    AuthorizerResponse, DEFAULT_PRINCIPAL_ID, Effect, INVOKE_ACTION, POLICY_VERSION,
    generate_policy,
};

/// Permission to invoke exactly one resource.
///
/// A grant is minted per request from that request's method ARN and is not
/// `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct Grant {
    principal_id: String,
    resource: String,
}

impl Grant {
    /// Create a grant for `resource`.
    pub fn new(principal_id: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
            resource: resource.into(),
        }
    }

    /// Create a grant for `resource` attributed to the default principal.
    pub fn for_resource(resource: impl Into<String>) -> Self {
        Self::new(DEFAULT_PRINCIPAL_ID, resource)
    }

    /// The principal the grant is attributed to.
    #[must_use]
    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }

    /// The granted resource path.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Always [`Effect::Allow`].
    #[must_use]
    pub const fn effect(&self) -> Effect {
        Effect::Allow
    }

    /// Always `execute-api:Invoke`.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        INVOKE_ACTION
    }

    /// Always `2012-10-17`.
    #[must_use]
    pub const fn policy_version(&self) -> &'static str {
        POLICY_VERSION
    }

    /// Render the grant as an authorizer response.
    #[must_use]
    pub fn to_response(&self) -> AuthorizerResponse {
        generate_policy(&self.principal_id, Some(self.effect()), Some(&self.resource))
    }
}

/// The distinguished failure signal returned to API Gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unauthorized")]
pub struct Unauthorized;

/// Result of authorizing one request.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum AuthorizationDecision {
    /// The request is admitted for the granted resource.
    Allowed(Grant),
    /// The request is rejected.
    Denied,
}

impl AuthorizationDecision {
    /// Whether the request was admitted.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// The grant, if the request was admitted.
    #[must_use]
    pub fn grant(&self) -> Option<&Grant> {
        match self {
            Self::Allowed(grant) => Some(grant),
            Self::Denied => None,
        }
    }

    /// Convert into the authorizer's output contract.
    pub fn into_response(self) -> Result<AuthorizerResponse, Unauthorized> {
        match self {
            Self::Allowed(grant) => Ok(grant.to_response()),
            Self::Denied => Err(Unauthorized),
        }
    }
}
