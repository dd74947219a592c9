//! The authorization decision engine.
//!
//! For each request the engine:
//!
//! 1. Resolves the resource to grant from the method ARN.
//! 2. Classifies the trust headers once ([`TrustHeader::detect`]).
//! 3. Runs the matching verifier with the stage-variable secret.
//! 4. Emits [`AuthorizationDecision::Allowed`] with a fresh [`Grant`], or
//!    [`AuthorizationDecision::Denied`].
//!
//! Every failure, including a missing secret or an HMAC fault, ends in
//! `Denied`.

use std::fmt;
use std::sync::Arc;

use hookgate_auth::{AuthError, TrustHeader, verify_bitbucket_hook, verify_github_signature};
use hookgate_model::request::{GITHUB_SECRET_VARIABLE, HOOK_ID_VARIABLE};
use hookgate_model::{AuthorizationDecision, AuthorizationRequest, Grant};

use crate::config::{AuthorizerConfig, DualHeaderPolicy};
use crate::observer::{DecisionObserver, TracingObserver};
use crate::resource::resolve_resource;

/// Stateless webhook authorizer.
#[derive(Clone)]
pub struct DecisionEngine {
    config: AuthorizerConfig,
    observer: Arc<dyn DecisionObserver>,
}

impl fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("config", &self.config)
            .field("observer", &"...")
            .finish()
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(AuthorizerConfig::default())
    }
}

impl DecisionEngine {
    /// Create an engine that reports through [`TracingObserver`].
    #[must_use]
    pub fn new(config: AuthorizerConfig) -> Self {
        Self {
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn DecisionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AuthorizerConfig {
        &self.config
    }

    /// Authorize one request.
    pub fn decide(&self, request: &AuthorizationRequest) -> AuthorizationDecision {
        let trust_header = TrustHeader::detect(&request.headers);
        let provider = trust_header.provider();

        self.observer.on_request(request, provider);
        let outcome = self.evaluate(request, trust_header);
        self.observer.on_decision(request, provider, &outcome);

        match outcome {
            Ok(grant) => AuthorizationDecision::Allowed(grant),
            Err(_) => AuthorizationDecision::Denied,
        }
    }

    /// Evaluate a request against already-classified trust headers.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] explaining why the request must be denied.
    pub fn evaluate(
        &self,
        request: &AuthorizationRequest,
        trust_header: TrustHeader<'_>,
    ) -> Result<Grant, AuthError> {
        let resource = resolve_resource(&request.routing_identifier);
        let mode = self.config.comparison;

        match (trust_header, self.config.dual_header_policy) {
            (TrustHeader::GitHub { signature }, _)
            | (TrustHeader::Both { signature, .. }, DualHeaderPolicy::PreferSignature) => {
                let secret = request
                    .trust_variables
                    .github_secret()
                    .filter(|s| !(self.config.reject_empty_secret && s.is_empty()))
                    .ok_or(AuthError::MissingTrustVariable(GITHUB_SECRET_VARIABLE))?;
                verify_github_signature(secret, request.body.as_bytes(), signature, mode)?;
            }
            (TrustHeader::Bitbucket { hook_uuid }, _) => {
                let hook_id = request
                    .trust_variables
                    .hook_id()
                    .ok_or(AuthError::MissingTrustVariable(HOOK_ID_VARIABLE))?;
                verify_bitbucket_hook(hook_id, hook_uuid, mode)?;
            }
            (TrustHeader::Both { .. }, DualHeaderPolicy::Reject) => {
                return Err(AuthError::AmbiguousTrustHeaders);
            }
            (TrustHeader::Absent, _) => return Err(AuthError::MissingTrustHeader),
        }

        Ok(Grant::new(self.config.principal_id.as_str(), resource))
    }
}

/// Authorize a request with the default configuration.
pub fn authorize(request: &AuthorizationRequest) -> AuthorizationDecision {
    DecisionEngine::default().decide(request)
}
