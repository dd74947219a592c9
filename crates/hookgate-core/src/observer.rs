//! Decision observers.
//!
//! The engine reports every request and outcome to a [`DecisionObserver`].
//! Observers cannot influence the decision. They receive no secret material
//! beyond what the request itself holds, and [`TracingObserver`] logs none of
//! it.

use hookgate_auth::{AuthError, Provider};
use hookgate_model::{AuthorizationRequest, Grant};
use tracing::{debug, info, warn};

/// Receives diagnostic callbacks from the decision engine.
pub trait DecisionObserver: Send + Sync {
    /// Called once per request before evaluation.
    fn on_request(&self, request: &AuthorizationRequest, provider: Provider);

    /// Called once per request with the evaluation outcome.
    fn on_decision(
        &self,
        request: &AuthorizationRequest,
        provider: Provider,
        outcome: &Result<Grant, AuthError>,
    );
}

/// Observer that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn on_request(&self, request: &AuthorizationRequest, provider: Provider) {
        let mut header_names: Vec<&str> = request.headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();

        debug!(
            method_arn = %request.routing_identifier,
            %provider,
            headers = ?header_names,
            body_len = request.body.len(),
            github_secret_set = request.trust_variables.github_secret().is_some(),
            hook_id_set = request.trust_variables.hook_id().is_some(),
            "received authorization request",
        );
    }

    fn on_decision(
        &self,
        request: &AuthorizationRequest,
        provider: Provider,
        outcome: &Result<Grant, AuthError>,
    ) {
        match outcome {
            Ok(grant) => info!(
                method_arn = %request.routing_identifier,
                %provider,
                resource = %grant.resource(),
                principal_id = %grant.principal_id(),
                "request allowed",
            ),
            Err(reason) => warn!(
                method_arn = %request.routing_identifier,
                %provider,
                %reason,
                "request denied",
            ),
        }
    }
}

/// Observer that discards all callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DecisionObserver for NoopObserver {
    fn on_request(&self, _request: &AuthorizationRequest, _provider: Provider) {}

    fn on_decision(
        &self,
        _request: &AuthorizationRequest,
        _provider: Provider,
        _outcome: &Result<Grant, AuthError>,
    ) {
    }
}
