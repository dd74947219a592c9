//! Authorization decision engine for HookGate.
//!
//! This crate turns an API Gateway authorizer event into an admit/deny
//! decision for GitHub and Bitbucket webhooks. On admission the grant is
//! scoped to the single resource named in the request's method ARN.
//!
//! ```rust
//! use hookgate_core::{AuthorizerConfig, DecisionEngine};
//! use hookgate_model::{AuthorizationRequest, TrustVariables};
//!
//! let engine = DecisionEngine::new(AuthorizerConfig::default());
//! let request = AuthorizationRequest::new(
//!     "arn:aws:execute-api:eu-west-1:130217157771:jr7vqbm836/v1/POST/build",
//! )
//! .with_header("X-Hook-UUID", "abc-123")
//! .with_trust_variables(TrustVariables::bitbucket("abc-123"));
//!
//! let decision = engine.decide(&request);
//! assert_eq!(decision.grant().map(|g| g.resource()), Some("/build"));
//! ```

pub mod config;
pub mod engine;
mod error;
pub mod observer;
pub mod resource;

pub use config::{AuthorizerConfig, DualHeaderPolicy};
pub use engine::{DecisionEngine, authorize};
pub use error::ConfigError;
pub use observer::{DecisionObserver, NoopObserver, TracingObserver};
pub use resource::resolve_resource;
