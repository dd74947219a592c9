//! API Gateway authorizer event and policy types for HookGate.
//!
//! This crate defines the wire shapes exchanged with API Gateway when HookGate
//! runs as a `REQUEST` authorizer:
//!
//! - [`request`] - The inbound authorizer event ([`AuthorizationRequest`])
//! - [`policy`] - IAM policy documents and the authorizer response
//! - [`decision`] - The admit/deny outcome and the resource-scoped [`Grant`]
//! - [`error`] - Event parsing errors

pub mod decision;
pub mod error;
pub mod policy;
pub mod request;

pub use decision::{AuthorizationDecision, Grant, Unauthorized};
pub use error::ModelError;
pub use policy::{AuthorizerResponse, Effect, PolicyDocument, Statement, generate_policy};
pub use request::{AuthorizationRequest, TrustVariables};
