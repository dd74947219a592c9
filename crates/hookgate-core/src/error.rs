//! Error types for the HookGate core.

/// Errors raised while loading [`AuthorizerConfig`](crate::AuthorizerConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds an unrecognized value.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// The variable name.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}
