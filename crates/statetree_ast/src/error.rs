//! Error types.

use thiserror::Error;

/// Errors that can occur while loading a [`TraversalConfig`].
///
/// [`TraversalConfig`]: crate::TraversalConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON or did not match the config shape.
    #[error("Invalid traversal configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}
