//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse or the merged figment could not be
    /// extracted.
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section required for the requested operation is missing fields.
    #[error("configuration section '{section}' is not configured")]
    NotConfigured { section: String },
}
