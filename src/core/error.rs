//! Error types for the bottom sheet.
//!
//! Gesture handling never fails: out-of-order or partial touch sequences are
//! no-ops. The only reportable failure is a bad configuration, caught when
//! the sheet is constructed.

use thiserror::Error;

/// Sheet configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required option was not supplied.
    #[error("missing required option `{0}`")]
    MissingField(&'static str),
    /// `customHeight` must be a positive, finite pixel value.
    #[error("invalid custom height: {0}")]
    InvalidHeight(f64),
    /// Options could not be parsed.
    #[error("invalid sheet options: {0}")]
    Parse(#[from] serde_json::Error),
}
