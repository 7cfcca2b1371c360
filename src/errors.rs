//! Error handling for equity-analysis.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The risk ratio computation itself never errors — its abnormal conditions
//! are encoded in the [`crate::types::RiskRatio`] outcome domain. The only
//! fallible subsystem is configuration loading.

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
