//! Configuration for equity analysis.
//!
//! Modeled as `#[serde(default)]` option fields with `effective_*()`
//! accessors, so a partial `equity.toml` merges over compiled defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Compiled default for the event type filter.
pub const DEFAULT_EVENT_TYPE: &str = "Suspension";

/// Environment variable overriding the default event type.
pub const ENV_DEFAULT_EVENT_TYPE: &str = "EQUITY_DEFAULT_EVENT_TYPE";

/// Analysis configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`EQUITY_*`)
/// 2. Project config (`equity.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EquityConfig {
    /// Event type used when the caller does not name one. Default: "Suspension".
    pub default_event_type: Option<String>,
}

impl EquityConfig {
    /// Returns the effective default event type, defaulting to "Suspension".
    pub fn effective_default_event_type(&self) -> &str {
        self.default_event_type
            .as_deref()
            .unwrap_or(DEFAULT_EVENT_TYPE)
    }

    /// Load configuration with layered resolution (env > `equity.toml` in
    /// `root` > compiled defaults). A missing project file falls back to
    /// defaults; a malformed one is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("equity.toml");
        if project_config_path.exists() {
            let raw =
                std::fs::read_to_string(&project_config_path).map_err(|e| ConfigError::Io {
                    path: project_config_path.display().to_string(),
                    source: e,
                })?;
            config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Self) {
        if let Ok(value) = std::env::var(ENV_DEFAULT_EVENT_TYPE) {
            if !value.is_empty() {
                config.default_event_type = Some(value);
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &Self) -> Result<(), ConfigError> {
        if let Some(ref event_type) = config.default_event_type {
            if event_type.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "default_event_type".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }
}
