//! Configuration management for the expense tracker
//!
//! This module handles loading, validation, and management of
//! tracker configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Input validation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Largest amount accepted for a single transaction
    #[serde(default = "default_max_amount")]
    pub max_amount: f64,
    /// Accepted categories; empty accepts any non-empty category
    #[serde(default)]
    pub allowed_categories: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_amount: default_max_amount(),
            allowed_categories: vec![],
        }
    }
}

fn default_max_amount() -> f64 {
    1000.0
}

/// Filter settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// Tolerance used by amount filters (0.0 = exact match)
    #[serde(default)]
    pub amount_tolerance: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Filter settings
    #[serde(default)]
    pub filter: FilterConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
            message: e.to_string(),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let max_amount = self.validation.max_amount;
        if !max_amount.is_finite() || max_amount <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "validation.max_amount".to_string(),
                reason: "Maximum amount must be a finite number greater than 0".to_string(),
            });
        }

        if self
            .validation
            .allowed_categories
            .iter()
            .any(|c| c.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "validation.allowed_categories".to_string(),
                reason: "Allowed categories must not be blank".to_string(),
            });
        }

        let tolerance = self.filter.amount_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "filter.amount_tolerance".to_string(),
                reason: "Tolerance must be a finite number and not negative".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================
