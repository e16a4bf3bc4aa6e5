// crates/lexicard-cli/src/config.rs
// ============================================================================
// Module: Lexicard Configuration
// Description: Configuration loading and validation for the Lexicard CLI.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: lexicard-catalog, serde, toml
// ============================================================================

//! ## Overview
//! The CLI reads an optional `lexicard.toml` describing where locale catalog
//! files live and which policies apply. Configuration is untrusted input:
//! loading enforces the same path, size, and encoding limits as the catalog
//! source and fails closed on anything invalid.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use lexicard_catalog::DuplicatePolicy;
use lexicard_catalog::LocaleId;
use lexicard_catalog::source::MAX_PATH_COMPONENT_LENGTH;
use lexicard_catalog::source::MAX_TOTAL_PATH_LENGTH;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "lexicard.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "LEXICARD_CONFIG";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;

/// Default catalog directory relative to the working directory.
fn default_catalog_dir() -> String {
    "i18n".to_string()
}

/// Default locale used as the parity baseline and registry fallback.
fn default_locale() -> String {
    "en".to_string()
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Duplicate-key policy selection in configuration files.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicyConfig {
    /// Fail the load on any duplicate key (default).
    #[default]
    Reject,
    /// Keep the later definition of a duplicated key.
    LastWriteWins,
}

impl From<DuplicatePolicyConfig> for DuplicatePolicy {
    fn from(value: DuplicatePolicyConfig) -> Self {
        match value {
            DuplicatePolicyConfig::Reject => Self::Reject,
            DuplicatePolicyConfig::LastWriteWins => Self::LastWriteWins,
        }
    }
}

/// Lexicard CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LexicardConfig {
    /// Directory scanned for `<locale>.messages` catalog files.
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
    /// Default locale for parity baselines and registry fallback.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Duplicate-key policy applied when loading catalogs.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicyConfig,
}

impl Default for LexicardConfig {
    fn default() -> Self {
        Self {
            catalog_dir: default_catalog_dir(),
            default_locale: default_locale(),
            duplicate_policy: DuplicatePolicyConfig::default(),
        }
    }
}

impl LexicardConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string("catalog_dir", &self.catalog_dir)?;
        if LocaleId::parse(&self.default_locale).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default_locale `{}` is not a valid locale",
                self.default_locale
            )));
        }
        Ok(())
    }

    /// Returns the configured catalog directory as a path.
    #[must_use]
    pub fn catalog_dir(&self) -> &Path {
        Path::new(&self.catalog_dir)
    }

    /// Returns the configured default locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the locale does not parse;
    /// unreachable after [`LexicardConfig::validate`].
    pub fn locale(&self) -> Result<LocaleId, ConfigError> {
        LocaleId::parse(&self.default_locale).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "default_locale `{}` is not a valid locale",
                self.default_locale
            ))
        })
    }

    /// Returns the configured duplicate policy.
    #[must_use]
    pub fn policy(&self) -> DuplicatePolicy {
        self.duplicate_policy.into()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let path = Path::new(trimmed);
    for component in path.components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}
