//! Configuration management for zeroconf
//!
//! Settings come from environment variables with defaults.
//!
//! # Environment Variables
//!
//! - `ZEROCONF_MANIFEST`: Manifest file name relative to the project root - default: "package.json"
//! - `ZEROCONF_LOG_LEVEL`: Logging level - default: "info"
//! - `ZEROCONF_MAX_FILES`: Maximum number of files the scanner lists - default: "10000"
//! - `ZEROCONF_LOG_JSON`: Emit log lines as JSON (true/false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use zeroconf_builders::DetectorConfig;
//!
//! let config = DetectorConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::detection::registry::DEFAULT_MANIFEST;
use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_FILES: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid manifest path: {0}. Expected a relative path without '..' segments")]
    InvalidManifestPath(String),

    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Manifest location; also the `src` of the project builder
    pub manifest_path: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Upper bound on files gathered by the project scanner
    pub max_files: usize,

    /// Emit JSON log lines instead of console text
    pub log_json: bool,
}

impl Default for DetectorConfig {
    /// Loads `ZEROCONF_*` variables, falling back to defaults.
    ///
    /// Unparseable numbers fall back silently; use [`DetectorConfig::from_env`]
    /// to surface them.
    fn default() -> Self {
        let manifest_path =
            env::var("ZEROCONF_MANIFEST").unwrap_or_else(|_| DEFAULT_MANIFEST.to_string());

        let log_level = env::var("ZEROCONF_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let max_files = env::var("ZEROCONF_MAX_FILES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_FILES);

        let log_json = env::var("ZEROCONF_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            manifest_path,
            log_level,
            max_files,
            log_json,
        }
    }
}

impl DetectorConfig {
    /// Strict variant of `Default`: malformed values are errors, and the
    /// result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("ZEROCONF_MAX_FILES") {
            config.max_files = raw.parse::<usize>().map_err(|e| ConfigError::ParseError {
                field: "ZEROCONF_MAX_FILES".to_string(),
                error: e.to_string(),
            })?;
        }

        if let Ok(raw) = env::var("ZEROCONF_LOG_JSON") {
            config.log_json = raw.parse::<bool>().map_err(|e| ConfigError::ParseError {
                field: "ZEROCONF_LOG_JSON".to_string(),
                error: e.to_string(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_manifest_path(mut self, manifest_path: impl Into<String>) -> Self {
        self.manifest_path = manifest_path.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let path = self.manifest_path.as_str();
        if path.is_empty()
            || path.starts_with('/')
            || path.split('/').any(|segment| segment == "..")
        {
            return Err(ConfigError::InvalidManifestPath(path.to_string()));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(ConfigError::InvalidLogLevel(self.log_level.clone())),
        }

        if self.max_files == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max files must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("manifest_path".to_string(), self.manifest_path.clone());
        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("max_files".to_string(), self.max_files.to_string());
        map.insert("log_json".to_string(), self.log_json.to_string());
        map
    }
}

impl fmt::Display for DetectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Zeroconf Configuration:")?;
        writeln!(f, "  Manifest: {}", self.manifest_path)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Max Files: {}", self.max_files)?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        Ok(())
    }
}
