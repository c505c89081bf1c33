//! Structured logging setup
//!
//! Built on `tracing-subscriber`. `RUST_LOG` takes precedence when set;
//! otherwise the configured level applies to this crate only. The
//! subscriber is installed at most once per process.
//!
//! ```no_run
//! use zeroconf_builders::util::logging;
//!
//! logging::init_from_env();
//! tracing::debug!(files = 12, "Scanning project");
//! ```

use crate::config::{ConfigError, DetectorConfig};
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const CRATE_TARGET: &str = "zeroconf_builders";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Emit JSON lines instead of console text
    pub use_json: bool,

    /// Include the module target in each line
    pub include_target: bool,

    /// Include file and line number
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Level and format from a detector config; an unknown level is an error.
    pub fn from_config(config: &DetectorConfig) -> Result<Self, ConfigError> {
        let level = try_parse_level(&config.log_level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(config.log_level.clone()))?;

        Ok(Self {
            level,
            use_json: config.log_json,
            ..Default::default()
        })
    }
}

/// Strict level lookup, case-insensitive.
pub fn try_parse_level(level_str: &str) -> Option<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Parses a level name case-insensitively, defaulting to `INFO`.
///
/// ```
/// use zeroconf_builders::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("nope"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    try_parse_level(level_str).unwrap_or_else(|| {
        eprintln!(
            "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
            level_str
        );
        Level::INFO
    })
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    match format!("{}={}", CRATE_TARGET, level).parse() {
        Ok(directive) => EnvFilter::default().add_directive(directive),
        Err(_) => EnvFilter::new(level.to_string()),
    }
}

/// Installs the global subscriber; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Reads `ZEROCONF_LOG_LEVEL` and `ZEROCONF_LOG_JSON` through [`DetectorConfig`].
///
/// An unknown level falls back to `INFO` with a warning.
pub fn init_from_env() {
    let config = DetectorConfig::default();

    init_logging(LoggingConfig {
        level: parse_level(&config.log_level),
        use_json: config.log_json,
        ..Default::default()
    });
}
