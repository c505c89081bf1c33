//! zeroconf-builders - builder inference for projects without build configuration
//!
//! Given a project's file list and its optional `package.json`, this library
//! decides which files under `api/` become individually built serverless
//! functions, which single builder handles the rest of the project, and when
//! the project is mis-configured in a way that must be reported instead of
//! guessed.
//!
//! # Example
//!
//! ```
//! use zeroconf_builders::{detect_builders, Manifest};
//!
//! let files = ["api/hello.js", "package.json"];
//! let manifest = Manifest::default();
//!
//! let result = detect_builders(&files, Some(&manifest));
//! let builders = result.builders.unwrap();
//! assert_eq!(builders[0].src, "api/hello.js");
//! assert_eq!(builders[0].use_.as_str(), "@now/node@canary");
//! ```
//!
//! # Project Structure
//!
//! - [`detection`]: registry tables and the detection pipeline
//! - [`manifest`]: the `package.json` fields detection reads
//! - [`scanner`]: file listing used by the CLI
//! - [`config`]: environment-driven settings

pub mod cli;
pub mod config;
pub mod detection;
pub mod manifest;
pub mod scanner;
pub mod util;

pub use config::{ConfigError, DetectorConfig};
pub use detection::{
    detect_builders, Builder, BuilderConfig, BuilderDetector, BuilderUse, ConfigurationError,
    DetectionResult, ErrorCode, PatternRegistry,
};
pub use manifest::{Manifest, ManifestError};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
