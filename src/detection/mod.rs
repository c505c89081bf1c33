//! Zero-config builder detection
//!
//! Turns a project's file list and optional manifest into a declarative
//! build plan:
//!
//! 1. [`api`] assigns one function builder per source file under `api/`
//! 2. [`project`] picks a framework or static-build builder when the
//!    manifest declares a `build` script
//! 3. [`fallback`] serves static files otherwise, or reports the project
//!    as mis-configured
//!
//! [`service`] composes the steps. Lookup data lives in [`registry`].

pub mod api;
pub mod collate;
pub mod fallback;
pub mod project;
pub mod registry;
pub mod service;
pub mod types;

pub use registry::PatternRegistry;
pub use service::{detect_builders, BuilderDetector};
pub use types::{Builder, BuilderConfig, BuilderUse, ConfigurationError, DetectionResult, ErrorCode};
