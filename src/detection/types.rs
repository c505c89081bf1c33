use serde::{Deserialize, Serialize};
use std::fmt;

/// Options handed to a builder alongside its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderConfig {
    /// The builder was picked by inference rather than user configuration
    #[serde(default)]
    pub zero_config: bool,
}

impl BuilderConfig {
    pub const fn zero_config() -> Self {
        Self { zero_config: true }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::zero_config()
    }
}

/// Identifier of an external builder implementation, e.g. `@now/node@canary`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuilderUse(String);

impl BuilderUse {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier without the version tag.
    pub fn package(&self) -> &str {
        match self.tag_offset() {
            Some(at) => &self.0[..at],
            None => &self.0,
        }
    }

    /// Version tag after the last `@`, ignoring a leading scope marker.
    pub fn tag(&self) -> Option<&str> {
        self.tag_offset().map(|at| &self.0[at + 1..])
    }

    fn tag_offset(&self) -> Option<usize> {
        match self.0.rfind('@') {
            Some(0) | None => None,
            Some(at) => Some(at),
        }
    }
}

impl fmt::Display for BuilderUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuilderUse {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A build strategy assigned to a file or glob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    pub src: String,
    #[serde(rename = "use")]
    pub use_: BuilderUse,
    #[serde(default)]
    pub config: BuilderConfig,
}

impl Builder {
    pub fn new(src: impl Into<String>, use_: impl Into<BuilderUse>) -> Self {
        Self {
            src: src.into(),
            use_: use_.into(),
            config: BuilderConfig::zero_config(),
        }
    }

    /// Same builder bound to a different source.
    pub fn with_src(&self, src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            use_: self.use_.clone(),
            config: self.config.clone(),
        }
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.use_)
    }
}

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MissingBuildScript,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingBuildScript => "missing_build_script",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const MISSING_BUILD_SCRIPT_MESSAGE: &str = "Your `package.json` file is missing a `build` property inside the `script` property.\nMore details: https://zeit.co/docs/v2/advanced/platform/frequently-asked-questions#missing-build-script";

/// A project mis-configuration reported instead of a guessed plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationError {
    pub code: String,
    pub message: String,
}

impl ConfigurationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            message: message.into(),
        }
    }

    pub fn missing_build_script() -> Self {
        Self::new(ErrorCode::MissingBuildScript, MISSING_BUILD_SCRIPT_MESSAGE)
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code.as_str()
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Outcome of builder detection.
///
/// Both fields are `None` rather than empty when there is nothing of that
/// kind. At most one of them is ever `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub builders: Option<Vec<Builder>>,
    pub errors: Option<Vec<ConfigurationError>>,
}

impl DetectionResult {
    pub fn from_builders(builders: Vec<Builder>) -> Self {
        Self {
            builders: (!builders.is_empty()).then_some(builders),
            errors: None,
        }
    }

    pub fn from_errors(errors: Vec<ConfigurationError>) -> Self {
        Self {
            builders: None,
            errors: (!errors.is_empty()).then_some(errors),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    pub fn builders(&self) -> &[Builder] {
        self.builders.as_deref().unwrap_or_default()
    }

    pub fn errors(&self) -> &[ConfigurationError] {
        self.errors.as_deref().unwrap_or_default()
    }
}
