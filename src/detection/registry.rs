//! Pattern registry for zero-config builder lookup
//!
//! Both tables are ordered: the first matching entry wins.

use super::types::Builder;
use crate::manifest::Manifest;
use glob::{MatchOptions, Pattern};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::warn;

pub const DEFAULT_MANIFEST: &str = "package.json";
pub const STATIC_BUILDER: &str = "@now/static";
pub const STATIC_BUILD_BUILDER: &str = "@now/static-build";
pub const PUBLIC_DIR: &str = "public/";
pub const PUBLIC_GLOB: &str = "public/**/*";
pub const API_DIR: &str = "api/";

/// Framework builder keyed by the manifest dependency that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameworkEntry {
    pub dependency: &'static str,
    #[serde(rename = "use")]
    pub use_: &'static str,
}

/// Per-language function builder for files under `api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiEntry {
    pub pattern: &'static str,
    #[serde(rename = "use")]
    pub use_: &'static str,
}

pub const FRAMEWORK_BUILDERS: &[FrameworkEntry] = &[
    FrameworkEntry {
        dependency: "next",
        use_: "@now/next",
    },
    FrameworkEntry {
        dependency: "nuxt",
        use_: "@now/nuxt",
    },
];

pub const API_BUILDERS: &[ApiEntry] = &[
    ApiEntry {
        pattern: "api/**/*.js",
        use_: "@now/node@canary",
    },
    ApiEntry {
        pattern: "api/**/*.ts",
        use_: "@now/node@canary",
    },
    ApiEntry {
        pattern: "api/**/*.rs",
        use_: "@now/rust",
    },
    ApiEntry {
        pattern: "api/**/*.go",
        use_: "@now/go",
    },
    ApiEntry {
        pattern: "api/**/*.php",
        use_: "@now/php",
    },
    ApiEntry {
        pattern: "api/**/*.py",
        use_: "@now/python",
    },
    ApiEntry {
        pattern: "api/**/*.rb",
        use_: "@now/ruby",
    },
    ApiEntry {
        pattern: "api/**/*.sh",
        use_: "@now/bash",
    },
];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Compiled view over [`FRAMEWORK_BUILDERS`] and [`API_BUILDERS`].
pub struct PatternRegistry {
    frameworks: &'static [FrameworkEntry],
    api: Vec<(Pattern, ApiEntry)>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::with_tables(FRAMEWORK_BUILDERS, API_BUILDERS)
    }

    pub fn with_tables(frameworks: &'static [FrameworkEntry], api: &[ApiEntry]) -> Self {
        let api = api
            .iter()
            .filter_map(|entry| match Pattern::new(entry.pattern) {
                Ok(pattern) => Some((pattern, *entry)),
                Err(e) => {
                    warn!(pattern = entry.pattern, error = %e, "Skipping invalid API pattern");
                    None
                }
            })
            .collect();

        Self { frameworks, api }
    }

    /// Process-wide registry over the built-in tables.
    pub fn global() -> &'static PatternRegistry {
        static REGISTRY: OnceLock<PatternRegistry> = OnceLock::new();
        REGISTRY.get_or_init(PatternRegistry::new)
    }

    pub fn frameworks(&self) -> &'static [FrameworkEntry] {
        self.frameworks
    }

    pub fn api_entries(&self) -> impl Iterator<Item = &ApiEntry> {
        self.api.iter().map(|(_, entry)| entry)
    }

    /// First API entry whose pattern matches `path`.
    pub fn match_api(&self, path: &str) -> Option<&ApiEntry> {
        self.api
            .iter()
            .find(|(pattern, _)| pattern.matches_with(path, MATCH_OPTIONS))
            .map(|(_, entry)| entry)
    }

    pub fn is_api_file(&self, path: &str) -> bool {
        self.match_api(path).is_some()
    }

    /// First framework whose dependency the manifest declares.
    pub fn match_framework(&self, manifest: &Manifest) -> Option<&'static FrameworkEntry> {
        let frameworks: &'static [FrameworkEntry] = self.frameworks;
        frameworks
            .iter()
            .find(|entry| manifest.has_dependency(entry.dependency))
    }

    pub fn framework_builder(&self, manifest: &Manifest, manifest_path: &str) -> Option<Builder> {
        self.match_framework(manifest)
            .map(|entry| Builder::new(manifest_path, entry.use_))
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[test]
    fn test_all_builtin_patterns_compile() {
        let registry = PatternRegistry::new();
        assert_eq!(registry.api_entries().count(), API_BUILDERS.len());
    }

    #[parameterized(
        js = { "api/hello.js", "@now/node@canary" },
        ts_nested = { "api/users/[id].ts", "@now/node@canary" },
        rust = { "api/date.rs", "@now/rust" },
        go = { "api/deep/nested/handler.go", "@now/go" },
        php = { "api/index.php", "@now/php" },
        python = { "api/index.py", "@now/python" },
        ruby = { "api/index.rb", "@now/ruby" },
        bash = { "api/index.sh", "@now/bash" },
    )]
    fn test_match_api(path: &str, expected: &str) {
        let registry = PatternRegistry::new();
        let entry = registry.match_api(path).unwrap();
        assert_eq!(entry.use_, expected);
    }

    #[parameterized(
        outside_api = { "src/index.js" },
        unknown_extension = { "api/readme.md" },
        api_prefix_only = { "apis/index.js" },
        manifest = { "package.json" },
        hidden_leading_dot = { "api/.env.js" },
    )]
    fn test_no_api_match(path: &str) {
        assert!(!PatternRegistry::new().is_api_file(path));
    }

    #[test]
    fn test_first_api_entry_wins() {
        static OVERLAPPING: &[ApiEntry] = &[
            ApiEntry {
                pattern: "api/**/*",
                use_: "first",
            },
            ApiEntry {
                pattern: "api/**/*.js",
                use_: "second",
            },
        ];
        let registry = PatternRegistry::with_tables(FRAMEWORK_BUILDERS, OVERLAPPING);
        assert_eq!(registry.match_api("api/a.js").unwrap().use_, "first");
    }

    #[test]
    fn test_framework_order_is_precedence() {
        let manifest = Manifest::default()
            .with_dependency("nuxt", "^2.0.0")
            .with_dependency("next", "^9.0.0");

        let registry = PatternRegistry::new();
        let builder = registry.framework_builder(&manifest, DEFAULT_MANIFEST).unwrap();
        assert_eq!(builder.use_.as_str(), "@now/next");
        assert_eq!(builder.src, "package.json");
        assert!(builder.config.zero_config);
    }

    #[test]
    fn test_framework_from_dev_dependencies() {
        let manifest = Manifest::default().with_dev_dependency("nuxt", "^2.0.0");
        let entry = PatternRegistry::new().match_framework(&manifest).unwrap();
        assert_eq!(entry.dependency, "nuxt");
    }

    #[test]
    fn test_framework_entry_outlives_registry() {
        let manifest = Manifest::default().with_dependency("next", "^9.0.0");
        let entry = {
            let registry = PatternRegistry::new();
            registry.match_framework(&manifest)
        };
        assert_eq!(entry, Some(&FRAMEWORK_BUILDERS[0]));
    }

    #[test]
    fn test_no_framework() {
        let manifest = Manifest::default().with_dependency("react", "^16.0.0");
        assert!(PatternRegistry::new().match_framework(&manifest).is_none());
    }
}
