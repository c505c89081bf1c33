//! Project manifest (`package.json`) model
//!
//! Only the fields builder detection cares about are modelled. Everything
//! else in the file is ignored. Missing or `null` fields behave as empty
//! maps, and `null` entries inside them are dropped.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub dev_dependencies: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub scripts: HashMap<String, String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<HashMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect())
}

impl Manifest {
    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|source| ManifestError::Parse {
            path: "<inline>".to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_dependency(mut self, name: &str, version: &str) -> Self {
        self.dependencies
            .insert(name.to_string(), version.to_string());
        self
    }

    pub fn with_dev_dependency(mut self, name: &str, version: &str) -> Self {
        self.dev_dependencies
            .insert(name.to_string(), version.to_string());
        self
    }

    pub fn with_script(mut self, name: &str, command: &str) -> Self {
        self.scripts.insert(name.to_string(), command.to_string());
        self
    }

    /// A `build` script counts only when its command is non-empty.
    pub fn has_build_script(&self) -> bool {
        self.scripts
            .get("build")
            .is_some_and(|command| !command.is_empty())
    }

    /// Looks `name` up in `dependencies` overlaid by `devDependencies`.
    ///
    /// A dev entry shadows a regular one of the same name, and an empty
    /// version does not count as a dependency.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dev_dependencies
            .get(name)
            .or_else(|| self.dependencies.get(name))
            .is_some_and(|version| !version.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_missing_fields_as_empty() {
        let manifest = Manifest::from_json_str(r#"{ "name": "site" }"#).unwrap();
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
        assert!(manifest.scripts.is_empty());
        assert!(!manifest.has_build_script());
    }

    #[test]
    fn test_parse_null_fields_as_empty() {
        let manifest = Manifest::from_json_str(
            r#"{ "scripts": null, "dependencies": null, "devDependencies": { "next": null } }"#,
        )
        .unwrap();

        assert!(manifest.scripts.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
        assert!(!manifest.has_build_script());
        assert!(!manifest.has_dependency("next"));
    }

    #[test]
    fn test_null_dev_entry_falls_back_to_regular() {
        let manifest = Manifest::from_json_str(
            r#"{ "scripts": { "build": null }, "dependencies": { "nuxt": "^2.0.0" }, "devDependencies": { "nuxt": null } }"#,
        )
        .unwrap();

        assert!(!manifest.has_build_script());
        assert!(manifest.has_dependency("nuxt"));
    }

    #[test]
    fn test_parse_camel_case_dev_dependencies() {
        let manifest = Manifest::from_json_str(
            r#"{
                "scripts": { "build": "next build" },
                "devDependencies": { "nuxt": "^2.0.0" }
            }"#,
        )
        .unwrap();

        assert!(manifest.has_build_script());
        assert!(manifest.has_dependency("nuxt"));
        assert!(!manifest.has_dependency("next"));
    }

    #[test]
    fn test_empty_build_script_is_unusable() {
        let manifest = Manifest::default().with_script("build", "");
        assert!(!manifest.has_build_script());
    }

    #[test]
    fn test_dev_dependency_shadows_regular() {
        let manifest = Manifest::default()
            .with_dependency("next", "^9.0.0")
            .with_dev_dependency("next", "");
        assert!(!manifest.has_dependency("next"));

        let manifest = Manifest::default()
            .with_dependency("next", "")
            .with_dev_dependency("next", "^9.0.0");
        assert!(manifest.has_dependency("next"));
    }

    #[test]
    fn test_invalid_json() {
        let err = Manifest::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{ "dependencies": { "next": "9.0.0" } }"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.has_dependency("next"));

        let missing = Manifest::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ManifestError::Io { .. }));
    }
}
