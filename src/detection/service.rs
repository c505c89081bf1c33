//! Zero-config detection entry points

use super::api::detect_api_builders;
use super::fallback::{assemble_static_fallback, Fallback};
use super::project::select_project_builder;
use super::registry::{PatternRegistry, DEFAULT_MANIFEST};
use super::types::DetectionResult;
use crate::config::DetectorConfig;
use crate::manifest::Manifest;
use tracing::debug;

/// Computes builder plans against a pattern registry.
///
/// Holds no per-call state; one detector can serve any number of projects,
/// including concurrently.
pub struct BuilderDetector<'r> {
    registry: &'r PatternRegistry,
    manifest_path: String,
}

impl BuilderDetector<'static> {
    pub fn new(config: &DetectorConfig) -> Self {
        Self::with_registry(PatternRegistry::global(), &config.manifest_path)
    }
}

impl<'r> BuilderDetector<'r> {
    pub fn with_registry(registry: &'r PatternRegistry, manifest_path: &str) -> Self {
        Self {
            registry,
            manifest_path: manifest_path.to_string(),
        }
    }

    pub fn manifest_path(&self) -> &str {
        &self.manifest_path
    }

    pub fn detect<S: AsRef<str>>(&self, files: &[S], manifest: Option<&Manifest>) -> DetectionResult {
        let mut builders = detect_api_builders(self.registry, files);

        if let Some(manifest) = manifest.filter(|m| m.has_build_script()) {
            let project = select_project_builder(self.registry, manifest, &self.manifest_path);
            debug!(
                api_builders = builders.len(),
                project_builder = %project.use_,
                "Manifest declares a build script"
            );
            builders.push(project);
            return DetectionResult::from_builders(builders);
        }

        match assemble_static_fallback(
            files,
            manifest.is_some(),
            builders.len(),
            &self.manifest_path,
        ) {
            Fallback::Error(error) => {
                debug!(code = %error.code, "Project is not buildable as given");
                DetectionResult::from_errors(vec![error])
            }
            Fallback::Static(fallback) => {
                debug!(
                    api_builders = builders.len(),
                    static_builders = fallback.len(),
                    "No build script, using static fallback"
                );
                builders.extend(fallback);
                DetectionResult::from_builders(builders)
            }
        }
    }
}

impl Default for BuilderDetector<'static> {
    fn default() -> Self {
        Self::with_registry(PatternRegistry::global(), DEFAULT_MANIFEST)
    }
}

/// Detects builders with the built-in registry and `package.json` manifest.
pub fn detect_builders<S: AsRef<str>>(files: &[S], manifest: Option<&Manifest>) -> DetectionResult {
    BuilderDetector::default().detect(files, manifest)
}
