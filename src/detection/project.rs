//! Project builder selection for manifests that declare a build step

use super::registry::{PatternRegistry, STATIC_BUILD_BUILDER};
use super::types::Builder;
use crate::manifest::Manifest;
use tracing::debug;

/// Picks the single builder for the non-API part of the project.
///
/// Falls back to the generic static build, which reads the manifest itself
/// to learn how to run the build.
pub fn select_project_builder(
    registry: &PatternRegistry,
    manifest: &Manifest,
    manifest_path: &str,
) -> Builder {
    match registry.framework_builder(manifest, manifest_path) {
        Some(builder) => {
            debug!(builder = %builder.use_, "Framework dependency found in manifest");
            builder
        }
        None => {
            debug!("No framework dependency, using static build");
            Builder::new(manifest_path, STATIC_BUILD_BUILDER)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::registry::DEFAULT_MANIFEST;

    #[test]
    fn test_next_before_nuxt() {
        let manifest = Manifest::default()
            .with_script("build", "next build")
            .with_dependency("next", "9.0.0")
            .with_dependency("nuxt", "2.0.0");

        let builder = select_project_builder(&PatternRegistry::new(), &manifest, DEFAULT_MANIFEST);
        assert_eq!(builder, Builder::new("package.json", "@now/next"));
    }

    #[test]
    fn test_nuxt_dev_dependency() {
        let manifest = Manifest::default()
            .with_script("build", "nuxt build")
            .with_dev_dependency("nuxt", "2.0.0");

        let builder = select_project_builder(&PatternRegistry::new(), &manifest, DEFAULT_MANIFEST);
        assert_eq!(builder.use_.as_str(), "@now/nuxt");
    }

    #[test]
    fn test_static_build_fallback() {
        let manifest = Manifest::default()
            .with_script("build", "gatsby build")
            .with_dependency("gatsby", "2.0.0");

        let builder =
            select_project_builder(&PatternRegistry::new(), &manifest, "site/package.json");
        assert_eq!(builder.src, "site/package.json");
        assert_eq!(builder.use_.as_str(), "@now/static-build");
        assert!(builder.config.zero_config);
    }
}
