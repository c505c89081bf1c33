//! Static fallback for projects without a build step

use super::registry::{API_DIR, PUBLIC_DIR, PUBLIC_GLOB, STATIC_BUILDER};
use super::types::{Builder, ConfigurationError};

/// What the fallback decided for a project with no usable build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Builders to append after the API builders, possibly none
    Static(Vec<Builder>),
    /// The project cannot be built as given
    Error(ConfigurationError),
}

pub fn has_public_directory<S: AsRef<str>>(files: &[S]) -> bool {
    files.iter().any(|file| file.as_ref().starts_with(PUBLIC_DIR))
}

/// Decides static builders once no build script applies.
///
/// `files` keeps its original order here; only API builders are sorted.
pub fn assemble_static_fallback<S: AsRef<str>>(
    files: &[S],
    has_manifest: bool,
    api_builder_count: usize,
    manifest_path: &str,
) -> Fallback {
    if has_manifest && api_builder_count == 0 {
        return Fallback::Error(ConfigurationError::missing_build_script());
    }

    if has_public_directory(files) {
        return Fallback::Static(vec![Builder::new(PUBLIC_GLOB, STATIC_BUILDER)]);
    }

    if api_builder_count > 0 {
        let builders = files
            .iter()
            .map(|file| -> &str { file.as_ref() })
            .filter(|name| !name.starts_with(API_DIR))
            .filter(|name| *name != manifest_path)
            .map(|name| Builder::new(name, STATIC_BUILDER))
            .collect();
        return Fallback::Static(builders);
    }

    Fallback::Static(Vec::new())
}
