//! API file classification
//!
//! Every routable source file under `api/` becomes its own function
//! builder. Output follows locale order of the paths so that generated
//! routes stay stable between runs.

use super::collate::locale_compare;
use super::registry::PatternRegistry;
use super::types::Builder;
use tracing::{debug, trace};

/// Hidden (`.`) and private (`_`) segments are never routed.
pub fn is_ignored_path(path: &str) -> bool {
    path.split('/')
        .any(|segment| segment.starts_with('.') || segment.starts_with('_'))
}

pub fn sort_files<S: AsRef<str>>(files: &mut [S]) {
    files.sort_by(|a, b| locale_compare(a.as_ref(), b.as_ref()));
}

/// Assigns one builder per qualifying API file, in locale order.
pub fn detect_api_builders<S: AsRef<str>>(registry: &PatternRegistry, files: &[S]) -> Vec<Builder> {
    let mut sorted: Vec<&str> = files.iter().map(|file| -> &str { file.as_ref() }).collect();
    sort_files(&mut sorted);

    let builders: Vec<Builder> = sorted
        .into_iter()
        .filter(|path| {
            if is_ignored_path(path) {
                trace!(path, "Ignoring hidden or private path");
                return false;
            }
            true
        })
        .filter_map(|path| {
            registry
                .match_api(path)
                .map(|entry| Builder::new(path, entry.use_))
        })
        .collect();

    debug!(count = builders.len(), "Detected API builders");
    builders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srcs(builders: &[Builder]) -> Vec<&str> {
        builders.iter().map(|b| b.src.as_str()).collect()
    }

    #[test]
    fn test_ignored_paths() {
        assert!(is_ignored_path("api/_utils.js"));
        assert!(is_ignored_path("api/_lib/db.js"));
        assert!(is_ignored_path("api/.well-known/x.js"));
        assert!(is_ignored_path(".hidden/api/x.js"));
        assert!(!is_ignored_path("api/users/index.js"));
        assert!(!is_ignored_path("api/my_file.js"));
    }

    #[test]
    fn test_sorted_output() {
        let registry = PatternRegistry::new();
        let files = vec!["api/users.ts", "api/Auth.js", "api/date.rs", "api/about.go"];

        let builders = detect_api_builders(&registry, &files);
        assert_eq!(
            srcs(&builders),
            vec!["api/about.go", "api/Auth.js", "api/date.rs", "api/users.ts"]
        );
    }

    #[test]
    fn test_src_is_literal_path() {
        let registry = PatternRegistry::new();
        let builders = detect_api_builders(&registry, &["api/nested/deep/handler.py"]);

        assert_eq!(builders.len(), 1);
        assert_eq!(builders[0].src, "api/nested/deep/handler.py");
        assert_eq!(builders[0].use_.as_str(), "@now/python");
        assert!(builders[0].config.zero_config);
    }

    #[test]
    fn test_filters_private_hidden_and_unknown() {
        let registry = PatternRegistry::new();
        let files = vec![
            "api/_helpers.js",
            "api/_lib/db.ts",
            "api/.secret/key.js",
            "api/readme.md",
            "index.js",
            "package.json",
            "api/index.js",
        ];

        let builders = detect_api_builders(&registry, &files);
        assert_eq!(srcs(&builders), vec!["api/index.js"]);
    }

    #[test]
    fn test_input_is_not_reordered() {
        let registry = PatternRegistry::new();
        let files = vec!["api/b.js".to_string(), "api/a.js".to_string()];

        let builders = detect_api_builders(&registry, &files);
        assert_eq!(srcs(&builders), vec!["api/a.js", "api/b.js"]);
        assert_eq!(files, vec!["api/b.js", "api/a.js"]);
    }

    #[test]
    fn test_empty_input() {
        let registry = PatternRegistry::new();
        let files: Vec<String> = Vec::new();
        assert!(detect_api_builders(&registry, &files).is_empty());
    }
}
