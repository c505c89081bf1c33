//! Project file listing for the CLI
//!
//! Produces the flat, forward-slash separated path list that builder
//! detection consumes.

use anyhow::{Context, Result};
use ignore::{overrides::OverrideBuilder, WalkBuilder};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Directories never handed to detection.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub max_files: usize,
    pub git_ignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_files: 10_000,
            git_ignore: true,
        }
    }
}

pub struct ProjectScanner {
    root: PathBuf,
    config: ScanConfig,
}

impl ProjectScanner {
    pub fn new(root: PathBuf) -> Result<Self> {
        if !root.exists() {
            return Err(anyhow::anyhow!("Project path does not exist: {:?}", root));
        }
        if !root.is_dir() {
            return Err(anyhow::anyhow!("Project path is not a directory: {:?}", root));
        }

        let root = root
            .canonicalize()
            .context("Failed to canonicalize project path")?;

        debug!(root = %root.display(), "ProjectScanner initialized");

        Ok(Self {
            root,
            config: ScanConfig::default(),
        })
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists files relative to the root, sorted by name within each directory.
    ///
    /// Fails instead of truncating when the project exceeds `max_files`.
    pub fn scan(&self) -> Result<Vec<String>> {
        let start = Instant::now();

        let mut override_builder = OverrideBuilder::new(&self.root);
        for excluded in EXCLUDED_DIRS {
            override_builder
                .add(&format!("!{}/", excluded))
                .with_context(|| format!("Invalid exclusion pattern for {}", excluded))?;
        }
        let overrides = override_builder
            .build()
            .context("Failed to build scan overrides")?;

        let mut files = Vec::new();
        for result in WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(self.config.git_ignore)
            .overrides(overrides)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            if files.len() >= self.config.max_files {
                return Err(anyhow::anyhow!(
                    "Project {} has more than {} files (raise ZEROCONF_MAX_FILES to scan it)",
                    self.root.display(),
                    self.config.max_files
                ));
            }

            if let Some(relative) = relative_path(&self.root, entry.path()) {
                files.push(relative);
            }
        }

        info!(
            files = files.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Project scan complete"
        );

        Ok(files)
    }
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
