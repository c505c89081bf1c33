//! Command handlers; each returns the process exit code

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::commands::{CliArgs, DetectArgs, RegistryArgs};
use super::output::OutputFormatter;
use crate::config::DetectorConfig;
use crate::detection::{BuilderDetector, DetectionResult, PatternRegistry};
use crate::manifest::Manifest;
use crate::scanner::{ProjectScanner, ScanConfig};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIGURATION_ERROR: i32 = 2;

/// Environment config with the global logging flags applied on top.
///
/// `--log-level` wins over `-v`/`-q`, which win over `ZEROCONF_LOG_LEVEL`.
pub fn resolve_config(args: &CliArgs) -> DetectorConfig {
    let mut config = DetectorConfig::default();
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    } else if args.verbose {
        config.log_level = "debug".to_string();
    } else if args.quiet {
        config.log_level = "error".to_string();
    }
    config
}

pub async fn handle_detect(args: &DetectArgs, config: &DetectorConfig, quiet: bool) -> i32 {
    let mut config = config.clone();
    if let Some(manifest) = &args.manifest {
        config = config.with_manifest_path(manifest.clone());
    }

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("\nPlease check your environment variables and command-line arguments.");
        return EXIT_FAILURE;
    }

    let project_path = match &args.project_path {
        Some(path) => path.clone(),
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!("Failed to get current directory: {}", e);
                return EXIT_FAILURE;
            }
        },
    };

    let result = match detect_project(project_path, &config).await {
        Ok(result) => result,
        Err(e) => {
            error!("Detection failed: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    let output = match formatter.format(&result) {
        Ok(output) => output,
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            return EXIT_FAILURE;
        }
    };

    if let Err(e) = write_output(&output, args.output.as_deref(), quiet) {
        error!("{:#}", e);
        return EXIT_FAILURE;
    }

    if result.has_errors() {
        warn!(errors = result.errors().len(), "Project configuration is incomplete");
        EXIT_CONFIGURATION_ERROR
    } else {
        EXIT_OK
    }
}

pub async fn handle_registry(args: &RegistryArgs) -> i32 {
    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_registry(PatternRegistry::global()) {
        Ok(output) => {
            print!("{}", output);
            EXIT_OK
        }
        Err(e) => {
            error!("Failed to format registry: {:#}", e);
            EXIT_FAILURE
        }
    }
}

/// Scans the project, loads its manifest and runs detection.
pub async fn detect_project(project_path: PathBuf, config: &DetectorConfig) -> Result<DetectionResult> {
    info!(project = %project_path.display(), "Starting builder detection");

    let scanner = ProjectScanner::new(project_path)?.with_config(ScanConfig {
        max_files: config.max_files,
        ..ScanConfig::default()
    });
    let root = scanner.root().to_path_buf();

    let files = tokio::task::spawn_blocking(move || scanner.scan())
        .await
        .context("Project scan task panicked")??;

    let manifest_file = root.join(&config.manifest_path);
    let manifest = if manifest_file.is_file() {
        let content = tokio::fs::read_to_string(&manifest_file)
            .await
            .with_context(|| format!("Failed to read {}", manifest_file.display()))?;
        let manifest = Manifest::from_json_str(&content)
            .with_context(|| format!("Invalid manifest {}", manifest_file.display()))?;
        Some(manifest)
    } else {
        debug!(manifest = %config.manifest_path, "No manifest found");
        None
    };

    let result = BuilderDetector::new(config).detect(&files, manifest.as_ref());
    info!(
        builders = result.builders().len(),
        errors = result.errors().len(),
        "Builder detection complete"
    );

    Ok(result)
}

fn write_output(output: &str, path: Option<&Path>, quiet: bool) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                eprintln!("Output written to {}", path.display());
            }
        }
        None => print!("{}", output),
    }
    Ok(())
}
