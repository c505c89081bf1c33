//! Output formatting for detection results and the registry tables

use anyhow::{Context, Result};
use serde::Serialize;

use crate::detection::registry::{ApiEntry, FrameworkEntry, PatternRegistry};
use crate::detection::DetectionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable text
    Human,
}

#[derive(Serialize)]
struct RegistryView<'a> {
    frameworks: &'a [FrameworkEntry],
    api: Vec<&'a ApiEntry>,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, result: &DetectionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(result)
                .context("Failed to serialize detection result to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(result)
                .context("Failed to serialize detection result to YAML"),
            OutputFormat::Human => Ok(self.format_human(result)),
        }
    }

    pub fn format_registry(&self, registry: &PatternRegistry) -> Result<String> {
        let view = RegistryView {
            frameworks: registry.frameworks(),
            api: registry.api_entries().collect(),
        };

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&view).context("Failed to serialize registry to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(&view).context("Failed to serialize registry to YAML")
            }
            OutputFormat::Human => Ok(self.format_registry_human(&view)),
        }
    }

    fn format_human(&self, result: &DetectionResult) -> String {
        let mut output = String::new();

        if let Some(errors) = &result.errors {
            output.push_str("Configuration errors:\n");
            for error in errors {
                output.push_str(&format!("  [{}]\n", error.code));
                for line in error.message.lines() {
                    output.push_str(&format!("    {}\n", line));
                }
            }
            return output;
        }

        match &result.builders {
            Some(builders) => {
                output.push_str(&format!("Builders ({}):\n", builders.len()));
                let width = builders.iter().map(|b| b.src.len()).max().unwrap_or(0);
                for builder in builders {
                    output.push_str(&format!(
                        "  {:<width$}  {}\n",
                        builder.src,
                        builder.use_,
                        width = width
                    ));
                }
            }
            None => output.push_str("Nothing to build\n"),
        }

        output
    }

    fn format_registry_human(&self, view: &RegistryView<'_>) -> String {
        let mut output = String::from("Frameworks (first match wins):\n");
        for entry in view.frameworks {
            output.push_str(&format!("  {:<12}  {}\n", entry.dependency, entry.use_));
        }

        output.push_str("\nAPI builders (first match wins):\n");
        for entry in &view.api {
            output.push_str(&format!("  {:<12}  {}\n", entry.pattern, entry.use_));
        }

        output
    }
}
