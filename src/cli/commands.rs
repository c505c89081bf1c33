use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Zero-config builder inference for deployable projects
#[derive(Parser, Debug)]
#[command(
    name = "zeroconf",
    about = "Zero-config builder inference for deployable projects",
    version,
    long_about = "zeroconf inspects a project's files and package.json and prints the builders \
                  that would be used when no explicit build configuration exists."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect builders for a project directory",
        long_about = "Lists the project's files, loads its manifest when present and prints \
                      the inferred builders or configuration errors.\n\n\
                      Examples:\n  \
                      zeroconf detect\n  \
                      zeroconf detect /path/to/project\n  \
                      zeroconf detect --format json"
    )]
    Detect(DetectArgs),

    #[command(about = "Print the built-in framework and API builder tables")]
    Registry(RegistryArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "FILE",
        help = "Manifest file name relative to the project (overrides ZEROCONF_MANIFEST)"
    )]
    pub manifest: Option<String>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct RegistryArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
