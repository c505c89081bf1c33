pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, DetectArgs, RegistryArgs};
pub use output::{OutputFormat, OutputFormatter};
