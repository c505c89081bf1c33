use zeroconf_builders::cli::commands::{CliArgs, Commands};
use zeroconf_builders::cli::handlers::{handle_detect, handle_registry, resolve_config, EXIT_FAILURE};
use zeroconf_builders::util::logging::{init_logging, LoggingConfig};
use zeroconf_builders::VERSION;

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let config = resolve_config(&args);

    match LoggingConfig::from_config(&config) {
        Ok(logging) => init_logging(logging),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }

    debug!("zeroconf v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, &config, args.quiet).await,
        Commands::Registry(registry_args) => handle_registry(registry_args).await,
    };

    std::process::exit(exit_code);
}
