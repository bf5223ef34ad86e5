use anyhow::Result;
use clap::{Parser, Subcommand};
use fxconv::core::currency::Currency;
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the interactive conversion menu
    Menu,
    /// Display the latest rate table for a base currency
    Rates { base: Currency },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(Commands::Rates { base }) => {
            fxconv::run_command(fxconv::AppCommand::Rates { base }, cli.config_path.as_deref())
                .await
        }
        Some(Commands::Menu) | None => {
            fxconv::run_command(fxconv::AppCommand::Menu, cli.config_path.as_deref()).await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
