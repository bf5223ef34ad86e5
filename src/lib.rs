pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use std::io;
use tracing::{debug, info};

use crate::cli::session::Session;
use crate::core::config::AppConfig;
use crate::core::currency::Currency;
use crate::providers::exchange_rate_api::ExchangeRateApiProvider;

pub enum AppCommand {
    Menu,
    Rates { base: Currency },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider_config = config.exchange_rate_api();
    let api_key = config.resolved_api_key()?;
    let provider = ExchangeRateApiProvider::new(&provider_config.base_url, &api_key);

    match command {
        AppCommand::Menu => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Session::new(stdin, stdout, &provider).run().await
        }
        AppCommand::Rates { base } => cli::rates::run(&provider, base).await,
    }
}
