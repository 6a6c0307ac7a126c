pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::AppConfig;
use crate::services::{ListingService, OutputFormat};

pub use api::GamesClient;
pub use domain::{Game, GamesApiResponse};
pub use errors::{FetchFailure, FetchGamesError};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Resolve configuration, preferring an explicit API URL over the environment
pub fn load_config(api_url: Option<&str>) -> Result<AppConfig> {
    let config = match api_url {
        Some(url) => AppConfig::with_api_url(url)?,
        None => AppConfig::from_env()?,
    };
    Ok(config)
}

pub fn handle_fetch(config: &AppConfig, page: u32, json: bool) -> Result<()> {
    let format = if json { OutputFormat::Json } else { OutputFormat::Table };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(async {
        let service = ListingService::new(config, format)?;
        service.run(page).await
    })
}

pub fn handle_config(config: &AppConfig) -> Result<()> {
    println!("{}", config.endpoint.base_url());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
