use anyhow::Result;

use games_api_client::cli::{Cli, Command};
use games_api_client::{handle_completions, handle_config, handle_fetch, interpret, load_config};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Fetch { page, json } => {
            let config = load_config(cli.api_url.as_deref())?;
            handle_fetch(&config, *page, *json)
        }
        Command::Config => {
            let config = load_config(cli.api_url.as_deref())?;
            handle_config(&config)
        }
        Command::Completions { shell } => handle_completions(*shell),
    }
}
