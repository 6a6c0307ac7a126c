use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "games", author, version, about = "games listing API client")]
pub struct Cli {
    /// API URL (scheme://host:port); overrides PUBLIC_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch one page of games and print it
    Fetch {
        /// Page number (optional, defaults to 1)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Print the raw payload as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved games endpoint
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_defaults_to_first_page() {
        let cli = Cli::try_parse_from(["games", "fetch"]).unwrap();
        assert_eq!(cli.command, Command::Fetch { page: 1, json: false });
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn test_fetch_with_options() {
        let cli = Cli::try_parse_from([
            "games",
            "fetch",
            "--page",
            "3",
            "--json",
            "--api-url",
            "http://backend:8000",
        ])
        .unwrap();

        assert_eq!(cli.command, Command::Fetch { page: 3, json: true });
        assert_eq!(cli.api_url.as_deref(), Some("http://backend:8000"));
    }

    #[test]
    fn test_negative_page_is_rejected() {
        assert!(Cli::try_parse_from(["games", "fetch", "--page", "-1"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
