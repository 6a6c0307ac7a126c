use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::api::GamesClient;
use crate::config::AppConfig;
use crate::domain::{Game, GamesApiResponse};

const UNTITLED: &str = "(untitled)";
const UNKNOWN_DATE: &str = "----------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Fetches one page for the command line and renders it
pub struct ListingService {
    client: GamesClient,
    format: OutputFormat,
}

impl ListingService {
    pub fn new(config: &AppConfig, format: OutputFormat) -> Result<Self> {
        Ok(Self {
            client: GamesClient::new(config)?,
            format,
        })
    }

    pub async fn run(&self, page_number: u32) -> Result<()> {
        info!("Listing page {} from {}", page_number, self.client.endpoint().base_url());

        let games = self.client.fetch_games_page(page_number).await?;
        let output = self.render(&games, page_number)?;
        println!("{}", output);
        Ok(())
    }

    fn render(&self, games: &GamesApiResponse, page_number: u32) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(render_table(games, page_number)),
            OutputFormat::Json => render_json(games),
        }
    }
}

pub fn render_json(games: &GamesApiResponse) -> Result<String> {
    serde_json::to_string_pretty(games).context("Failed to serialize games")
}

pub fn render_table(games: &GamesApiResponse, page_number: u32) -> String {
    let mut lines = vec![format!(
        "{} {} ({} games)",
        "Page".bold(),
        page_number,
        games.len()
    )];

    if games.is_empty() {
        lines.push("No games on this page".dimmed().to_string());
        return lines.join("\n");
    }

    lines.extend(games.data.iter().map(format_row));
    lines.join("\n")
}

fn format_row(game: &Game) -> String {
    let title = game.title.as_deref().unwrap_or(UNTITLED);
    let released = game.release_date.as_deref().unwrap_or(UNKNOWN_DATE);
    let platforms = game.platform_names().join(", ");

    format!(
        "  {:>3}  {}  {}  [{}]",
        format_score(game.review_score),
        released,
        title,
        platforms
    )
}

fn format_score(score: i64) -> String {
    let text = format!("{:>3}", score);
    match score {
        75.. => text.green().to_string(),
        50..=74 => text.yellow().to_string(),
        1..=49 => text.red().to_string(),
        _ => text.dimmed().to_string(),
    }
}
