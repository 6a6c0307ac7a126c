use anyhow::Result;
use log::{debug, error, info};

use crate::config::{AppConfig, EndpointConfig};
use crate::domain::GamesApiResponse;
use crate::errors::{FetchFailure, FetchGamesError};
use crate::http::HttpClient;
use crate::pagination::{PageRequest, build_page_url};

/// Client for the backend's games listing endpoint
#[derive(Debug, Clone)]
pub struct GamesClient {
    http: HttpClient,
    endpoint: EndpointConfig,
}

impl GamesClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = HttpClient::new(&config.transport)?;
        Ok(Self::with_transport(http, config.endpoint.clone()))
    }

    pub fn with_transport(http: HttpClient, endpoint: EndpointConfig) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Fetch and parse one page of games.
    ///
    /// Transport failures, non-2xx statuses and malformed bodies all come back
    /// as a [`FetchGamesError`]; the failure is logged before it is returned.
    /// Nothing is retried.
    pub async fn fetch_games_page(
        &self,
        page_number: u32,
    ) -> Result<GamesApiResponse, FetchGamesError> {
        let page = PageRequest::new(page_number);

        match self.request_page(page).await {
            Ok(games) => {
                info!("Fetched {} games from page {}", games.len(), page.page_number);
                Ok(games)
            }
            Err(cause) => {
                let err = FetchGamesError::new(cause);
                error!("Error fetching games: {}", err.cause());
                Err(err)
            }
        }
    }

    pub fn page_url(&self, page: PageRequest) -> String {
        build_page_url(self.endpoint.base_url(), page)
    }

    async fn request_page(&self, page: PageRequest) -> Result<GamesApiResponse, FetchFailure> {
        let url = self.page_url(page);
        debug!("GET {}", url);

        let response = self.http.get(&url).await.map_err(FetchFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchFailure::Transport)?;
        serde_json::from_slice(&body).map_err(FetchFailure::Parse)
    }
}
