use thiserror::Error;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Underlying reason a games page could not be fetched
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The backend answered with a non-2xx status
    #[error("HTTP error: The status is {0}")]
    HttpStatus(u16),

    /// No response (or no complete body) could be obtained
    #[error(transparent)]
    Transport(reqwest::Error),

    /// The body was not a valid games payload
    #[error(transparent)]
    Parse(serde_json::Error),
}

impl FetchFailure {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Single error surfaced by the games client.
///
/// The cause text is already part of the message, so it is not chained again
/// as `source()`; use [`FetchGamesError::cause`] to inspect it.
#[derive(Debug, Error)]
#[error("Failed to fetch games: {}", describe(.cause))]
pub struct FetchGamesError {
    cause: FetchFailure,
}

impl FetchGamesError {
    pub fn new(cause: FetchFailure) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> &FetchFailure {
        &self.cause
    }

    pub fn into_cause(self) -> FetchFailure {
        self.cause
    }
}

impl From<FetchFailure> for FetchGamesError {
    fn from(cause: FetchFailure) -> Self {
        Self::new(cause)
    }
}

/// Problems resolving the endpoint at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn describe(cause: &FetchFailure) -> String {
    or_unknown(cause.to_string())
}

fn or_unknown(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
