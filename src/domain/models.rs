use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One page of the games listing as served by `/api/games`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamesApiResponse {
    pub data: Vec<Game>,
}

impl GamesApiResponse {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Game entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: Option<String>,
    pub description: String,
    pub release_date: Option<String>,
    pub review_score: i64,
    /// Platform slug (e.g. `pc`, `playstation_5`) to availability
    pub platforms: BTreeMap<String, bool>,
    pub player_count: i32,
    pub cover_url: Option<String>,
}

impl Game {
    /// Sorted slugs of the platforms the game is available on
    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms
            .iter()
            .filter(|(_, available)| **available)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
