use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use super::models::{ConnoisseurPage, PlayerDetail, VoteEntry};
use crate::config::Game;

/// A single failed remote request, classified so callers can log and skip.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Typed client for the VR Master League public API.
#[derive(Clone)]
pub struct VrmlClient {
    http: Client,
    /// Base URL, overridable for tests.
    base_url: String,
}

impl VrmlClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(VrmlClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of a game's connoisseur roster. `pos_min = None`
    /// requests the first page; the response carries the total roster size
    /// and the server's page size.
    pub async fn fetch_roster_page(
        &self,
        game: Game,
        pos_min: Option<u64>,
    ) -> Result<ConnoisseurPage, FetchError> {
        let mut url = format!("{}/{}/Connoisseurs", self.base_url, game);
        if let Some(pos) = pos_min {
            url.push_str(&format!("?posMin={}", pos));
        }
        debug!("Fetching roster page: {}", url);

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json().await.map_err(FetchError::Malformed)
    }

    /// Fetch a player's full connoisseur vote history.
    pub async fn fetch_player_history(&self, player_id: &str) -> Result<Vec<VoteEntry>, FetchError> {
        let url = format!("{}/Players/{}", self.base_url, player_id);
        debug!("Fetching player history: {}", url);

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        let detail: PlayerDetail = resp.json().await.map_err(FetchError::Malformed)?;
        Ok(detail.connoisseur_history)
    }
}
