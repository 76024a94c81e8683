use crate::config::Config;
use crate::constants::HOT_SAMPLE_SIZE;
use crate::data_fetcher::models::{Game, SearchHit};
use crate::data_fetcher::processors::{
    fits_duration, map_item, map_search_hit, supports_player_range,
};
use crate::error::AppError;
use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::fetch_document;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_hot_url, build_search_url, build_thing_url};

/// Entry point to the game database.
///
/// Holds the shared HTTP client and the API base URL. Every call goes to the
/// upstream API; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    client: Client,
    api_base: String,
}

impl GameCatalog {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Builds a catalog with its own HTTP client configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)
            .map_err(|e| AppError::config_error(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::new(client, config.bgg_api_url.clone()))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Searches base games and expansions by name.
    /// An upstream result with no items is an empty vector, not an error.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<SearchHit>, AppError> {
        let url = build_search_url(&self.api_base, name)?;
        let root = fetch_document(&self.client, &url).await?;

        let hits: Vec<SearchHit> = root.children("item").iter().filter_map(map_search_hit).collect();
        info!("Search for '{}' returned {} hits", name, hits.len());
        Ok(hits)
    }

    /// Fetches one game with statistics. `None` when the upstream has no item.
    #[instrument(skip(self))]
    pub async fn get_details(&self, id: &str) -> Result<Option<Game>, AppError> {
        let url = build_thing_url(&self.api_base, id)?;
        let root = fetch_document(&self.client, &url).await?;

        let game = root.first("item").and_then(map_item);
        if game.is_none() {
            debug!("No item found for id {}", id);
        }
        Ok(game)
    }

    /// Ids of the upstream hot list, in upstream order.
    #[instrument(skip(self))]
    pub async fn hot_candidate_ids(&self) -> Result<Vec<String>, AppError> {
        let url = build_hot_url(&self.api_base)?;
        let root = fetch_document(&self.client, &url).await?;

        Ok(root
            .children("item")
            .iter()
            .filter_map(|item| item.attr("id"))
            .map(str::to_string)
            .collect())
    }

    /// Hot-list games that accommodate the whole `[min, max]` player range.
    ///
    /// The upstream API cannot query by player count, so this samples at most
    /// `HOT_SAMPLE_SIZE` hot games and filters them locally.
    #[instrument(skip(self))]
    pub async fn search_by_player_count(&self, min: i32, max: i32) -> Result<Vec<Game>, AppError> {
        let candidates = self.resolve_hot_candidates().await?;
        let games: Vec<Game> = candidates
            .into_iter()
            .filter(|game| supports_player_range(game, min, max))
            .collect();

        info!(
            "Player range {}-{} matched {} hot games",
            min,
            max,
            games.len()
        );
        Ok(games)
    }

    /// Hot-list games whose playing time lies within `[min, max]` minutes.
    #[instrument(skip(self))]
    pub async fn search_by_duration(&self, min: i32, max: i32) -> Result<Vec<Game>, AppError> {
        let candidates = self.resolve_hot_candidates().await?;
        let games: Vec<Game> = candidates
            .into_iter()
            .filter(|game| fits_duration(game, min, max))
            .collect();

        info!(
            "Duration {}-{} min matched {} hot games",
            min,
            max,
            games.len()
        );
        Ok(games)
    }

    async fn resolve_hot_candidates(&self) -> Result<Vec<Game>, AppError> {
        let ids = self.hot_candidate_ids().await?;
        Ok(self.resolve_candidates(&ids).await)
    }

    /// Resolves up to `HOT_SAMPLE_SIZE` ids concurrently and waits for all of
    /// them. Failed or empty lookups are logged and dropped; the result keeps
    /// the order of `ids`.
    async fn resolve_candidates(&self, ids: &[String]) -> Vec<Game> {
        let sample = &ids[..ids.len().min(HOT_SAMPLE_SIZE)];
        debug!(
            "Resolving {} of {} hot candidates",
            sample.len(),
            ids.len()
        );

        let lookups = sample.iter().map(|id| async move { (id, self.get_details(id).await) });

        let mut games = Vec::with_capacity(sample.len());
        let mut failed = 0usize;
        for (id, result) in join_all(lookups).await {
            match result {
                Ok(Some(game)) => games.push(game),
                Ok(None) => {
                    warn!("Hot candidate {} has no detail item, skipping", id);
                    failed += 1;
                }
                Err(e) => {
                    warn!("Failed to resolve hot candidate {}: {}", id, e);
                    failed += 1;
                }
            }
        }

        info!(
            "Candidate resolution completed: {} resolved, {} skipped",
            games.len(),
            failed
        );
        games
    }
}
