//! URL building utilities for the XML API endpoints

use crate::constants::bgg;
use crate::error::AppError;
use reqwest::Url;

fn build_url(api_base: &str, endpoint: &str, params: &[(&str, &str)]) -> Result<String, AppError> {
    let base = api_base.trim_end_matches('/');
    Url::parse_with_params(&format!("{base}/{endpoint}"), params)
        .map(String::from)
        .map_err(|e| AppError::config_error(format!("Invalid API base URL '{api_base}': {e}")))
}

/// Builds the name search URL covering base games and expansions.
///
/// # Example
/// ```
/// use boardgame_gateway::data_fetcher::api::build_search_url;
///
/// let url = build_search_url("https://api.example.com/xmlapi2", "Catan").unwrap();
/// assert_eq!(
///     url,
///     "https://api.example.com/xmlapi2/search?query=Catan&type=boardgame%2Cboardgameexpansion"
/// );
/// ```
pub fn build_search_url(api_base: &str, name: &str) -> Result<String, AppError> {
    let types = format!("{},{}", bgg::TYPE_BOARDGAME, bgg::TYPE_EXPANSION);
    build_url(api_base, "search", &[("query", name), ("type", types.as_str())])
}

/// Builds the detail URL for a single item, statistics included.
///
/// # Example
/// ```
/// use boardgame_gateway::data_fetcher::api::build_thing_url;
///
/// let url = build_thing_url("https://api.example.com/xmlapi2", "13").unwrap();
/// assert_eq!(url, "https://api.example.com/xmlapi2/thing?id=13&stats=1");
/// ```
pub fn build_thing_url(api_base: &str, id: &str) -> Result<String, AppError> {
    build_url(api_base, "thing", &[("id", id), ("stats", "1")])
}

/// Builds the hot-list URL for board games.
///
/// # Example
/// ```
/// use boardgame_gateway::data_fetcher::api::build_hot_url;
///
/// let url = build_hot_url("https://api.example.com/xmlapi2").unwrap();
/// assert_eq!(url, "https://api.example.com/xmlapi2/hot?type=boardgame");
/// ```
pub fn build_hot_url(api_base: &str) -> Result<String, AppError> {
    build_url(api_base, "hot", &[("type", bgg::TYPE_BOARDGAME)])
}
