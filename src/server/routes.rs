use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, error, info};

use super::AppState;
use super::error::ApiError;
use crate::constants::messages;
use crate::data_fetcher::models::{Game, SearchHit};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub nombre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeParams {
    /// Both bounds as integers, or `None` when either is missing or malformed.
    fn bounds(&self) -> Option<(i32, i32)> {
        let parse = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse::<i32>().ok());
        Some((parse(&self.min)?, parse(&self.max)?))
    }
}

/// Both bounds of a range query, or a JSON 400 when the query string is
/// unusable.
fn range_bounds(params: Result<Query<RangeParams>, QueryRejection>) -> Result<(i32, i32), ApiError> {
    params
        .inspect_err(|e| debug!("Rejected range query: {e}"))
        .ok()
        .and_then(|Query(params)| params.bounds())
        .ok_or_else(|| ApiError::bad_request(messages::MISSING_BOUNDS))
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub juego: String,
    pub explicacion: String,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": env!("CARGO_PKG_NAME") }))
}

/// GET /api/juegos/search?nombre=Catan
pub async fn search_games(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let Query(params) = params.map_err(|e| {
        debug!("Rejected search query: {e}");
        ApiError::bad_request(messages::MISSING_NAME)
    })?;
    let name = params
        .nombre
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::bad_request(messages::MISSING_NAME))?;

    info!("Searching games by name: {name}");
    let hits = state.catalog.search_by_name(name).await.map_err(|e| {
        error!(upstream = e.is_upstream(), "Error in /search: {e}");
        ApiError::internal(messages::SEARCH_FAILED)
    })?;

    if hits.is_empty() {
        return Err(ApiError::not_found(messages::NO_GAMES_FOR_NAME));
    }
    Ok(Json(hits))
}

/// GET /api/juegos/{id}
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    let game = state.catalog.get_details(&id).await.map_err(|e| {
        error!(upstream = e.is_upstream(), "Error in /{id}: {e}");
        ApiError::internal(messages::DETAILS_FAILED)
    })?;

    game.map(Json)
        .ok_or_else(|| ApiError::not_found(messages::GAME_NOT_FOUND))
}

/// GET /api/juegos/{id}/explicacion
pub async fn explain_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ExplanationResponse>, ApiError> {
    let game = state
        .catalog
        .get_details(&id)
        .await
        .map_err(|e| {
            error!(upstream = e.is_upstream(), "Error in /{id}/explicacion: {e}");
            ApiError::internal(messages::EXPLANATION_FAILED)
        })?
        .ok_or_else(|| ApiError::not_found(messages::GAME_NOT_FOUND))?;

    let explanation = state.explainer.explain(&game).await;
    if explanation.trim().is_empty() {
        return Err(ApiError::bad_gateway(messages::EXPLANATION_EMPTY));
    }

    Ok(Json(ExplanationResponse {
        juego: game.name,
        explicacion: explanation,
    }))
}

/// GET /api/juegos/jugadores?min=2&max=4
pub async fn games_by_player_count(
    State(state): State<Arc<AppState>>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let (min, max) = range_bounds(params)?;

    let games = state
        .catalog
        .search_by_player_count(min, max)
        .await
        .map_err(|e| {
            error!(upstream = e.is_upstream(), "Error in /jugadores: {e}");
            ApiError::internal(messages::FILTER_FAILED)
        })?;
    Ok(Json(games))
}

/// GET /api/juegos/duracion?min=30&max=90
pub async fn games_by_duration(
    State(state): State<Arc<AppState>>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let (min, max) = range_bounds(params)?;

    let games = state
        .catalog
        .search_by_duration(min, max)
        .await
        .map_err(|e| {
            error!(upstream = e.is_upstream(), "Error in /duracion: {e}");
            ApiError::internal(messages::FILTER_FAILED)
        })?;
    Ok(Json(games))
}

pub async fn route_not_found() -> ApiError {
    ApiError::not_found(messages::ROUTE_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: Option<&str>, max: Option<&str>) -> RangeParams {
        RangeParams {
            min: min.map(str::to_string),
            max: max.map(str::to_string),
        }
    }

    #[test]
    fn test_range_bounds_parsing() {
        assert_eq!(range(Some("2"), Some("4")).bounds(), Some((2, 4)));
        assert_eq!(range(Some(" 30 "), Some("90")).bounds(), Some((30, 90)));
        assert_eq!(range(None, Some("4")).bounds(), None);
        assert_eq!(range(Some("2"), None).bounds(), None);
        assert_eq!(range(Some("two"), Some("4")).bounds(), None);
        assert_eq!(range(Some(""), Some("")).bounds(), None);
    }
}
