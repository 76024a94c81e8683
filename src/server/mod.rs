//! JSON REST surface over the catalog and the explainer.

pub mod error;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::{Router, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::constants::messages;
use crate::data_fetcher::GameCatalog;
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::error::AppError;
use crate::explainer::{Explainer, OpenAiExplainer};
use error::ApiError;

/// Shared, read-only application state.
pub struct AppState {
    pub catalog: GameCatalog,
    pub explainer: Arc<dyn Explainer>,
}

impl AppState {
    pub fn new(catalog: GameCatalog, explainer: Arc<dyn Explainer>) -> Self {
        Self { catalog, explainer }
    }

    /// Builds the catalog and the explainer on one shared HTTP client.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)
            .map_err(|e| AppError::config_error(format!("Failed to build HTTP client: {e}")))?;
        let catalog = GameCatalog::new(client.clone(), config.bgg_api_url.clone());
        let explainer = OpenAiExplainer::with_client(client, config);
        Ok(Self::new(catalog, Arc::new(explainer)))
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Unhandled error: {detail}");
    ApiError::internal(messages::INTERNAL_ERROR).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/api/juegos/search", get(routes::search_games))
        .route("/api/juegos/jugadores", get(routes::games_by_player_count))
        .route("/api/juegos/duracion", get(routes::games_by_duration))
        .route("/api/juegos/{id}", get(routes::get_game))
        .route("/api/juegos/{id}/explicacion", get(routes::explain_game))
        .fallback(routes::route_not_found)
        .with_state(Arc::new(state))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

/// Binds `0.0.0.0:<port>` and serves until the process is stopped.
pub async fn serve(state: AppState, port: u16) -> Result<(), AppError> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| AppError::server_error(format!("Failed to bind to port {port}: {e}")))?;

    info!("Board game gateway listening on http://0.0.0.0:{port}");
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::server_error(format!("Server terminated: {e}")))
}
