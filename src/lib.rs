//! Board game gateway library
//!
//! A small JSON gateway over the BoardGameGeek XML API. It searches games by
//! name, maps game details to a JSON-friendly model, filters the current hot
//! list by player count or duration, and asks a chat-completion service for a
//! short Spanish explanation of a game.
//!
//! # Examples
//!
//! ```rust,no_run
//! use boardgame_gateway::{AppError, Config, GameCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let catalog = GameCatalog::from_config(&config)?;
//!
//!     for hit in catalog.search_by_name("Catan").await? {
//!         println!("{} {}", hit.id, hit.name);
//!     }
//!
//!     if let Some(game) = catalog.get_details("13").await? {
//!         println!("{} ({:?})", game.name, game.year_published);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod explainer;
pub mod logging;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Game, GameKind, SearchHit};
pub use data_fetcher::GameCatalog;
pub use error::AppError;
pub use explainer::{Explainer, OpenAiExplainer};
pub use server::{AppState, router};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
