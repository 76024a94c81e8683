pub mod api;
pub mod models;
pub mod processors;
pub mod xml;

pub use api::GameCatalog;
pub use models::{Game, GameKind, SearchHit};
