pub mod game;

pub use game::{Game, GameKind, SearchHit};
