use crate::constants::bgg;
use serde::{Deserialize, Serialize};

/// Canonical board game record built from a `thing` item.
///
/// Numeric fields are either a parsed number or `None`; the mapper never
/// leaves raw upstream text in them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub name: String,
    pub year_published: Option<i32>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub min_playtime: Option<i32>,
    pub max_playtime: Option<i32>,
    pub playing_time: Option<i32>,
    pub min_age: Option<i32>,
    pub categories: Vec<String>,
    pub mechanics: Vec<String>,
    pub average_rating: Option<f64>,
    pub rank: Option<i32>,
    pub description: Option<String>,
}

/// Whether a search result is a base game or an expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    #[serde(rename = "boardgame")]
    BaseGame,
    #[serde(rename = "boardgameexpansion")]
    Expansion,
}

impl GameKind {
    /// Maps the upstream `item@type` value.
    pub fn from_item_type(item_type: &str) -> Option<Self> {
        match item_type {
            bgg::TYPE_BOARDGAME => Some(GameKind::BaseGame),
            bgg::TYPE_EXPANSION => Some(GameKind::Expansion),
            _ => None,
        }
    }
}

/// Lightweight record returned by name search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub year_published: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<GameKind>,
}
