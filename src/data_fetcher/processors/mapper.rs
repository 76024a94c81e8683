use crate::constants::{UNKNOWN_GAME_NAME, bgg};
use crate::data_fetcher::models::{Game, GameKind, SearchHit};
use crate::data_fetcher::xml::XmlNode;
use tracing::debug;

/// Maps a `thing` item into a [`Game`].
///
/// Every field read is total: missing elements, missing attributes and
/// unparsable numbers all degrade to `None` (or the `"unknown"` name
/// sentinel). The only case that yields no record is an item without an
/// `id` attribute, since the id is never synthesized.
///
/// # Examples
///
/// ```rust
/// use boardgame_gateway::data_fetcher::processors::map_item;
/// use boardgame_gateway::data_fetcher::xml::parse;
///
/// let item = parse(r#"<item id="13"><name type="primary" value="Catan"/><minplayers value="3"/></item>"#).unwrap();
/// let game = map_item(&item).unwrap();
/// assert_eq!(game.name, "Catan");
/// assert_eq!(game.min_players, Some(3));
/// assert_eq!(game.max_players, None);
/// ```
pub fn map_item(item: &XmlNode) -> Option<Game> {
    let Some(id) = item.attr("id") else {
        debug!("Skipping item without id attribute");
        return None;
    };

    let ratings = item.first("statistics").and_then(|s| s.first("ratings"));

    Some(Game {
        id: id.to_string(),
        name: primary_name(item),
        year_published: int_value(item, "yearpublished"),
        min_players: int_value(item, "minplayers"),
        max_players: int_value(item, "maxplayers"),
        min_playtime: int_value(item, "minplaytime"),
        max_playtime: int_value(item, "maxplaytime"),
        playing_time: int_value(item, "playingtime"),
        min_age: int_value(item, "minage"),
        categories: link_values(item, bgg::LINK_CATEGORY),
        mechanics: link_values(item, bgg::LINK_MECHANIC),
        average_rating: ratings.and_then(|r| float_value(r, "average")),
        rank: ratings
            .and_then(|r| r.first("ranks"))
            .and_then(|r| r.first("rank"))
            .and_then(|r| parse_int(r.attr("value"))),
        description: item
            .first("description")
            .and_then(XmlNode::text)
            .map(str::trim)
            .map(str::to_string),
    })
}

/// Maps a `search` result item into a [`SearchHit`].
pub fn map_search_hit(item: &XmlNode) -> Option<SearchHit> {
    let id = item.attr("id")?;

    Some(SearchHit {
        id: id.to_string(),
        name: primary_name(item),
        year_published: int_value(item, "yearpublished"),
        kind: item.attr("type").and_then(GameKind::from_item_type),
    })
}

/// Prefers the `name` tagged primary, then the first name, then the sentinel.
fn primary_name(item: &XmlNode) -> String {
    let names = item.children("name");
    names
        .iter()
        .find(|n| n.attr("type") == Some(bgg::NAME_PRIMARY))
        .or_else(|| names.first())
        .and_then(|n| n.attr("value"))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_GAME_NAME)
        .to_string()
}

/// Values of `link` children whose `type` matches, in upstream order, without repeats.
fn link_values(item: &XmlNode, link_type: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for link in item
        .children("link")
        .iter()
        .filter(|l| l.attr("type") == Some(link_type))
    {
        if let Some(value) = link.attr("value")
            && !values.iter().any(|v| v == value)
        {
            values.push(value.to_string());
        }
    }
    values
}

fn int_value(node: &XmlNode, tag: &str) -> Option<i32> {
    parse_int(node.first(tag).and_then(|n| n.attr("value")))
}

fn float_value(node: &XmlNode, tag: &str) -> Option<f64> {
    parse_float(node.first(tag).and_then(|n| n.attr("value")))
}

pub(crate) fn parse_int(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
}

pub(crate) fn parse_float(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|f| f.is_finite())
}
