use crate::data_fetcher::models::Game;

/// True when the game supports the whole requested player range,
/// i.e. `min_players <= min` and `max_players >= max`.
/// Games missing either bound never match.
pub fn supports_player_range(game: &Game, min: i32, max: i32) -> bool {
    match (game.min_players, game.max_players) {
        (Some(lo), Some(hi)) => lo <= min && hi >= max,
        _ => false,
    }
}

/// True when both playtime bounds are known and the nominal playing time
/// falls within `[min, max]`.
pub fn fits_duration(game: &Game, min: i32, max: i32) -> bool {
    if game.min_playtime.is_none() || game.max_playtime.is_none() {
        return false;
    }
    game.playing_time
        .is_some_and(|minutes| (min..=max).contains(&minutes))
}
