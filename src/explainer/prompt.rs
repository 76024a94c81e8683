use crate::data_fetcher::models::Game;

fn or_unknown<T: ToString>(value: Option<T>, unknown: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| unknown.to_string())
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "no indicadas".to_string()
    } else {
        values.join(", ")
    }
}

/// Builds the completion prompt describing `game`.
pub fn build_prompt(game: &Game) -> String {
    let rating = game
        .average_rating
        .map(|r| format!("{r:.2}"))
        .unwrap_or_else(|| "sin puntuación".to_string());

    format!(
        "Tengo información sobre un juego de mesa:\n\
         \n\
         - Nombre: {name}\n\
         - Año de publicación: {year}\n\
         - Jugadores: {min_players} a {max_players}\n\
         - Duración: {playing_time} minutos\n\
         - Edad mínima: {min_age}\n\
         - Categorías: {categories}\n\
         - Mecánicas: {mechanics}\n\
         - Puntuación media en BGG: {rating}\n\
         - Ranking en BGG: {rank}\n\
         \n\
         Escribe una breve explicación atractiva de este juego, como si fueras un experto en juegos de mesa modernos.",
        name = game.name,
        year = or_unknown(game.year_published, "desconocido"),
        min_players = or_unknown(game.min_players, "?"),
        max_players = or_unknown(game.max_players, "?"),
        playing_time = or_unknown(game.playing_time, "?"),
        min_age = or_unknown(game.min_age, "?"),
        categories = join_or_none(&game.categories),
        mechanics = join_or_none(&game.mechanics),
        rank = or_unknown(game.rank, "sin ranking"),
    )
}
