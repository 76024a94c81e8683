//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, upstream vocabulary and default
//! configuration values so they are not scattered across the codebase.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 3000;

/// Maximum number of hot-list candidates resolved by a range query
pub const HOT_SAMPLE_SIZE: usize = 20;

/// Name used when the upstream item carries no name at all
pub const UNKNOWN_GAME_NAME: &str = "unknown";

/// Default upstream endpoints
pub mod defaults {
    /// BoardGameGeek XML API 2 base URL
    pub const BGG_API_URL: &str = "https://boardgamegeek.com/xmlapi2";

    /// OpenAI-compatible completion API base URL
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

    /// Completion model used for game explanations
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";

    /// Upper bound on generated tokens per explanation
    pub const COMPLETION_MAX_TOKENS: u32 = 400;

    /// Sampling temperature for explanations
    pub const COMPLETION_TEMPERATURE: f32 = 0.7;
}

/// Vocabulary of the BoardGameGeek XML API
pub mod bgg {
    /// Item type of base games
    pub const TYPE_BOARDGAME: &str = "boardgame";

    /// Item type of expansions
    pub const TYPE_EXPANSION: &str = "boardgameexpansion";

    /// Link type carrying a category
    pub const LINK_CATEGORY: &str = "boardgamecategory";

    /// Link type carrying a mechanic
    pub const LINK_MECHANIC: &str = "boardgamemechanic";

    /// Name type of the primary name among alternates
    pub const NAME_PRIMARY: &str = "primary";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the XML API base URL override
    pub const BGG_API_URL: &str = "BGG_API_URL";

    /// Environment variable for the completion API base URL override
    pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";

    /// Environment variable holding the completion API key
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

    /// Environment variable for the completion model override
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";

    /// Environment variable for the HTTP server port
    pub const PORT: &str = "PORT";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "GATEWAY_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "GATEWAY_HTTP_TIMEOUT";
}

/// User-facing messages returned by the HTTP surface
pub mod messages {
    pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
    pub const INTERNAL_ERROR: &str = "Error interno del servidor";
    pub const MISSING_NAME: &str = "Debes indicar un nombre en el query string (?nombre=...)";
    pub const NO_GAMES_FOR_NAME: &str = "No se encontraron juegos con ese nombre";
    pub const GAME_NOT_FOUND: &str = "Juego no encontrado en BGG";
    pub const SEARCH_FAILED: &str = "Error interno del servidor al buscar juegos";
    pub const DETAILS_FAILED: &str = "Error interno del servidor al obtener detalles del juego";
    pub const EXPLANATION_FAILED: &str = "Error interno del servidor al generar explicación";
    pub const EXPLANATION_EMPTY: &str = "No se pudo generar explicación con la IA";
    pub const MISSING_BOUNDS: &str = "Debes indicar min y max como números enteros (?min=...&max=...)";
    pub const FILTER_FAILED: &str = "Error interno del servidor al filtrar juegos";
    pub const EXPLANATION_FALLBACK: &str = "Hubo un error al generar la explicación.";
}
