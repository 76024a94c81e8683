pub mod urls;
pub mod http_client;
pub mod fetch_utils;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export fetch utilities
pub use fetch_utils::{fetch_document, fetch_xml};
// Re-export the catalog
pub use core::GameCatalog;
