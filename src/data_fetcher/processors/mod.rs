pub mod mapper;
pub mod range_filter;

pub use mapper::{map_item, map_search_hit};
pub use range_filter::{fits_duration, supports_player_range};
