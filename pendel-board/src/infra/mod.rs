pub mod api_client;
pub mod board_feed;
pub mod config;
pub mod constants;
