pub mod bootstrap;

pub use bootstrap::{AppConfig, init_logging};
