//! Startup glue a host shell uses to wire the dashboard together.

use std::sync::Arc;
use std::time::Duration;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::infra::config::Config;

/// Resolved runtime configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Arc<str>,
    pub refresh_interval: Duration,
}

impl AppConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Arc::from(api_url.into()),
            refresh_interval: Duration::from_secs(
                crate::infra::constants::board::DEFAULT_REFRESH_SECS,
            ),
        }
    }

    /// Layering: compiled defaults, then the config file, then the
    /// environment (`PENDEL_API_URL`, `PENDEL_REFRESH_SECS`).
    pub fn from_environment() -> Self {
        let config = Config::load();
        Self {
            api_url: Arc::from(config.api_url),
            refresh_interval: Duration::from_secs(config.refresh_secs),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Initialize logging. Respects `RUST_LOG` when set, otherwise defaults
/// to warn globally with debug output for this crate. Safe to call more
/// than once (later calls are no-ops), which keeps tests simple.
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = env_logger::try_init();
    } else {
        let _ = Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("pendel_board", LevelFilter::Debug)
            .try_init();
    }
}
