use serde::{Deserialize, Serialize};

use crate::infra::constants::board::DEFAULT_REFRESH_SECS;

/// Persisted client settings. Navigation position is deliberately not
/// part of this; every session starts on the first screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub refresh_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("pendel").join("config.json");
            if config_path.exists()
                && let Ok(content) = std::fs::read_to_string(&config_path)
                && let Ok(loaded_config) = serde_json::from_str::<Config>(&content)
            {
                config = loaded_config;
            }
        }

        // Environment overrides the config file.
        if let Ok(api_url) = std::env::var("PENDEL_API_URL") {
            config.api_url = api_url;
        }
        if let Ok(secs) = std::env::var("PENDEL_REFRESH_SECS")
            && let Ok(secs) = secs.parse::<u64>()
        {
            config.refresh_secs = secs;
        }

        config
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("pendel");
            std::fs::create_dir_all(&app_dir)?;
            let config_path = app_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }
}
