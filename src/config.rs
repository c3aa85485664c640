use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI display preferences, stored as `~/.config/trackx/config.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Distance unit for decoded snapshots: "km" (default) or "mi".
    pub units: Option<String>,
    /// Country code returned when a lookup misses and no --fallback is given.
    pub fallback_country: Option<String>,
}

impl Config {
    pub fn use_miles(&self) -> bool {
        self.units.as_deref() == Some("mi")
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    pub config: Config,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .join(".config")
            .join("trackx");

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        let config_path = config_dir.join("config.toml");
        let config = if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).context("Failed to read config.toml")?;
            toml::from_str(&content).context("Failed to parse config.toml")?
        } else {
            Config::default()
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn save(&self) -> Result<()> {
        let content = toml::to_string(&self.config).context("Failed to serialize config")?;
        std::fs::write(&self.config_path, content).context("Failed to write config.toml")?;
        Ok(())
    }
}
