use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallerConfig {
    /// Shared passphrase for the admin panel.
    #[serde(default = "default_passphrase")]
    pub admin_passphrase: String,
    /// Directory holding the persisted collections. Defaults to the user
    /// data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Filter directive for the log file, e.g. "taller_core=debug".
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_passphrase() -> String {
    taller_core::DEFAULT_PASSPHRASE.to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TallerConfig {
    fn default() -> Self {
        Self {
            admin_passphrase: default_passphrase(),
            data_dir: None,
            log_filter: default_log_filter(),
        }
    }
}

impl TallerConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("taller-tui")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if the file doesn't
    /// exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("Cannot determine data directory")?
                .join("taller-tui")),
        }
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("taller-tui.log"))
    }
}
