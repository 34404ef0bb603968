use crate::theme::Theme;
use dcrseedgen_core::{Result, SeedgenConfig};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dcrseedgen")
}

/// Everything a command handler needs, built once in `main`.
pub struct CliContext {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: SeedgenConfig,
    pub theme: Theme,
}

impl CliContext {
    pub fn load(data_dir: PathBuf, config_path: PathBuf) -> Result<Self> {
        let config = SeedgenConfig::load(&config_path)?;
        tracing::debug!("Loaded config from {}", config_path.display());

        Ok(Self {
            data_dir,
            config_path,
            config,
            theme: Theme::default(),
        })
    }

    pub fn export_dir(&self, override_dir: Option<PathBuf>) -> PathBuf {
        override_dir.unwrap_or_else(|| self.config.export_dir.clone())
    }
}
