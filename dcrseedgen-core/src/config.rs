use crate::error::{Result, SeedgenError};
use crate::grid::GridLayout;
use crate::network::Network;
use crate::seed::{validate_seed_size, MnemonicEncoding, RECOMMENDED_SEED_BYTES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const EXPORT_FOLDER_NAME: &str = "exports";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedgenConfig {
    pub network: Network,
    pub seed_size: usize,
    pub encoding: MnemonicEncoding,
    pub layout: GridLayout,
    pub export_dir: PathBuf,
}

impl Default for SeedgenConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            seed_size: RECOMMENDED_SEED_BYTES,
            encoding: MnemonicEncoding::Pgp,
            layout: GridLayout::default(),
            export_dir: PathBuf::from(EXPORT_FOLDER_NAME),
        }
    }
}

impl SeedgenConfig {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_seed_size(self.seed_size, self.encoding)?;
        self.layout.validate()?;

        if self.export_dir.as_os_str().is_empty() {
            return Err(SeedgenError::config("Export directory cannot be empty"));
        }

        Ok(())
    }

    /// Reads a JSON config, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
