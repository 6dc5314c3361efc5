use std::env;
use std::path::PathBuf;
use std::time::Duration;

use shared::{Catalog, CatalogDefinition, OPEN_DURATION_MS};

use crate::error::ConsoleError;

pub const REVEAL_DELAY_KEY: &str = "CASE_REVEAL_DELAY_MS";
pub const CATALOG_PATH_KEY: &str = "CASE_CATALOG_PATH";
pub const RNG_SEED_KEY: &str = "CASE_RNG_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub reveal_delay: Duration,
    pub catalog_path: Option<PathBuf>,
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(OPEN_DURATION_MS as u64),
            catalog_path: None,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConsoleError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConsoleError> {
        let mut config = Self::default();

        if let Some(value) = lookup(REVEAL_DELAY_KEY) {
            let millis = value.trim().parse::<u64>().map_err(|_| ConsoleError::InvalidSetting {
                key: REVEAL_DELAY_KEY,
                value: value.clone(),
            })?;
            config.reveal_delay = Duration::from_millis(millis);
        }

        if let Some(value) = lookup(CATALOG_PATH_KEY).filter(|v| !v.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(value.trim()));
        }

        if let Some(value) = lookup(RNG_SEED_KEY) {
            let seed = value.trim().parse::<u64>().map_err(|_| ConsoleError::InvalidSetting {
                key: RNG_SEED_KEY,
                value: value.clone(),
            })?;
            config.rng_seed = Some(seed);
        }

        Ok(config)
    }

    /// The built-in catalog, or the JSON definition at `catalog_path` when one is set.
    pub fn load_catalog(&self) -> Result<Catalog, ConsoleError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::builtin()?);
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConsoleError::CatalogFile {
            path: path.clone(),
            source,
        })?;
        let definition: CatalogDefinition =
            serde_json::from_str(&raw).map_err(|source| ConsoleError::CatalogJson {
                path: path.clone(),
                source,
            })?;
        tracing::info!("Loading catalog from {}", path.display());
        Ok(Catalog::from_definition(definition)?)
    }
}
