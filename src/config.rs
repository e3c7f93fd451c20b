//! Runtime Configuration
//!
//! Environment variables read by the binaries:
//! - `PLANT_CATALOG`: path to a plant catalog CSV (default: embedded reference catalog)
//! - `SCORE_MODEL`: path to a linear score-model JSON (default: embedded coefficients)
//! - `PORT`: HTTP port for the API server (default 5000)

use std::path::PathBuf;

use anyhow::Result;

use crate::catalog::PlantCatalog;
use crate::data::load_plant_catalog;
use crate::engine::CompostEngine;
use crate::model::LinearScoreModel;

pub const ENV_PLANT_CATALOG: &str = "PLANT_CATALOG";
pub const ENV_SCORE_MODEL: &str = "SCORE_MODEL";
pub const ENV_PORT: &str = "PORT";

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub plant_catalog: Option<PathBuf>,
    pub score_model: Option<PathBuf>,
    pub port: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            plant_catalog: None,
            score_model: None,
            port: DEFAULT_PORT,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset and an
    /// unparseable port falls back to the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty(ENV_PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid {}={:?}, using {}", ENV_PORT, raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            plant_catalog: non_empty(ENV_PLANT_CATALOG).map(PathBuf::from),
            score_model: non_empty(ENV_SCORE_MODEL).map(PathBuf::from),
            port,
        }
    }

    pub fn log_summary(&self) {
        let describe = |path: &Option<PathBuf>| match path {
            Some(p) => p.display().to_string(),
            None => "(built-in)".to_string(),
        };
        tracing::info!("Configuration:");
        tracing::info!("  {}: {}", ENV_PLANT_CATALOG, describe(&self.plant_catalog));
        tracing::info!("  {}: {}", ENV_SCORE_MODEL, describe(&self.score_model));
        tracing::info!("  {}: {}", ENV_PORT, self.port);
    }

    /// Load collaborators and construct the engine
    pub fn build_engine(&self) -> Result<CompostEngine> {
        let catalog = match &self.plant_catalog {
            Some(path) => load_plant_catalog(path)?,
            None => PlantCatalog::reference(),
        };

        let model = match &self.score_model {
            Some(path) => LinearScoreModel::load(path)?,
            None => LinearScoreModel::reference(),
        };

        Ok(CompostEngine::new(catalog, model))
    }
}
