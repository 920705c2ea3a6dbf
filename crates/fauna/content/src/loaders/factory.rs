//! Scenario factory for building simulations from a data directory.

use std::path::PathBuf;

use fauna_core::{SimConfig, Simulation};

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader, ScenarioSpec};

/// Loads a full simulation setup from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── scenario.ron
/// ```
///
/// A missing `config.toml` falls back to default parameters; the scenario
/// file is required.
pub struct ScenarioFactory {
    data_dir: PathBuf,
}

impl ScenarioFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load simulation parameters from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SimConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(SimConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the world description from `scenario.ron`.
    pub fn load_scenario(&self) -> LoadResult<ScenarioSpec> {
        let path = self.data_dir.join("scenario.ron");
        ScenarioLoader::load(&path)
    }

    /// Load everything and return a ready-to-run simulation.
    pub fn build(&self) -> LoadResult<Simulation> {
        let config = self.load_config()?;
        let scenario = self.load_scenario()?;
        scenario.instantiate(config)
    }
}
