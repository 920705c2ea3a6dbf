//! Simulation configuration loader.

use std::path::Path;

use fauna_core::SimConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation parameters from TOML files.
///
/// Fields absent from the file keep their defaults, so a file only needs to
/// name the parameters it overrides. The parsed config is validated before
/// it is returned.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SimConfig> {
        let content = read_file(path)?;
        let config: SimConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }
}
