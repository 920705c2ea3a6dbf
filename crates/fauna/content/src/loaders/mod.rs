//! Loaders for reading simulation data from files.
//!
//! Configuration comes from TOML, world scenarios from RON. Both parse into
//! fauna-core types and fail fast with context on malformed input.

pub mod config;
pub mod factory;
pub mod scenario;

pub use config::ConfigLoader;
pub use factory::ScenarioFactory;
pub use scenario::{AgentSpec, FlagSpec, PickupSpec, ScenarioLoader, ScenarioSpec, SpawnPointSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
