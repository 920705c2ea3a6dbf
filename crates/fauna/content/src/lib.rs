//! Data-driven scenario definitions and loaders.
//!
//! This crate turns RON/TOML data files into running simulations:
//! - Simulation parameters (data-driven via TOML)
//! - World scenarios: agents, pickups, flags, spawn points (data-driven via RON)
//!
//! All loaders use fauna-core types directly with serde for RON/TOML
//! deserialization. Malformed data fails fast at load time; nothing from
//! this crate is consulted once a simulation is running.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AgentSpec, ConfigLoader, FlagSpec, PickupSpec, ScenarioFactory, ScenarioLoader, ScenarioSpec,
    SpawnPointSpec,
};
