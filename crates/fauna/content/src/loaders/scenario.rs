//! World scenario loader.
//!
//! A scenario is the complete initial world for one simulation: which
//! agents exist, where the pickups, flags, and spawn points sit, and the
//! placement seed. RON format, validated on instantiation.

use std::path::Path;

use fauna_core::{AgentTemplate, PickupKind, Position, SimConfig, Simulation, Species};

use crate::loaders::{LoadResult, read_file};

/// One group of identical agents.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AgentSpec {
    pub species: u32,
    #[serde(default)]
    pub armed: bool,
    /// Initial meter value; archetype default when omitted.
    #[serde(default)]
    pub starting_resource: Option<f32>,
    /// Fixed position, or seeded-random placement when omitted.
    #[serde(default)]
    pub position: Option<(f32, f32)>,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PickupSpec {
    pub kind: PickupKind,
    pub position: (f32, f32),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct FlagSpec {
    pub species: u32,
    pub home: (f32, f32),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SpawnPointSpec {
    pub species: u32,
    pub position: (f32, f32),
}

/// Declarative initial world.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ScenarioSpec {
    pub seed: u64,
    pub agents: Vec<AgentSpec>,
    pub pickups: Vec<PickupSpec>,
    pub flags: Vec<FlagSpec>,
    pub spawn_points: Vec<SpawnPointSpec>,
}

impl ScenarioSpec {
    /// Build a running simulation from this scenario.
    ///
    /// Flags and spawn points are placed before agents so that respawn
    /// bookkeeping and home bases exist from the first event on.
    pub fn instantiate(&self, config: SimConfig) -> LoadResult<Simulation> {
        let mut sim = Simulation::new(config, self.seed)
            .map_err(|e| anyhow::anyhow!("Failed to create simulation: {}", e))?;

        for flag in &self.flags {
            sim.add_flag(Species(flag.species), position(flag.home))
                .map_err(|e| anyhow::anyhow!("Failed to place flag: {}", e))?;
        }
        for point in &self.spawn_points {
            sim.add_spawn_point(Species(point.species), position(point.position));
        }
        for pickup in &self.pickups {
            sim.add_pickup(pickup.kind, position(pickup.position));
        }
        for group in &self.agents {
            let template = AgentTemplate {
                species: Species(group.species),
                armed: group.armed,
                starting_resource: group.starting_resource,
            };
            for _ in 0..group.count {
                let at = match group.position {
                    Some(fixed) => position(fixed),
                    None => sim.random_position(),
                };
                sim.spawn_agent(&template, at);
            }
        }

        // Setup outcomes are not part of the run.
        sim.drain_outcomes();
        Ok(sim)
    }
}

fn position((x, y): (f32, f32)) -> Position {
    Position::new(x, y)
}

/// Loader for world scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        let spec: ScenarioSpec = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Ok(spec)
    }
}
