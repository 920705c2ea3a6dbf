//! Agent construction helpers.
//!
//! All agent creation funnels through here so the two agent archetypes stay
//! consistent: foragers carry an energy meter that decays and start with a
//! configurable stake, armed agents carry a non-decaying health meter, full
//! ammo, and spawn at full strength.

use crate::config::SimConfig;
use crate::state::{AgentId, AgentState, Behavior, Position, ResourceMeter, SimState, Species, Timer};

/// Host-facing description of an agent to spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTemplate {
    pub species: Species,
    /// Armed agents fight with hits and respawn; unarmed ones eat on contact.
    pub armed: bool,
    /// Initial meter value. Defaults to the energy-node payout for foragers
    /// and to full health for armed agents.
    pub starting_resource: Option<f32>,
}

pub(crate) fn spawn_from_template(
    state: &mut SimState,
    config: &SimConfig,
    template: &AgentTemplate,
    position: Position,
) -> AgentId {
    if template.armed {
        spawn_armed(state, config, template.species, position)
    } else {
        let energy = template.starting_resource.unwrap_or(config.pickup_energy);
        spawn_forager(
            state,
            config,
            template.species,
            energy,
            config.decay_per_second,
            position,
        )
    }
}

/// Spawn an unarmed forager with the given energy stake.
pub(crate) fn spawn_forager(
    state: &mut SimState,
    config: &SimConfig,
    species: Species,
    energy: f32,
    decay_per_second: f32,
    position: Position,
) -> AgentId {
    let id = state.allocate_agent_id();
    state.add_agent(AgentState {
        id,
        species,
        position,
        resource: ResourceMeter::new(energy, config.max_energy),
        decay_per_second,
        armed: false,
        ammo: 0,
        behavior: Behavior::Wandering,
        target: None,
        mate_cooldown: Timer::READY,
        attack_cooldown: Timer::READY,
        carrying: None,
    })
}

/// Spawn an armed agent at full health with a full magazine.
pub(crate) fn spawn_armed(
    state: &mut SimState,
    config: &SimConfig,
    species: Species,
    position: Position,
) -> AgentId {
    let id = state.allocate_agent_id();
    state.add_agent(AgentState {
        id,
        species,
        position,
        resource: ResourceMeter::full(config.max_health),
        decay_per_second: 0.0,
        armed: true,
        ammo: config.max_ammo,
        behavior: Behavior::Wandering,
        target: None,
        mate_cooldown: Timer::READY,
        attack_cooldown: Timer::READY,
        carrying: None,
    })
}
