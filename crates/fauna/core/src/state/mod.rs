//! Authoritative simulation state.
//!
//! This module owns the data structures describing agents, world items, and
//! lifecycle bookkeeping. Hosts query this state but mutate it exclusively
//! through the engine's event reducer.
pub mod types;

pub use types::{
    AgentId, AgentState, Behavior, FlagId, FlagState, PickupId, PickupKind, PickupState, Position,
    ResourceMeter, SpawnPointState, Species, Target, Timer,
};

use crate::registry::SpeciesRegistry;
use crate::rng::SpawnRng;

/// A pending respawn for an eliminated armed agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RespawnTicket {
    pub species: Species,
    pub countdown: Timer,
}

/// Canonical snapshot of one simulation's world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimState {
    /// Sequential id allocators (monotonically increasing, never reused).
    next_agent_id: u32,
    next_pickup_id: u32,
    next_flag_id: u32,

    /// Seconds of simulated time since start.
    pub clock: f64,

    /// All live agents, in spawn order.
    pub agents: Vec<AgentState>,
    /// Live-agent index by species. Updated atomically with agent lifecycle.
    pub registry: SpeciesRegistry,

    pub pickups: Vec<PickupState>,
    pub flags: Vec<FlagState>,
    pub spawn_points: Vec<SpawnPointState>,

    /// Pending respawns, advanced each tick.
    pub respawns: Vec<RespawnTicket>,
    /// Countdown until the next energy node reseed.
    pub energy_reseed: Timer,

    /// Deterministic placement randomness.
    pub rng: SpawnRng,
}

impl SimState {
    /// Create an empty world with the given placement seed.
    pub fn new(seed: u64) -> Self {
        Self {
            next_agent_id: 0,
            next_pickup_id: 0,
            next_flag_id: 0,
            clock: 0.0,
            agents: Vec::new(),
            registry: SpeciesRegistry::new(),
            pickups: Vec::new(),
            flags: Vec::new(),
            spawn_points: Vec::new(),
            respawns: Vec::new(),
            energy_reseed: Timer::READY,
            rng: SpawnRng::new(seed),
        }
    }

    /// Allocate a fresh, never-used agent id.
    pub fn allocate_agent_id(&mut self) -> AgentId {
        let id = AgentId(self.next_agent_id);
        self.next_agent_id = self.next_agent_id.checked_add(1).expect("AgentId overflow");
        id
    }

    pub fn allocate_pickup_id(&mut self) -> PickupId {
        let id = PickupId(self.next_pickup_id);
        self.next_pickup_id = self
            .next_pickup_id
            .checked_add(1)
            .expect("PickupId overflow");
        id
    }

    pub fn allocate_flag_id(&mut self) -> FlagId {
        let id = FlagId(self.next_flag_id);
        self.next_flag_id = self.next_flag_id.checked_add(1).expect("FlagId overflow");
        id
    }

    /// Insert a fully built agent and register it in the same step, so no
    /// query can see one without the other.
    pub fn add_agent(&mut self, agent: AgentState) -> AgentId {
        let id = agent.id;
        self.registry.register(id, agent.species);
        self.agents.push(agent);
        id
    }

    /// Remove an agent from the world and from every registry set
    /// synchronously. Returns the removed state, or `None` if the id was
    /// already gone (idempotent).
    ///
    /// Flag dropping for carriers is handled by the interaction resolver
    /// before this runs.
    pub fn remove_agent(&mut self, id: AgentId) -> Option<AgentState> {
        self.registry.unregister(id);
        let index = self.agents.iter().position(|agent| agent.id == id)?;
        Some(self.agents.remove(index))
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentState> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut AgentState> {
        self.agents.iter_mut().find(|agent| agent.id == id)
    }

    pub fn pickup(&self, id: PickupId) -> Option<&PickupState> {
        self.pickups.iter().find(|pickup| pickup.id == id)
    }

    pub fn pickup_mut(&mut self, id: PickupId) -> Option<&mut PickupState> {
        self.pickups.iter_mut().find(|pickup| pickup.id == id)
    }

    pub fn flag(&self, id: FlagId) -> Option<&FlagState> {
        self.flags.iter().find(|flag| flag.id == id)
    }

    pub fn flag_mut(&mut self, id: FlagId) -> Option<&mut FlagState> {
        self.flags.iter_mut().find(|flag| flag.id == id)
    }

    /// The flag owned by one species, if the scenario has flags.
    pub fn flag_of(&self, species: Species) -> Option<&FlagState> {
        self.flags.iter().find(|flag| flag.species == species)
    }

    /// Home base of a species: its flag's home position.
    pub fn home_of(&self, species: Species) -> Option<Position> {
        self.flag_of(species).map(|flag| flag.home)
    }

    /// Pick the next spawn point for a species. Occupancy is decided by
    /// presence: a point with no live agent within `clear_radius` is open.
    /// Open points win in index order; falls back to the first covered
    /// point rather than stalling the respawn.
    pub fn next_spawn_point(&self, species: Species, clear_radius: f32) -> Option<usize> {
        let mut fallback = None;
        for (index, point) in self.spawn_points.iter().enumerate() {
            if point.species != species {
                continue;
            }
            let covered = self
                .agents
                .iter()
                .any(|agent| agent.position.distance(point.position) <= clear_radius);
            if !covered {
                return Some(index);
            }
            fallback.get_or_insert(index);
        }
        fallback
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(0)
    }
}
