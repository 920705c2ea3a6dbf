//! Host-facing simulation facade.
//!
//! [`Simulation`] is the single entry point an embedding host talks to: it
//! validates configuration up front, accepts the world description during
//! setup, then consumes host events through the `on_*` methods and
//! accumulates every produced [`Outcome`] until the host drains them.
//! Precondition failures at runtime are silent no-ops surfaced only through
//! `tracing`; the constructor is the one place that fails loudly.

use tracing::info;

use crate::config::{ConfigError, SimConfig};
use crate::engine::{ContactTarget, Event, SimEngine};
use crate::interaction::Outcome;
use crate::perception::Percept;
use crate::spawn::{self, AgentTemplate};
use crate::state::{
    AgentId, Behavior, FlagId, FlagState, PickupId, PickupKind, PickupState, Position, SimState,
    SpawnPointState, Species, Target, Timer,
};

/// Setup-time failure. Nothing after construction returns errors.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{species} already owns a flag")]
    DuplicateFlag { species: Species },
}

/// One simulation instance: validated config, authoritative state, and the
/// outcome queue.
#[derive(Clone, Debug)]
pub struct Simulation {
    engine: SimEngine,
    outcomes: Vec<Outcome>,
}

impl Simulation {
    /// Validate the configuration and build an empty world.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SetupError> {
        config.validate()?;
        info!(seed, "simulation created");
        Ok(Self {
            engine: SimEngine::new(config, seed),
            outcomes: Vec::new(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        self.engine.config()
    }

    pub fn state(&self) -> &SimState {
        self.engine.state()
    }

    // ===== world setup =====

    /// Spawn an agent from a template. Also usable mid-run.
    pub fn spawn_agent(&mut self, template: &AgentTemplate, position: Position) -> AgentId {
        let id = spawn::spawn_from_template(
            &mut self.engine.state,
            &self.engine.config,
            template,
            position,
        );
        self.outcomes.push(Outcome::Spawned {
            agent: id,
            species: template.species,
        });
        id
    }

    /// Draw a seeded random position inside the configured spawn extent.
    ///
    /// Scenario loaders use this for agents declared without a fixed
    /// position; every draw advances the placement rng.
    pub fn random_position(&mut self) -> Position {
        let extent = self.engine.config.spawn_extent;
        self.engine.state.rng.position(extent)
    }

    pub fn add_pickup(&mut self, kind: PickupKind, position: Position) -> PickupId {
        let id = self.engine.state.allocate_pickup_id();
        self.engine.state.pickups.push(PickupState {
            id,
            kind,
            position,
            cooldown: Timer::READY,
        });
        id
    }

    /// Place one species' flag. Each species owns at most one.
    pub fn add_flag(&mut self, species: Species, home: Position) -> Result<FlagId, SetupError> {
        if self.engine.state.flag_of(species).is_some() {
            return Err(SetupError::DuplicateFlag { species });
        }
        let id = self.engine.state.allocate_flag_id();
        self.engine
            .state
            .flags
            .push(FlagState::new(id, species, home));
        Ok(id)
    }

    pub fn add_spawn_point(&mut self, species: Species, position: Position) {
        self.engine.state.spawn_points.push(SpawnPointState { species, position });
    }

    // ===== host events =====

    pub fn on_tick(&mut self, dt: f32) {
        self.apply(Event::Tick { dt });
    }

    pub fn on_perceived(&mut self, agent: AgentId, percept: Percept) {
        self.apply(Event::Perceived { agent, percept });
    }

    pub fn on_contact(&mut self, agent: AgentId, other: ContactTarget) {
        self.apply(Event::Contact { agent, other });
    }

    pub fn on_hit(&mut self, attacker: AgentId, target: AgentId) {
        self.apply(Event::Hit { attacker, target });
    }

    pub fn on_movement_reached(&mut self, agent: AgentId) {
        self.apply(Event::MovementReached { agent });
    }

    pub fn on_movement_cancelled(&mut self, agent: AgentId) {
        self.apply(Event::MovementCancelled { agent });
    }

    fn apply(&mut self, event: Event) {
        self.outcomes.extend(self.engine.apply(event));
    }

    // ===== queries =====

    /// Update the host-authoritative position of an agent. Movement itself
    /// lives outside the core; positions are fed back in.
    pub fn set_position(&mut self, agent: AgentId, position: Position) {
        if let Some(a) = self.engine.state.agent_mut(agent) {
            a.position = position;
        }
    }

    pub fn current_behavior(&self, agent: AgentId) -> Option<Behavior> {
        self.engine.state.agent(agent).map(|a| a.behavior)
    }

    pub fn current_target(&self, agent: AgentId) -> Option<Target> {
        self.engine.state.agent(agent).and_then(|a| a.target)
    }

    /// Resolve the agent's current target to a 3D destination for the host's
    /// movement system (y-up, ground at zero). `None` while wandering or
    /// when the targeted entity has despawned.
    pub fn movement_goal(&self, agent: AgentId) -> Option<[f32; 3]> {
        let state = &self.engine.state;
        let position = match state.agent(agent)?.target? {
            Target::Agent(id) => state.agent(id)?.position,
            Target::Pickup(id) => state.pickup(id)?.position,
            Target::Flag(id) => state.flag(id)?.position,
            Target::Point(point) => point,
        };
        Some(position.lift())
    }

    /// True once the id no longer names a live agent.
    pub fn is_eliminated(&self, agent: AgentId) -> bool {
        !self.engine.state.registry.contains(agent)
    }

    /// Take every outcome accumulated since the last drain, in production
    /// order.
    pub fn drain_outcomes(&mut self) -> Vec<Outcome> {
        std::mem::take(&mut self.outcomes)
    }
}

#[cfg(feature = "serde")]
impl Simulation {
    /// Capture a restorable copy of the configuration and world state.
    ///
    /// Undrained outcomes are not part of the snapshot; drain before saving.
    pub fn snapshot(&self) -> crate::snapshot::SimSnapshot {
        crate::snapshot::SimSnapshot {
            config: self.engine.config.clone(),
            state: self.engine.state.clone(),
        }
    }

    /// Resume from a snapshot, re-validating its configuration.
    pub fn from_snapshot(snapshot: crate::snapshot::SimSnapshot) -> Result<Self, SetupError> {
        snapshot.config.validate()?;
        Ok(Self {
            engine: SimEngine {
                config: snapshot.config,
                state: snapshot.state,
            },
            outcomes: Vec::new(),
        })
    }
}
