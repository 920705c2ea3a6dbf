//! Deterministic decision core for autonomous agent simulations.
//!
//! `fauna-core` implements an event-driven, priority-arbitrated state machine
//! over a registry of agents, world pickups, and objective flags. The host
//! owns time, movement, sensing, and collision; it feeds events into
//! [`sim::Simulation`] and reads back explicit [`interaction::Outcome`]
//! values. All state mutation flows through [`engine::SimEngine`], and the
//! supporting crates depend on the types re-exported here.
pub mod arbitration;
pub mod config;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod perception;
pub mod registry;
pub mod rng;
pub mod sim;
pub mod spawn;
pub mod state;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use arbitration::{Decision, arbitrate};
pub use config::{ConfigError, SimConfig};
pub use engine::{ContactTarget, Event, SimEngine};
pub use error::ErrorSeverity;
pub use interaction::Outcome;
pub use perception::{Classified, Percept, classify};
pub use registry::SpeciesRegistry;
pub use rng::SpawnRng;
pub use sim::{SetupError, Simulation};
pub use spawn::AgentTemplate;
pub use state::{
    AgentId, AgentState, Behavior, FlagId, FlagState, PickupId, PickupKind, PickupState, Position,
    ResourceMeter, RespawnTicket, SimState, SpawnPointState, Species, Target, Timer,
};

#[cfg(feature = "serde")]
pub use snapshot::{SimSnapshot, SnapshotError};
