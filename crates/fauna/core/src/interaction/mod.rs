//! Interaction resolution.
//!
//! Deterministic rules for what happens when entities come into contact or
//! land hits on each other. Every resolver call returns explicit [`Outcome`]
//! values consumed synchronously by the host's tick loop - there is no
//! hidden callback fan-out, and re-invoking a resolver on already-resolved
//! state is a no-op rather than an error.
//!
//! - `consume`: eat / mate on agent contact, pickup consumption.
//! - `combat`: hit and elimination resolution.
//! - `objective`: flag pickup, return, capture, and drop.

mod combat;
mod consume;
mod objective;

pub use combat::resolve_hit;
pub use consume::{resolve_agent_contact, resolve_pickup_contact};
pub use objective::{check_captures, resolve_flag_contact};

use tracing::debug;

use crate::config::SimConfig;
use crate::state::{AgentId, FlagId, PickupId, PickupKind, RespawnTicket, SimState, Species, Timer};

/// What an interaction (or a lifecycle step it triggered) did.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A forager ate a weaker rival, absorbing its entire resource.
    Ate {
        predator: AgentId,
        prey: AgentId,
        gained: f32,
    },
    /// Two compatible agents produced an offspring.
    Mated {
        parent_a: AgentId,
        parent_b: AgentId,
        offspring: AgentId,
    },
    /// A new agent entered the world (offspring, scenario seed, or respawn).
    Spawned { agent: AgentId, species: Species },
    /// A pickup was consumed and went on cooldown.
    PickedUp {
        agent: AgentId,
        pickup: PickupId,
        kind: PickupKind,
    },
    /// A hit landed without eliminating the target.
    Hit {
        attacker: AgentId,
        target: AgentId,
        remaining: f32,
    },
    /// An agent left the world. `by` names the killer, if any; starvation
    /// reports `None`.
    Eliminated {
        agent: AgentId,
        by: Option<AgentId>,
    },
    FlagPickedUp { agent: AgentId, flag: FlagId },
    FlagReturned { agent: AgentId, flag: FlagId },
    FlagCaptured { agent: AgentId, flag: FlagId },
    FlagDropped { agent: AgentId, flag: FlagId },
}

/// Remove an agent from the world: drop any carried flag where the agent
/// stood, clear registry membership synchronously, and queue a respawn for
/// armed agents when the scenario supports one.
pub(crate) fn eliminate(
    state: &mut SimState,
    config: &SimConfig,
    id: AgentId,
    by: Option<AgentId>,
    outcomes: &mut Vec<Outcome>,
) {
    let Some(agent) = state.agent(id) else {
        return;
    };
    let position = agent.position;
    let species = agent.species;
    let armed = agent.armed;
    let carried = agent.carrying;

    if let Some(flag_id) = carried {
        if let Some(flag) = state.flag_mut(flag_id) {
            flag.drop_at(position);
            outcomes.push(Outcome::FlagDropped { agent: id, flag: flag_id });
        }
    }

    state.remove_agent(id);
    debug!(agent = %id, ?by, "eliminated");
    outcomes.push(Outcome::Eliminated { agent: id, by });

    let can_respawn = armed
        && config.respawn_delay > 0.0
        && state.spawn_points.iter().any(|p| p.species == species);
    if can_respawn {
        state.respawns.push(RespawnTicket {
            species,
            countdown: Timer::start(config.respawn_delay),
        });
    }
}
