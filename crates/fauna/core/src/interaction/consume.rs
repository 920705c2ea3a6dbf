//! Consumption interactions: eating rivals, mating, and world pickups.

use tracing::debug;

use super::Outcome;
use crate::config::SimConfig;
use crate::spawn;
use crate::state::{AgentId, Behavior, PickupId, PickupKind, SimState, Target, Timer};

/// Resolve a contact between two agents, from the initiator's perspective.
///
/// The external collision system reports contacts symmetrically (both sides
/// receive the event), so each call only resolves what the initiating agent
/// can do: eat a strictly weaker rival, or mate with a compatible ally.
/// Anything else - including touching a stronger rival - is a silent no-op.
pub fn resolve_agent_contact(
    state: &mut SimState,
    config: &SimConfig,
    agent: AgentId,
    other: AgentId,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let (Some(a), Some(b)) = (state.agent(agent), state.agent(other)) else {
        // One side despawned earlier this tick. Goal-lost, not an error.
        return outcomes;
    };

    if a.rival(b) {
        try_eat(state, config, agent, other, &mut outcomes);
    } else if a.compatible(b) {
        try_mate(state, config, agent, other, &mut outcomes);
    }

    outcomes
}

/// Eat a strictly weaker rival: the predator absorbs the prey's entire
/// resource (then clamps) and the prey is eliminated.
fn try_eat(
    state: &mut SimState,
    config: &SimConfig,
    predator: AgentId,
    prey: AgentId,
    outcomes: &mut Vec<Outcome>,
) {
    let (Some(p), Some(q)) = (state.agent(predator), state.agent(prey)) else {
        return;
    };
    // Armed agents fight with hits, not contact consumption.
    if p.armed || q.armed {
        return;
    }
    // Strict `>`: equal energy eats nothing, in either direction.
    if p.resource.current() <= q.resource.current() {
        debug!(agent = %predator, other = %prey, "contact with non-weaker rival ignored");
        return;
    }

    let gained = state
        .agent_mut(prey)
        .map(|q| q.resource.take_all())
        .unwrap_or(0.0);
    super::eliminate(state, config, prey, Some(predator), outcomes);
    if let Some(p) = state.agent_mut(predator) {
        p.resource.gain(gained);
        p.start_wandering();
    }
    outcomes.push(Outcome::Ate {
        predator,
        prey,
        gained,
    });
}

/// Mate two mutually compatible, off-cooldown agents.
///
/// The offspring spawns with the average of its parents' resources at their
/// midpoint; both parents pay the mating cost and go on cooldown. Failing
/// either precondition is a silent no-op.
fn try_mate(
    state: &mut SimState,
    config: &SimConfig,
    agent: AgentId,
    other: AgentId,
    outcomes: &mut Vec<Outcome>,
) {
    let (Some(a), Some(b)) = (state.agent(agent), state.agent(other)) else {
        return;
    };
    if a.armed || b.armed {
        return;
    }
    if a.on_mate_cooldown() || b.on_mate_cooldown() {
        debug!(agent = %agent, other = %other, "mate attempt while on cooldown ignored");
        return;
    }

    let energy = (a.resource.current() + b.resource.current()) / 2.0;
    let position = a.position.midpoint(b.position);
    let species = a.species;
    let decay = a.decay_per_second;

    let offspring = spawn::spawn_forager(state, config, species, energy, decay, position);
    outcomes.push(Outcome::Spawned {
        agent: offspring,
        species,
    });
    outcomes.push(Outcome::Mated {
        parent_a: agent,
        parent_b: other,
        offspring,
    });

    for parent in [agent, other] {
        if let Some(p) = state.agent_mut(parent) {
            p.mate_cooldown = Timer::start(config.mating_cooldown);
            p.resource.drain(config.mate_energy_cost);
            p.start_wandering();
        }
    }
}

/// Resolve a contact between an agent and a world pickup.
///
/// Eligibility first: the pickup must be off cooldown and the agent must be
/// able to use it. A contact at already-max resource leaves the pickup
/// available - it is not improperly consumed.
pub fn resolve_pickup_contact(
    state: &mut SimState,
    config: &SimConfig,
    agent: AgentId,
    pickup: PickupId,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let (Some(a), Some(p)) = (state.agent(agent), state.pickup(pickup)) else {
        return outcomes;
    };
    if !p.is_available() {
        debug!(agent = %agent, pickup = pickup.0, "contact with cooling pickup ignored");
        return outcomes;
    }

    let kind = p.kind;
    let applies = match kind {
        PickupKind::Energy => !a.armed,
        PickupKind::Health => a.armed && !a.resource.is_full(),
        PickupKind::Ammo => a.armed && a.ammo < config.max_ammo,
    };
    if !applies {
        return outcomes;
    }

    if let Some(a) = state.agent_mut(agent) {
        match kind {
            PickupKind::Energy => a.resource.gain(config.pickup_energy),
            PickupKind::Health => a.resource.refill(),
            PickupKind::Ammo => a.ammo = config.max_ammo,
        }
        // Reaching the pickup completes a foraging goal.
        if a.target == Some(Target::Pickup(pickup)) && a.behavior == Behavior::Foraging {
            a.start_wandering();
        }
    }
    if let Some(p) = state.pickup_mut(pickup) {
        p.cooldown = Timer::start(config.pickup_cooldown);
    }
    outcomes.push(Outcome::PickedUp {
        agent,
        pickup,
        kind,
    });
    outcomes
}
