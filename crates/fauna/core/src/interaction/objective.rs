//! Flag objective resolution: pickup, return, capture, drop.

use tracing::debug;

use super::Outcome;
use crate::config::SimConfig;
use crate::state::{AgentId, Behavior, FlagId, SimState, Target};

/// Resolve a contact between an agent and a flag.
///
/// Touching the own-species flag away from home teleports it back. Touching
/// an uncarried enemy flag attaches it to the agent, which immediately starts
/// carrying it home. Contacts with carried flags, with the own flag at home,
/// or while already carrying one are silent no-ops.
pub fn resolve_flag_contact(state: &mut SimState, agent: AgentId, flag: FlagId) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let (Some(a), Some(f)) = (state.agent(agent), state.flag(flag)) else {
        return outcomes;
    };
    if f.carrier.is_some() || a.carrying.is_some() {
        return outcomes;
    }

    if f.species == a.species {
        if !f.is_away() {
            return outcomes;
        }
        if let Some(f) = state.flag_mut(flag) {
            f.return_home();
        }
        if let Some(a) = state.agent_mut(agent) {
            if a.target == Some(Target::Flag(flag)) {
                a.start_wandering();
            }
        }
        debug!(agent = %agent, flag = flag.0, "returned own flag");
        outcomes.push(Outcome::FlagReturned { agent, flag });
        return outcomes;
    }

    let home = state.home_of(a.species);
    if let Some(f) = state.flag_mut(flag) {
        f.carrier = Some(agent);
    }
    if let Some(a) = state.agent_mut(agent) {
        a.carrying = Some(flag);
        a.behavior = Behavior::Carrying;
        a.target = home.map(Target::Point);
    }
    debug!(agent = %agent, flag = flag.0, "picked up enemy flag");
    outcomes.push(Outcome::FlagPickedUp { agent, flag });
    outcomes
}

/// Advance carried flags one tick: move each with its carrier and score a
/// capture once the carrier stands within capture distance of its own base.
///
/// A flag whose carrier id no longer resolves (the carrier despawned without
/// going through elimination) is dropped in place rather than lost.
pub fn check_captures(state: &mut SimState, config: &SimConfig) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let carried: Vec<(FlagId, AgentId)> = state
        .flags
        .iter()
        .filter_map(|flag| flag.carrier.map(|carrier| (flag.id, carrier)))
        .collect();

    for (flag_id, carrier_id) in carried {
        let Some(carrier) = state.agent(carrier_id) else {
            if let Some(flag) = state.flag_mut(flag_id) {
                let position = flag.position;
                flag.drop_at(position);
            }
            continue;
        };
        let position = carrier.position;
        let species = carrier.species;
        if let Some(flag) = state.flag_mut(flag_id) {
            flag.position = position;
        }

        let Some(home) = state.home_of(species) else {
            continue;
        };
        if position.distance(home) <= config.capture_distance {
            if let Some(flag) = state.flag_mut(flag_id) {
                flag.return_home();
            }
            if let Some(carrier) = state.agent_mut(carrier_id) {
                carrier.carrying = None;
                carrier.start_wandering();
            }
            debug!(agent = %carrier_id, flag = flag_id.0, "flag captured");
            outcomes.push(Outcome::FlagCaptured {
                agent: carrier_id,
                flag: flag_id,
            });
        }
    }
    outcomes
}
