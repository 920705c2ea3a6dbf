//! Hit resolution for armed agents.

use tracing::debug;

use super::Outcome;
use crate::config::SimConfig;
use crate::state::{AgentId, SimState, Target, Timer};

/// Resolve one landed hit.
///
/// The attacker must be armed, stocked, off attack cooldown, and shooting a
/// rival; failing any of these is a silent no-op. A successful hit spends one
/// round, starts the attack cooldown, and drains the target's health. A
/// depleted target is eliminated immediately, within the same call.
pub fn resolve_hit(
    state: &mut SimState,
    config: &SimConfig,
    attacker: AgentId,
    target: AgentId,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let (Some(a), Some(t)) = (state.agent(attacker), state.agent(target)) else {
        return outcomes;
    };
    if !a.can_attack() {
        debug!(agent = %attacker, "hit without attack readiness ignored");
        return outcomes;
    }
    if !a.rival(t) {
        debug!(agent = %attacker, other = %target, "hit on non-rival ignored");
        return outcomes;
    }

    let cooldown = config.attack_cooldown;
    if let Some(a) = state.agent_mut(attacker) {
        a.ammo -= 1;
        a.attack_cooldown = Timer::start(cooldown);
    }

    let remaining = match state.agent_mut(target) {
        Some(t) => {
            t.resource.drain(config.damage);
            t.resource.current()
        }
        None => return outcomes,
    };

    if remaining <= 0.0 {
        super::eliminate(state, config, target, Some(attacker), &mut outcomes);
        if let Some(a) = state.agent_mut(attacker) {
            if a.target == Some(Target::Agent(target)) {
                a.start_wandering();
            }
        }
    } else {
        outcomes.push(Outcome::Hit {
            attacker,
            target,
            remaining,
        });
    }
    outcomes
}
