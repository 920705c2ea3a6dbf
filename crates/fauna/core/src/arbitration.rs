//! Priority arbitration - the decision core.
//!
//! Given the observer's current state and one freshly classified perception,
//! [`arbitrate`] picks the next `(Behavior, Target)` pair. The step is a pure
//! function: it mutates nothing and returns `None` when no rule fires, which
//! the engine treats as "state unchanged".
//!
//! Priority order, highest first:
//!
//! 1. Existential threat: a rival at least as strong as us is in view.
//!    Fleeing overrides everything except itself.
//! 2. Objective delivery: we are carrying a flag, so run it home.
//! 3. Opportunity: a strictly weaker rival, with enough resource to make the
//!    chase worthwhile. Never interrupts mating, fleeing, or foraging.
//! 4. Objective pursuit: an actionable flag, only from idle wandering.
//! 5. Reproduction: a compatible mate, enough surplus, off cooldown. Never
//!    interrupts anything but wandering (or an ongoing courtship).
//! 6. Sustenance: a useful pickup while in need, only from wandering.
//!
//! A lower rule never preempts a state set by a higher one; only a same-or-
//! higher-priority perception or a completion event (goal satisfied, target
//! lost) moves an agent away from its current behavior. Completion and
//! target-loss handling live in the engine's tick, not here.

use tracing::trace;

use crate::config::SimConfig;
use crate::perception::Classified;
use crate::state::{AgentState, Behavior, SimState, Target};

/// A state transition chosen by the arbiter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub behavior: Behavior,
    pub target: Option<Target>,
}

impl Decision {
    fn new(behavior: Behavior, target: Target) -> Self {
        Self {
            behavior,
            target: Some(target),
        }
    }
}

/// Run one arbitration step. `None` means the current state stands.
pub fn arbitrate(
    observer: &AgentState,
    classified: &Classified,
    state: &SimState,
    config: &SimConfig,
) -> Option<Decision> {
    // (1) Flee a stronger rival, unconditionally. Idempotent when already
    // fleeing the same hunter.
    if let Some(threat) = classified.threat {
        let already = observer.behavior == Behavior::Fleeing
            && observer.target == Some(Target::Agent(threat));
        if already {
            return None;
        }
        trace!(agent = %observer.id, %threat, "fleeing stronger rival");
        return Some(Decision::new(Behavior::Fleeing, Target::Agent(threat)));
    }

    // (2) Deliver a carried flag home.
    if let Some(flag) = observer.carrying {
        if observer.behavior == Behavior::Carrying {
            return None;
        }
        let home = state.home_of(observer.species)?;
        trace!(agent = %observer.id, flag = flag.0, "carrying flag home");
        return Some(Decision::new(Behavior::Carrying, Target::Point(home)));
    }

    // (3) Chase a weaker rival: eat it (foragers) or engage it (armed).
    if let Some(prey) = classified.prey {
        let chase = if observer.armed {
            Behavior::Engaging
        } else {
            Behavior::Hunting
        };
        let interruptible = matches!(observer.behavior, Behavior::Wandering)
            || observer.behavior == chase;
        let worthwhile = if observer.armed {
            observer.ammo > 0
        } else {
            observer.resource.current() > config.hunt_threshold
        };
        if interruptible && worthwhile {
            if observer.behavior == chase && observer.target == Some(Target::Agent(prey)) {
                return None;
            }
            return Some(Decision::new(chase, Target::Agent(prey)));
        }
    }

    // (4) Go for an actionable flag.
    if let Some(flag) = classified.flag {
        if observer.behavior == Behavior::Wandering {
            return Some(Decision::new(Behavior::Foraging, Target::Flag(flag)));
        }
    }

    // (5) Court the strongest compatible mate.
    if let Some(mate) = classified.mate {
        let interruptible =
            matches!(observer.behavior, Behavior::Wandering | Behavior::Mating);
        let surplus = observer.resource.current() > config.mate_threshold;
        if interruptible && surplus && !observer.on_mate_cooldown() {
            if observer.behavior == Behavior::Mating && observer.target == Some(Target::Agent(mate))
            {
                return None;
            }
            return Some(Decision::new(Behavior::Mating, Target::Agent(mate)));
        }
    }

    // (6) Forage when in need and idle.
    if let Some(pickup) = classified.pickup {
        let needy = observer.armed || observer.resource.current() <= config.forage_threshold;
        if observer.behavior == Behavior::Wandering && needy {
            return Some(Decision::new(Behavior::Foraging, Target::Pickup(pickup)));
        }
    }

    None
}
