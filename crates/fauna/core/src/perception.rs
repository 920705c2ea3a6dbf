//! Perception classification.
//!
//! The external sensor system delivers batches of observed entity ids once
//! per sensing interval. [`classify`] converts one batch into a fresh
//! [`Classified`] candidate set for the arbitration step. Classification
//! holds no ownership: it carries only ids valid for this tick, and any id
//! with no live entity behind it is dropped here rather than surfacing later
//! as an error.

use crate::config::SimConfig;
use crate::state::{AgentId, AgentState, FlagId, PickupId, PickupKind, SimState};

/// One sensor batch, tagged by category.
///
/// Sensor dispatch is a tagged variant matched by the engine, never runtime
/// type inspection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Percept {
    /// Other agents in the vision cone (rivals and potential mates alike).
    Agents(Vec<AgentId>),
    /// World pickups in view.
    Pickups(Vec<PickupId>),
    /// Objective flags in view.
    Flags(Vec<FlagId>),
}

/// Candidate set produced from one perception event.
///
/// At most one representative per role. The rival representative is the
/// single highest-resource enemy in view - the strongest enemy is the most
/// urgent decision driver, and chasing weaker alternatives invites
/// oscillation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Classified {
    /// A rival at least as strong as the observer. Flee from it.
    pub threat: Option<AgentId>,
    /// A rival strictly weaker than the observer. Fair game.
    pub prey: Option<AgentId>,
    /// Strongest mutually compatible, off-cooldown ally.
    pub mate: Option<AgentId>,
    /// Nearest available pickup the observer could actually use.
    pub pickup: Option<PickupId>,
    /// An actionable objective: the enemy's uncarried flag, or the
    /// observer's own flag sitting away from home.
    pub flag: Option<FlagId>,
}

/// Classify one sensor batch for an observer.
///
/// Rival comparison uses the strict `>` rule: the observer only counts the
/// representative as prey when its own resource strictly exceeds the
/// representative's. Ties classify as a threat - the safer failure mode.
/// Equal-resource rivals are ordered by id so the representative is stable
/// across re-sensing.
pub fn classify(
    observer: &AgentState,
    percept: &Percept,
    state: &SimState,
    config: &SimConfig,
) -> Classified {
    let mut classified = Classified::default();

    match percept {
        Percept::Agents(ids) => classify_agents(observer, ids, state, &mut classified),
        Percept::Pickups(ids) => classify_pickups(observer, ids, state, config, &mut classified),
        Percept::Flags(ids) => classify_flags(observer, ids, state, &mut classified),
    }

    classified
}

fn classify_agents(
    observer: &AgentState,
    ids: &[AgentId],
    state: &SimState,
    out: &mut Classified,
) {
    let observed = ids
        .iter()
        .filter(|id| state.registry.contains(**id))
        .filter_map(|id| state.agent(*id));

    let mut strongest_rival: Option<&AgentState> = None;
    let mut strongest_mate: Option<&AgentState> = None;

    for other in observed {
        if observer.rival(other) {
            if beats(other, strongest_rival) {
                strongest_rival = Some(other);
            }
        } else if observer.compatible(other)
            && !observer.on_mate_cooldown()
            && !other.on_mate_cooldown()
            && beats(other, strongest_mate)
        {
            strongest_mate = Some(other);
        }
    }

    if let Some(rival) = strongest_rival {
        if observer.resource.current() > rival.resource.current() {
            out.prey = Some(rival.id);
        } else {
            out.threat = Some(rival.id);
        }
        // A rival in view suppresses mating interest for this batch.
        return;
    }

    out.mate = strongest_mate.map(|mate| mate.id);
}

/// Strictly stronger than the current best, with ids breaking exact ties.
fn beats(candidate: &AgentState, best: Option<&AgentState>) -> bool {
    match best {
        None => true,
        Some(best) => {
            let (c, b) = (candidate.resource.current(), best.resource.current());
            c > b || (c == b && candidate.id < best.id)
        }
    }
}

fn classify_pickups(
    observer: &AgentState,
    ids: &[PickupId],
    state: &SimState,
    config: &SimConfig,
    out: &mut Classified,
) {
    let mut nearest: Option<(f32, PickupId)> = None;
    for id in ids {
        let Some(pickup) = state.pickup(*id) else {
            continue;
        };
        if !pickup.is_available() || !useful(observer, pickup.kind, config) {
            continue;
        }
        let distance = observer.position.distance(pickup.position);
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, pickup.id));
        }
    }
    out.pickup = nearest.map(|(_, id)| id);
}

/// Whether a pickup kind can do anything for this observer right now.
fn useful(observer: &AgentState, kind: PickupKind, config: &SimConfig) -> bool {
    match kind {
        PickupKind::Energy => !observer.armed,
        PickupKind::Health => observer.armed && !observer.resource.is_full(),
        PickupKind::Ammo => observer.armed && observer.ammo < config.max_ammo,
    }
}

fn classify_flags(observer: &AgentState, ids: &[FlagId], state: &SimState, out: &mut Classified) {
    if observer.carrying.is_some() {
        return;
    }
    let mut own_away = None;
    for id in ids {
        let Some(flag) = state.flag(*id) else {
            continue;
        };
        if flag.carrier.is_some() {
            // Carried flags have their collision disabled; nothing to do.
            continue;
        }
        if flag.species != observer.species {
            // An uncarried enemy flag always wins over returning our own.
            out.flag = Some(flag.id);
            return;
        }
        if flag.is_away() {
            own_away = Some(flag.id);
        }
    }
    out.flag = own_away;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::state::{
        AgentState, Behavior, FlagState, PickupState, Position, ResourceMeter, Species, Timer,
    };

    fn agent(id: u32, species: u32, energy: f32) -> AgentState {
        AgentState {
            id: AgentId(id),
            species: Species(species),
            position: Position::ORIGIN,
            resource: ResourceMeter::new(energy, 500.0),
            decay_per_second: 5.0,
            armed: false,
            ammo: 0,
            behavior: Behavior::Wandering,
            target: None,
            mate_cooldown: Timer::READY,
            attack_cooldown: Timer::READY,
            carrying: None,
        }
    }

    fn world(agents: Vec<AgentState>) -> SimState {
        let mut state = SimState::new(0);
        for agent in agents {
            state.add_agent(agent);
        }
        state
    }

    #[test]
    fn strongest_rival_is_the_representative() {
        let observer = agent(0, 0, 100.0);
        let state = world(vec![
            observer.clone(),
            agent(1, 1, 60.0),
            agent(2, 1, 90.0),
            agent(3, 1, 30.0),
        ]);
        let percept = Percept::Agents(vec![AgentId(1), AgentId(2), AgentId(3)]);

        let classified = classify(&observer, &percept, &state, &SimConfig::default());
        // 90 < 100: the strongest rival is prey, weaker rivals are ignored.
        assert_eq!(classified.prey, Some(AgentId(2)));
        assert_eq!(classified.threat, None);
    }

    #[test]
    fn resource_tie_classifies_as_threat() {
        let observer = agent(0, 0, 100.0);
        let state = world(vec![observer.clone(), agent(1, 1, 100.0)]);
        let percept = Percept::Agents(vec![AgentId(1)]);

        let classified = classify(&observer, &percept, &state, &SimConfig::default());
        assert_eq!(classified.threat, Some(AgentId(1)));
        assert_eq!(classified.prey, None);
    }

    #[test]
    fn rival_in_view_suppresses_mates() {
        let observer = agent(0, 0, 200.0);
        let state = world(vec![
            observer.clone(),
            agent(1, 0, 150.0),
            agent(2, 1, 50.0),
        ]);
        let percept = Percept::Agents(vec![AgentId(1), AgentId(2)]);

        let classified = classify(&observer, &percept, &state, &SimConfig::default());
        assert_eq!(classified.prey, Some(AgentId(2)));
        assert_eq!(classified.mate, None);
    }

    #[test]
    fn cooldown_excludes_mate_candidates() {
        let observer = agent(0, 0, 200.0);
        let mut ally = agent(1, 0, 150.0);
        ally.mate_cooldown = Timer::start(5.0);
        let state = world(vec![observer.clone(), ally]);
        let percept = Percept::Agents(vec![AgentId(1)]);

        assert_eq!(classify(&observer, &percept, &state, &SimConfig::default()).mate, None);
    }

    #[test]
    fn stale_ids_are_dropped() {
        let observer = agent(0, 0, 100.0);
        let state = world(vec![observer.clone()]);
        let percept = Percept::Agents(vec![AgentId(99)]);

        assert_eq!(classify(&observer, &percept, &state, &SimConfig::default()), Classified::default());
    }

    #[test]
    fn nearest_available_pickup_wins() {
        let observer = agent(0, 0, 100.0);
        let mut state = world(vec![observer.clone()]);
        let far = state.allocate_pickup_id();
        state.pickups.push(PickupState {
            id: far,
            kind: PickupKind::Energy,
            position: Position::new(20.0, 0.0),
            cooldown: Timer::READY,
        });
        let near_but_cooling = state.allocate_pickup_id();
        state.pickups.push(PickupState {
            id: near_but_cooling,
            kind: PickupKind::Energy,
            position: Position::new(1.0, 0.0),
            cooldown: Timer::start(10.0),
        });

        let percept = Percept::Pickups(vec![far, near_but_cooling]);
        assert_eq!(classify(&observer, &percept, &state, &SimConfig::default()).pickup, Some(far));
    }

    #[test]
    fn carried_enemy_flag_is_not_actionable() {
        let observer = agent(0, 1, 100.0);
        let mut state = world(vec![observer.clone()]);
        let id = state.allocate_flag_id();
        let mut flag = FlagState::new(id, Species(2), Position::new(10.0, 0.0));
        flag.carrier = Some(AgentId(5));
        state.flags.push(flag);

        let percept = Percept::Flags(vec![id]);
        assert_eq!(classify(&observer, &percept, &state, &SimConfig::default()).flag, None);
    }
}
