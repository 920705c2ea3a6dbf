//! The event reducer.
//!
//! [`SimEngine`] owns the authoritative [`SimState`] and advances it one
//! host event at a time. Events arrive from the embedding host's clock,
//! sensor, collision, and movement systems; each application returns the
//! [`Outcome`]s it produced and nothing else escapes. Runtime events never
//! fail: an event naming a despawned entity resolves as a lost goal or a
//! no-op, and only setup-time misconfiguration is an error (checked before
//! the engine exists).

use tracing::trace;

use crate::arbitration;
use crate::config::SimConfig;
use crate::interaction::{self, Outcome};
use crate::perception::{self, Percept};
use crate::spawn;
use crate::state::{
    AgentId, Behavior, FlagId, PickupId, PickupKind, PickupState, SimState, Target, Timer,
};

/// What an agent came into contact with, as reported by the host's
/// collision system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContactTarget {
    Agent(AgentId),
    Pickup(PickupId),
    Flag(FlagId),
}

/// One host-driven input to the simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Advance simulated time by `dt` seconds.
    Tick { dt: f32 },
    /// One sensor batch for one observer.
    Perceived { agent: AgentId, percept: Percept },
    /// A collision between an agent and something else, reported from the
    /// agent's perspective.
    Contact {
        agent: AgentId,
        other: ContactTarget,
    },
    /// An attack landed on a target.
    Hit { attacker: AgentId, target: AgentId },
    /// The movement system delivered the agent to its destination.
    MovementReached { agent: AgentId },
    /// The movement system gave up on the agent's current path.
    MovementCancelled { agent: AgentId },
}

/// Deterministic single-threaded reducer over [`SimState`].
#[derive(Clone, Debug)]
pub struct SimEngine {
    pub(crate) config: SimConfig,
    pub(crate) state: SimState,
}

impl SimEngine {
    /// Build an engine over a validated configuration.
    pub(crate) fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            config,
            state: SimState::new(seed),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Apply one event, returning every outcome it produced in order.
    pub fn apply(&mut self, event: Event) -> Vec<Outcome> {
        match event {
            Event::Tick { dt } => self.tick(dt),
            Event::Perceived { agent, percept } => {
                self.perceived(agent, &percept);
                Vec::new()
            }
            Event::Contact { agent, other } => match other {
                ContactTarget::Agent(other) => {
                    interaction::resolve_agent_contact(&mut self.state, &self.config, agent, other)
                }
                ContactTarget::Pickup(pickup) => interaction::resolve_pickup_contact(
                    &mut self.state,
                    &self.config,
                    agent,
                    pickup,
                ),
                ContactTarget::Flag(flag) => {
                    interaction::resolve_flag_contact(&mut self.state, agent, flag)
                }
            },
            Event::Hit { attacker, target } => {
                interaction::resolve_hit(&mut self.state, &self.config, attacker, target)
            }
            Event::MovementReached { agent } => {
                self.movement_reached(agent);
                Vec::new()
            }
            Event::MovementCancelled { agent } => {
                // The path is unreachable; the goal is abandoned, not retried.
                if let Some(a) = self.state.agent_mut(agent) {
                    trace!(agent = %agent, "movement cancelled, dropping goal");
                    a.start_wandering();
                }
                Vec::new()
            }
        }
    }

    /// Run one perception-arbitration step for one observer.
    fn perceived(&mut self, agent: AgentId, percept: &Percept) {
        let Some(observer) = self.state.agent(agent) else {
            return;
        };
        let classified = perception::classify(observer, percept, &self.state, &self.config);
        let Some(decision) = arbitration::arbitrate(observer, &classified, &self.state, &self.config)
        else {
            return;
        };
        if let Some(a) = self.state.agent_mut(agent) {
            trace!(agent = %agent, behavior = %decision.behavior, "transition");
            a.behavior = decision.behavior;
            a.target = decision.target;
        }
    }

    /// Arrival handling: delivery to the destination completes the current
    /// goal and the agent resumes wandering until the next perception batch
    /// re-arbitrates. A fleeing agent only stops once its hunter is beyond
    /// the disengage radius; a carrier that went back to wandering is
    /// re-asserted as carrying on its next perception.
    fn movement_reached(&mut self, agent: AgentId) {
        let Some(a) = self.state.agent(agent) else {
            return;
        };
        match a.behavior {
            Behavior::Wandering => return,
            Behavior::Fleeing => {
                let escaped = match a.target {
                    Some(Target::Agent(hunter)) => self.state.agent(hunter).is_none_or(|h| {
                        a.position.distance(h.position) > self.config.disengage_radius
                    }),
                    _ => true,
                };
                if !escaped {
                    return;
                }
            }
            _ => {}
        }
        if let Some(a) = self.state.agent_mut(agent) {
            trace!(agent = %agent, "destination reached, goal complete");
            a.start_wandering();
        }
    }

    /// The per-tick pipeline: time, cooldowns, decay and starvation, goal
    /// validity, flag carriage, respawns, and energy reseeding.
    fn tick(&mut self, dt: f32) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        if dt <= 0.0 {
            return outcomes;
        }
        self.state.clock += f64::from(dt);

        for pickup in &mut self.state.pickups {
            pickup.cooldown.tick(dt);
        }

        let mut starved = Vec::new();
        for agent in &mut self.state.agents {
            agent.mate_cooldown.tick(dt);
            agent.attack_cooldown.tick(dt);
            if !agent.armed && agent.decay_per_second > 0.0 {
                agent.resource.drain(agent.decay_per_second * dt);
                if agent.resource.is_depleted() {
                    starved.push(agent.id);
                }
            }
        }
        for id in starved {
            interaction::eliminate(&mut self.state, &self.config, id, None, &mut outcomes);
        }

        self.sweep_lost_goals();
        outcomes.extend(interaction::check_captures(&mut self.state, &self.config));
        self.advance_respawns(dt, &mut outcomes);
        self.reseed_energy(dt);
        outcomes
    }

    /// Drop any agent whose target no longer resolves to an actionable
    /// entity back to wandering.
    fn sweep_lost_goals(&mut self) {
        let mut lost = Vec::new();
        for agent in &self.state.agents {
            let Some(target) = agent.target else {
                continue;
            };
            let gone = match target {
                Target::Agent(id) => {
                    if !self.state.registry.contains(id) {
                        true
                    } else if agent.behavior == Behavior::Fleeing {
                        self.state.agent(id).is_none_or(|hunter| {
                            agent.position.distance(hunter.position)
                                > self.config.disengage_radius
                        })
                    } else {
                        false
                    }
                }
                Target::Pickup(id) => self.state.pickup(id).is_none_or(|p| !p.is_available()),
                Target::Flag(id) => self.state.flag(id).is_none_or(|f| {
                    f.carrier.is_some() || (f.species == agent.species && !f.is_away())
                }),
                Target::Point(_) => false,
            };
            if gone {
                lost.push(agent.id);
            }
        }
        for id in lost {
            if let Some(agent) = self.state.agent_mut(id) {
                trace!(agent = %id, "goal lost");
                agent.start_wandering();
            }
        }
    }

    /// Tick respawn tickets and bring elapsed ones back into the world at
    /// the next open spawn point.
    fn advance_respawns(&mut self, dt: f32, outcomes: &mut Vec<Outcome>) {
        let mut due = Vec::new();
        self.state.respawns.retain_mut(|ticket| {
            ticket.countdown.tick(dt);
            if ticket.countdown.is_active() {
                true
            } else {
                due.push(ticket.species);
                false
            }
        });

        for species in due {
            let Some(index) = self
                .state
                .next_spawn_point(species, self.config.spawn_clear_radius)
            else {
                continue;
            };
            let position = self.state.spawn_points[index].position;
            let id = spawn::spawn_armed(&mut self.state, &self.config, species, position);
            outcomes.push(Outcome::Spawned { agent: id, species });
        }
    }

    /// Periodically drop a fresh energy node at a seeded random position,
    /// capped at the configured pickup count.
    fn reseed_energy(&mut self, dt: f32) {
        if self.config.energy_spawn_interval <= 0.0 {
            return;
        }
        let due = if self.state.energy_reseed.is_active() {
            self.state.energy_reseed.tick(dt)
        } else {
            true
        };
        if !due {
            return;
        }
        if self.state.pickups.len() < self.config.max_pickups {
            let position = self.state.rng.position(self.config.spawn_extent);
            let id = self.state.allocate_pickup_id();
            self.state.pickups.push(PickupState {
                id,
                kind: PickupKind::Energy,
                position,
                cooldown: Timer::READY,
            });
        }
        self.state.energy_reseed = Timer::start(self.config.energy_spawn_interval);
    }
}
