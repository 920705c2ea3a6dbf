//! Agent state and behavioral modes.

use super::common::{AgentId, FlagId, Position, Species, Target};
use super::meter::ResourceMeter;
use super::timer::Timer;

/// Behavioral state an agent can occupy.
///
/// `Wandering` is the initial and fallback state; every goal that completes
/// or is lost returns here. Elimination is not a behavior - it is an
/// out-of-band lifecycle event that removes the agent from all registries.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Behavior {
    /// Idle exploration, looking for food, mates, or prey.
    #[default]
    Wandering,
    /// Moving toward a perceived world item (energy, health, ammo, or a flag).
    Foraging,
    /// Pursuing a weaker rival to eat it.
    Hunting,
    /// Evading a stronger rival.
    Fleeing,
    /// Approaching a compatible ally to mate.
    Mating,
    /// Pursuing a rival to attack it (armed agents).
    Engaging,
    /// Carrying an objective flag back to the home base.
    Carrying,
}

/// Complete per-agent state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id: AgentId,
    pub species: Species,
    pub position: Position,

    /// Energy for foragers, health for armed agents.
    pub resource: ResourceMeter,

    /// Passive resource loss per second. Zero for health-style meters.
    pub decay_per_second: f32,

    /// Whether this agent fights with hits instead of eating prey on
    /// contact.
    pub armed: bool,

    /// Remaining shots. Only meaningful for armed agents.
    pub ammo: u32,

    pub behavior: Behavior,
    pub target: Option<Target>,

    /// Cooldown before this agent may mate again.
    pub mate_cooldown: Timer,

    /// Cooldown between attacks.
    pub attack_cooldown: Timer,

    /// Flag this agent is currently carrying, if any.
    pub carrying: Option<FlagId>,
}

impl AgentState {
    /// True while the mating cooldown has not elapsed.
    pub fn on_mate_cooldown(&self) -> bool {
        self.mate_cooldown.is_active()
    }

    /// Mutual mate compatibility: distinct agents of the same species.
    ///
    /// Cooldowns are checked separately from compatibility.
    pub fn compatible(&self, other: &AgentState) -> bool {
        self.id != other.id && self.species == other.species
    }

    /// Whether `other` is fair game to hunt or eat: a distinct agent of a
    /// different species. Resource comparison is checked separately.
    pub fn rival(&self, other: &AgentState) -> bool {
        self.id != other.id && self.species != other.species
    }

    /// Armed, stocked, and off attack cooldown.
    pub fn can_attack(&self) -> bool {
        self.armed && self.ammo > 0 && !self.attack_cooldown.is_active()
    }

    /// Drop back to the idle state, clearing any stored target.
    pub fn start_wandering(&mut self) {
        self.behavior = Behavior::Wandering;
        self.target = None;
    }
}
