//! World-fixed items: pickups, objective flags, and spawn points.

use super::common::{AgentId, FlagId, PickupId, Position, Species};
use super::timer::Timer;

/// What a pickup restores on contact.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PickupKind {
    /// Adds a fixed amount of energy.
    Energy,
    /// Restores health to maximum.
    Health,
    /// Restores ammo to maximum.
    Ammo,
}

/// A consumable world item that goes on cooldown when used.
///
/// Invariant: a pickup on cooldown is excluded from every perception query
/// and from interaction resolution until its timer reaches zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupState {
    pub id: PickupId,
    pub kind: PickupKind,
    pub position: Position,
    pub cooldown: Timer,
}

impl PickupState {
    /// Whether the pickup can currently be perceived and consumed.
    pub fn is_available(&self) -> bool {
        !self.cooldown.is_active()
    }
}

/// A team's objective flag.
///
/// The flag remembers its home position. It is "away" while displaced or
/// carried, and is captured only when its carrier stands within capture
/// distance of the carrier's own home base.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagState {
    pub id: FlagId,
    /// Species that owns (defends) this flag.
    pub species: Species,
    /// Where the flag spawns and returns to.
    pub home: Position,
    /// Current ground position. Tracks the carrier while carried.
    pub position: Position,
    /// Agent holding the flag, if any. While carried, the flag's own
    /// collision is disabled: contacts against it resolve to no-ops.
    pub carrier: Option<AgentId>,
}

impl FlagState {
    pub fn new(id: FlagId, species: Species, home: Position) -> Self {
        Self {
            id,
            species,
            home,
            position: home,
            carrier: None,
        }
    }

    /// True while the flag is displaced from its home or carried.
    pub fn is_away(&self) -> bool {
        self.carrier.is_some() || self.position != self.home
    }

    /// Put the flag back at its home base, free of any carrier.
    pub fn return_home(&mut self) {
        self.carrier = None;
        self.position = self.home;
    }

    /// Drop the flag at the given ground position, collectible again.
    pub fn drop_at(&mut self, position: Position) {
        self.carrier = None;
        self.position = position;
    }
}

/// A fixed spawn location for one species.
///
/// Occupancy is physical: a point counts as open when no live agent stands
/// within the configured clear radius of it. Respawns prefer open points in
/// index order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnPointState {
    pub species: Species,
    pub position: Position,
}
