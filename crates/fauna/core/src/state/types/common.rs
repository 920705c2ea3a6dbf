//! Shared identifier and geometry types.

use core::fmt;

/// Unique identifier for an agent.
///
/// Allocated monotonically by [`crate::state::SimState`] and never reused,
/// so a stale id held across an elimination can be detected instead of
/// silently aliasing a new agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// Species (or team) tag. Agents of the same species mate; different species
/// prey on each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species(pub u32);

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "species#{}", self.0)
    }
}

/// Unique identifier for a world pickup (energy node, health kit, ammo crate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupId(pub u32);

/// Unique identifier for an objective flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagId(pub u32);

/// A point on the 2D ground plane.
///
/// The external movement system works in 3D; [`Position::lift`] provides the
/// derived projection (y-up, ground at zero).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point halfway between this and another point. Offspring spawn here.
    pub fn midpoint(&self, other: Position) -> Position {
        Position {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Projection into the movement system's 3D space (y-up).
    pub fn lift(&self) -> [f32; 3] {
        [self.x, 0.0, self.y]
    }
}

/// Weak reference to whatever an agent is currently pursuing or avoiding.
///
/// Targets are id-based and never own the referenced entity; a target whose
/// entity has despawned is treated as lost, not as an error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Agent(AgentId),
    Pickup(PickupId),
    Flag(FlagId),
    Point(Position),
}
