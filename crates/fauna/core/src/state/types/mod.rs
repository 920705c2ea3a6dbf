mod agent;
mod common;
mod items;
mod meter;
mod timer;

pub use agent::{AgentState, Behavior};
pub use common::{AgentId, FlagId, PickupId, Position, Species, Target};
pub use items::{FlagState, PickupState, PickupKind, SpawnPointState};
pub use meter::ResourceMeter;
pub use timer::Timer;
