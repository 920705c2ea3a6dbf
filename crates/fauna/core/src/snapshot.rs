//! World snapshots.
//!
//! A snapshot is the complete, self-contained description of one simulation:
//! its configuration plus its world state, including id allocators, pending
//! timers, and the placement rng. Restoring a snapshot and replaying the same
//! event stream reproduces the same outcomes. Available behind the `serde`
//! feature.

use crate::config::SimConfig;
use crate::state::SimState;

/// Everything needed to resume a simulation where it left off.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimSnapshot {
    pub config: SimConfig,
    pub state: SimState,
}

/// Snapshot codec failure.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot")]
    Decode(#[source] bincode::Error),
}

impl SimSnapshot {
    /// Serialize to a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Deserialize a blob produced by [`SimSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
