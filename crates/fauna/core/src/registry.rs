//! Live-agent registry, indexed by species.
//!
//! The registry is an explicitly owned part of [`crate::state::SimState`]
//! (never a process-wide static) so that multiple simulations can coexist in
//! one process. Membership invariant: a live agent belongs to exactly one
//! species set; an eliminated agent belongs to none. Registration and
//! unregistration happen atomically with the lifecycle event that causes
//! them, so no query in the same tick can observe a stale member.

use std::collections::{HashMap, HashSet};

use crate::state::{AgentId, Species};

/// Indexed set of currently-live agents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesRegistry {
    all: HashSet<AgentId>,
    by_species: HashMap<Species, HashSet<AgentId>>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly spawned agent under its species.
    ///
    /// If the agent was somehow already registered under another species it
    /// is moved, preserving the exactly-one-set invariant.
    pub fn register(&mut self, id: AgentId, species: Species) {
        if self.all.contains(&id) {
            self.remove_from_species(id);
        }
        self.all.insert(id);
        self.by_species.entry(species).or_default().insert(id);
    }

    /// Remove an agent from every set. Idempotent.
    pub fn unregister(&mut self, id: AgentId) {
        if self.all.remove(&id) {
            self.remove_from_species(id);
        }
    }

    fn remove_from_species(&mut self, id: AgentId) {
        self.by_species.retain(|_, members| {
            members.remove(&id);
            !members.is_empty()
        });
    }

    /// O(1) membership test.
    pub fn contains(&self, id: AgentId) -> bool {
        self.all.contains(&id)
    }

    /// All live agents.
    pub fn all(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.all.iter().copied()
    }

    /// Live agents of one species.
    pub fn all_of(&self, species: Species) -> impl Iterator<Item = AgentId> + '_ {
        self.by_species
            .get(&species)
            .into_iter()
            .flat_map(|members| members.iter().copied())
    }

    /// Number of live agents of one species.
    pub fn count_of(&self, species: Species) -> usize {
        self.by_species
            .get(&species)
            .map(HashSet::len)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
