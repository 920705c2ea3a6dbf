//! Simulation configuration constants and tunable parameters.
//!
//! Every numeric threshold of the decision core lives here, data-driven
//! rather than baked into the state machine. Hosts may override any of the
//! defaults and must call [`SimConfig::validate`] (done by
//! [`crate::sim::Simulation::new`]) before running. Misconfiguration is the
//! only error class that aborts setup - per-tick failures never do.

/// Tunable parameters for one simulation instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Upper clamp for the energy meter.
    pub max_energy: f32,
    /// Passive energy loss per second for forager agents.
    pub decay_per_second: f32,
    /// Minimum energy before a weaker rival is worth hunting.
    pub hunt_threshold: f32,
    /// Minimum energy surplus before seeking a mate.
    pub mate_threshold: f32,
    /// Energy level at or below which energy nodes become interesting.
    pub forage_threshold: f32,
    /// Seconds both parents wait before mating again.
    pub mating_cooldown: f32,
    /// Energy each parent pays on a successful mate.
    pub mate_energy_cost: f32,
    /// Distance at which a fleeing agent considers its hunter lost.
    pub disengage_radius: f32,
    /// Energy restored by an energy node.
    pub pickup_energy: f32,
    /// Seconds a consumed pickup stays unavailable.
    pub pickup_cooldown: f32,

    /// Upper clamp for the health meter of armed agents.
    pub max_health: f32,
    /// Health removed per successful hit.
    pub damage: f32,
    /// Shots an armed agent can hold.
    pub max_ammo: u32,
    /// Seconds between attacks.
    pub attack_cooldown: f32,
    /// How close a flag carrier must stand to its own base to capture.
    pub capture_distance: f32,
    /// Seconds before an eliminated armed agent respawns. Zero disables
    /// respawning.
    pub respawn_delay: f32,
    /// Radius a spawn point must be clear of live agents to count as open.
    pub spawn_clear_radius: f32,

    /// Seconds between energy node reseeds. Zero disables reseeding.
    pub energy_spawn_interval: f32,
    /// Cap on simultaneously existing pickups.
    pub max_pickups: usize,
    /// Half-extent of the square area used for random spawn placement.
    pub spawn_extent: f32,
}

impl SimConfig {
    // ===== default tuning =====
    pub const DEFAULT_MAX_ENERGY: f32 = 500.0;
    pub const DEFAULT_DECAY: f32 = 5.0;
    pub const DEFAULT_HUNT_THRESHOLD: f32 = 125.0;
    pub const DEFAULT_MATE_THRESHOLD: f32 = 125.0;
    pub const DEFAULT_FORAGE_THRESHOLD: f32 = 350.0;
    pub const DEFAULT_MATING_COOLDOWN: f32 = 5.0;
    pub const DEFAULT_MATE_ENERGY_COST: f32 = 15.0;
    pub const DEFAULT_DISENGAGE_RADIUS: f32 = 12.0;
    pub const DEFAULT_PICKUP_ENERGY: f32 = 100.0;
    pub const DEFAULT_PICKUP_COOLDOWN: f32 = 10.0;
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
    pub const DEFAULT_DAMAGE: f32 = 10.0;
    pub const DEFAULT_MAX_AMMO: u32 = 30;
    pub const DEFAULT_ATTACK_COOLDOWN: f32 = 0.5;
    pub const DEFAULT_CAPTURE_DISTANCE: f32 = 1.0;
    pub const DEFAULT_RESPAWN_DELAY: f32 = 5.0;
    pub const DEFAULT_SPAWN_CLEAR_RADIUS: f32 = 1.0;
    pub const DEFAULT_ENERGY_SPAWN_INTERVAL: f32 = 1.0;
    pub const DEFAULT_MAX_PICKUPS: usize = 64;
    pub const DEFAULT_SPAWN_EXTENT: f32 = 45.0;

    pub fn new() -> Self {
        Self {
            max_energy: Self::DEFAULT_MAX_ENERGY,
            decay_per_second: Self::DEFAULT_DECAY,
            hunt_threshold: Self::DEFAULT_HUNT_THRESHOLD,
            mate_threshold: Self::DEFAULT_MATE_THRESHOLD,
            forage_threshold: Self::DEFAULT_FORAGE_THRESHOLD,
            mating_cooldown: Self::DEFAULT_MATING_COOLDOWN,
            mate_energy_cost: Self::DEFAULT_MATE_ENERGY_COST,
            disengage_radius: Self::DEFAULT_DISENGAGE_RADIUS,
            pickup_energy: Self::DEFAULT_PICKUP_ENERGY,
            pickup_cooldown: Self::DEFAULT_PICKUP_COOLDOWN,
            max_health: Self::DEFAULT_MAX_HEALTH,
            damage: Self::DEFAULT_DAMAGE,
            max_ammo: Self::DEFAULT_MAX_AMMO,
            attack_cooldown: Self::DEFAULT_ATTACK_COOLDOWN,
            capture_distance: Self::DEFAULT_CAPTURE_DISTANCE,
            respawn_delay: Self::DEFAULT_RESPAWN_DELAY,
            spawn_clear_radius: Self::DEFAULT_SPAWN_CLEAR_RADIUS,
            energy_spawn_interval: Self::DEFAULT_ENERGY_SPAWN_INTERVAL,
            max_pickups: Self::DEFAULT_MAX_PICKUPS,
            spawn_extent: Self::DEFAULT_SPAWN_EXTENT,
        }
    }

    /// Fail-fast validation, run once at simulation setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("max_energy", self.max_energy),
            ("decay_per_second", self.decay_per_second),
            ("hunt_threshold", self.hunt_threshold),
            ("mate_threshold", self.mate_threshold),
            ("forage_threshold", self.forage_threshold),
            ("mating_cooldown", self.mating_cooldown),
            ("mate_energy_cost", self.mate_energy_cost),
            ("disengage_radius", self.disengage_radius),
            ("pickup_energy", self.pickup_energy),
            ("pickup_cooldown", self.pickup_cooldown),
            ("max_health", self.max_health),
            ("damage", self.damage),
            ("attack_cooldown", self.attack_cooldown),
            ("capture_distance", self.capture_distance),
            ("respawn_delay", self.respawn_delay),
            ("spawn_clear_radius", self.spawn_clear_radius),
            ("energy_spawn_interval", self.energy_spawn_interval),
            ("spawn_extent", self.spawn_extent),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.max_energy == 0.0 {
            return Err(ConfigError::ZeroMaximum { field: "max_energy" });
        }
        if self.max_health == 0.0 {
            return Err(ConfigError::ZeroMaximum { field: "max_health" });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Setup-time misconfiguration. The only error class that aborts
/// initialization; everything at runtime recovers locally.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration field `{field}` must be finite")]
    NotFinite { field: &'static str },

    #[error("configuration field `{field}` must be non-negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("configuration field `{field}` must be positive")]
    ZeroMaximum { field: &'static str },
}
