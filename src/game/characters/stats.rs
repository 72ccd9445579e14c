// Combat stats presets

/// Health and melee numbers for one kind of entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatStats {
    /// Maximum health points
    pub max_health: f64,
    /// Health at spawn
    pub starting_health: f64,
    /// Melee reach in unscaled units, multiplied by the x scale magnitude
    pub melee_range: f64,
    /// Damage dealt per hit before crits
    pub attack_damage: f64,
    /// Chance of a critical hit, 0-100
    pub crit_percent: f64,
}

/// The player spawns nearly dead and has to collect coins to heal
pub const PLAYER_STATS: CombatStats = CombatStats {
    max_health: 100.0,
    starting_health: 1.0,
    melee_range: 13.0,
    attack_damage: 10.0,
    crit_percent: 100.0,
};

/// Bats only take hits; they never attack
pub const BAT_STATS: CombatStats = CombatStats {
    max_health: 100.0,
    starting_health: 100.0,
    melee_range: 0.0,
    attack_damage: 0.0,
    crit_percent: 0.0,
};

/// Tiles, background and pickups
pub const INERT_STATS: CombatStats = CombatStats {
    max_health: 0.0,
    starting_health: 0.0,
    melee_range: 0.0,
    attack_damage: 0.0,
    crit_percent: 0.0,
};

impl Default for CombatStats {
    fn default() -> Self {
        INERT_STATS
    }
}
