/// Battle tuning constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Exclusive upper bound of the per-turn damage roll: each turn draws a
    /// uniform integer in `[0, damage_roll_bound)`.
    pub damage_roll_bound: u32,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Health percentage below which a combatant is considered in bad shape.
    pub const HEALTH_CRITICAL_BELOW_PERCENT: u32 = 10;
    /// Health percentage below which a combatant is considered wounded.
    pub const HEALTH_GOOD_BELOW_PERCENT: u32 = 50;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DAMAGE_ROLL_BOUND: u32 = 100;

    pub fn new() -> Self {
        Self {
            damage_roll_bound: Self::DEFAULT_DAMAGE_ROLL_BOUND,
        }
    }

    pub fn with_damage_roll_bound(damage_roll_bound: u32) -> Self {
        Self { damage_roll_bound }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
