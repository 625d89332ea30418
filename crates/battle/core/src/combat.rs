//! Damage resolution helpers.
//!
//! Pure functions, deterministic and side-effect free. The engine draws one
//! random roll per turn and feeds it through these; tests can call them with
//! hand-picked rolls.

use crate::config::BattleConfig;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = round((attack / defense) × roll)
/// ```
///
/// where `roll` is a uniform integer in `[0, damage_roll_bound)`. The result
/// is always ≥ 0 and is 0 when `roll` is 0. Computed in integer arithmetic,
/// rounding half up.
pub fn calculate_damage(attack: u32, defense: u32, roll: u32) -> u32 {
    debug_assert!(defense > 0, "defense is validated positive at battle start");

    // round(a·r / d) = floor((2·a·r + d) / 2·d), all in u64 to avoid overflow
    let numerator = 2 * u64::from(attack) * u64::from(roll) + u64::from(defense);
    u32::try_from(numerator / (2 * u64::from(defense))).unwrap_or(u32::MAX)
}

/// Apply damage to remaining health, clamped to 0.
pub fn apply_damage(remaining_health: u32, damage: u32) -> u32 {
    remaining_health.saturating_sub(damage)
}

/// Coarse health tiers derived from remaining health.
///
/// Presentation layers use these to pick health-bar styling; the engine
/// reports them so consumers never re-derive thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthLevel {
    /// 50–100% health.
    Excellent,
    /// 10–49% health.
    Good,
    /// 1–9% health.
    Critical,
    /// 0 health.
    Defeated,
}

impl HealthLevel {
    /// Classify remaining health against max health.
    pub fn from_health(remaining: u32, max: u32) -> Self {
        if remaining == 0 {
            return Self::Defeated;
        }
        let percent = remaining.saturating_mul(100) / max.max(1);
        if percent < BattleConfig::HEALTH_CRITICAL_BELOW_PERCENT {
            Self::Critical
        } else if percent < BattleConfig::HEALTH_GOOD_BELOW_PERCENT {
            Self::Good
        } else {
            Self::Excellent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_matches_reference_scenario() {
        // attack 100 vs defense 50 with roll 40 → round(2.0 × 40) = 80
        assert_eq!(calculate_damage(100, 50, 40), 80);
    }

    #[test]
    fn zero_roll_deals_zero_damage() {
        assert_eq!(calculate_damage(100, 50, 0), 0);
    }

    #[test]
    fn damage_rounds_half_up() {
        // 3/2 × 1 = 1.5 → 2
        assert_eq!(calculate_damage(3, 2, 1), 2);
        // 1/4 × 1 = 0.25 → 0
        assert_eq!(calculate_damage(1, 4, 1), 0);
        // 1/4 × 3 = 0.75 → 1
        assert_eq!(calculate_damage(1, 4, 3), 1);
    }

    #[test]
    fn damage_saturates_on_extreme_stats() {
        assert_eq!(calculate_damage(u32::MAX, 1, 99), u32::MAX);
    }

    #[test]
    fn apply_damage_clamps_to_zero() {
        assert_eq!(apply_damage(30, 50), 0);
        assert_eq!(apply_damage(30, 30), 0);
        assert_eq!(apply_damage(30, 29), 1);
    }

    #[test]
    fn health_levels_match_tiers() {
        assert_eq!(HealthLevel::from_health(100, 100), HealthLevel::Excellent);
        assert_eq!(HealthLevel::from_health(50, 100), HealthLevel::Excellent);
        assert_eq!(HealthLevel::from_health(49, 100), HealthLevel::Good);
        assert_eq!(HealthLevel::from_health(10, 100), HealthLevel::Good);
        assert_eq!(HealthLevel::from_health(9, 100), HealthLevel::Critical);
        assert_eq!(HealthLevel::from_health(1, 100), HealthLevel::Critical);
        assert_eq!(HealthLevel::from_health(0, 100), HealthLevel::Defeated);
    }
}
