//! Static creature definitions.

use battle_core::{Combatant, CombatantStats, Side};

/// A creature as it appears in the catalog: flavor plus base stats.
///
/// Templates are immutable content; a battle works on [`Combatant`] records
/// stamped out from them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureTemplate {
    pub name: String,
    pub ability: String,
    /// Known moves, display-only. The catalog keeps at most
    /// [`Self::MAX_MOVES`].
    pub moves: Vec<String>,
    pub stats: CombatantStats,
}

impl CreatureTemplate {
    /// Maximum number of moves carried per creature.
    pub const MAX_MOVES: usize = 4;

    pub fn new(
        name: impl Into<String>,
        ability: impl Into<String>,
        mut moves: Vec<String>,
        stats: CombatantStats,
    ) -> Self {
        moves.truncate(Self::MAX_MOVES);
        Self {
            name: name.into(),
            ability: ability.into(),
            moves,
            stats,
        }
    }

    /// Stamps out a battle-ready combatant on the given side, at full health.
    pub fn combatant(&self, side: Side) -> Combatant {
        Combatant::new(self.name.clone(), side, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combatant_inherits_template_stats() {
        let template = CreatureTemplate::new(
            "Emberfox",
            "Blaze",
            vec!["Scratch".into(), "Ember".into()],
            CombatantStats {
                attack: 52,
                defense: 43,
                speed: 65,
                max_health: 39,
            },
        );

        let combatant = template.combatant(Side::Opponent);
        assert_eq!(combatant.name, "Emberfox");
        assert_eq!(combatant.side, Side::Opponent);
        assert_eq!(combatant.stats, template.stats);
        assert_eq!(combatant.remaining_health, 39);
    }

    #[test]
    fn moves_are_capped() {
        let moves = (0..6).map(|i| format!("Move {i}")).collect();
        let template = CreatureTemplate::new(
            "Emberfox",
            "Blaze",
            moves,
            CombatantStats {
                attack: 1,
                defense: 1,
                speed: 1,
                max_health: 1,
            },
        );
        assert_eq!(template.moves.len(), CreatureTemplate::MAX_MOVES);
    }
}
