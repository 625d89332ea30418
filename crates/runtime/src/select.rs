//! Opponent selection.

use rand::Rng;

use battle_roster::{CreatureTemplate, Roster};

use crate::api::{Result, RuntimeError};

/// Picks a uniformly random opponent from the roster, never the player's own
/// creature.
pub fn choose_opponent<'a, R: Rng>(
    roster: &'a Roster,
    player_name: &str,
    rng: &mut R,
) -> Result<&'a CreatureTemplate> {
    let candidates = roster.excluding(player_name);
    if candidates.is_empty() {
        return Err(RuntimeError::NoEligibleOpponent);
    }
    Ok(candidates[rng.gen_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_picks_the_players_creature() {
        let roster = Roster::starter();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let pick = choose_opponent(&roster, "Emberfox", &mut rng).unwrap();
            assert_ne!(pick.name, "Emberfox");
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let roster = Roster::new(vec![Roster::starter().get("Emberfox").unwrap().clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            choose_opponent(&roster, "Emberfox", &mut rng),
            Err(RuntimeError::NoEligibleOpponent)
        ));
    }
}
