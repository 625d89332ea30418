//! The creature catalog.

use battle_core::CombatantStats;

use crate::template::CreatureTemplate;

/// Errors raised while assembling a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster contains '{name}' more than once")]
    DuplicateCreature { name: String },
}

/// Ordered collection of creature templates with unique names.
///
/// Deliberately not deserializable as-is: data files carry a plain entry
/// list, and [`Roster::new`] re-validates it on load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    entries: Vec<CreatureTemplate>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate creature names.
    pub fn new(entries: Vec<CreatureTemplate>) -> Result<Self, RosterError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(RosterError::DuplicateCreature {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Looks up a creature by exact name.
    pub fn get(&self, name: &str) -> Option<&CreatureTemplate> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Case-insensitive substring search over creature names.
    pub fn search(&self, query: &str) -> Vec<&CreatureTemplate> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&query))
            .collect()
    }

    /// All creatures except the named one: the candidate pool when picking
    /// an opponent for that creature.
    pub fn excluding(&self, name: &str) -> Vec<&CreatureTemplate> {
        self.entries.iter().filter(|e| e.name != name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureTemplate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Built-in starter roster for tests and headless use.
    pub fn starter() -> Self {
        let stats = |attack, defense, speed, max_health| CombatantStats {
            attack,
            defense,
            speed,
            max_health,
        };
        let moves = |names: &[&str]| names.iter().map(|m| m.to_string()).collect();

        let entries = vec![
            CreatureTemplate::new(
                "Emberfox",
                "Blaze",
                moves(&["Scratch", "Ember", "Quick Attack", "Flame Wheel"]),
                stats(52, 43, 65, 39),
            ),
            CreatureTemplate::new(
                "Tidalon",
                "Torrent",
                moves(&["Tackle", "Bubble", "Withdraw", "Water Gun"]),
                stats(48, 65, 43, 44),
            ),
            CreatureTemplate::new(
                "Thornback",
                "Overgrow",
                moves(&["Tackle", "Vine Whip", "Growl", "Razor Leaf"]),
                stats(49, 49, 45, 45),
            ),
            CreatureTemplate::new(
                "Galeling",
                "Keen Eye",
                moves(&["Gust", "Peck", "Whirlwind", "Wing Attack"]),
                stats(45, 40, 56, 40),
            ),
            CreatureTemplate::new(
                "Boulderhide",
                "Sturdy",
                moves(&["Tackle", "Harden", "Rock Throw", "Slam"]),
                stats(80, 100, 20, 40),
            ),
            CreatureTemplate::new(
                "Sparkmoth",
                "Static",
                moves(&["Thunder Shock", "Growl", "Quick Attack", "Spark"]),
                stats(55, 40, 90, 35),
            ),
        ];

        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a CreatureTemplate;
    type IntoIter = std::slice::Iter<'a, CreatureTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
