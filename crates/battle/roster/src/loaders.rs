//! Content loaders for reading roster data from files.
//!
//! Rosters live in RON, battle tuning in TOML. Loading is strictly local:
//! a data directory shipped with the application, no remote catalogs.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::roster::Roster;
use crate::template::CreatureTemplate;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loader for creature rosters from RON files.
///
/// RON format: `Vec<CreatureTemplate>`.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let entries: Vec<CreatureTemplate> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        Roster::new(entries)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }
}

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

/// Content factory that loads battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the creature roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join("roster.ron");
        RosterLoader::load(&path)
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn loads_shipped_roster() {
        let roster = ContentFactory::new(data_dir()).load_roster().unwrap();
        assert_eq!(roster, Roster::starter());
    }

    #[test]
    fn loads_shipped_config() {
        let config = ContentFactory::new(data_dir()).load_config().unwrap();
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn missing_file_is_a_readable_error() {
        let err = ContentFactory::new("/nonexistent")
            .load_roster()
            .unwrap_err();
        assert!(err.to_string().contains("roster.ron"));
    }
}
