//! seating.toml configuration parser.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::editor::EditMode;
use crate::engine::{PoolOrder, RosterOrder, SeededShuffle};
use crate::error::AllocResult;
use crate::layout::{Room, SeatLayout};

const DEFAULT_SEATS_PER_BENCH: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingConfig {
    #[serde(default = "default_seats_per_bench")]
    pub seats_per_bench: u32,
    /// Shuffle seed. Absent means a fresh random order on every run.
    pub seed: Option<u64>,
    /// Keep roster order instead of shuffling. Overrides `seed`.
    #[serde(default)]
    pub keep_roster_order: bool,
    #[serde(default)]
    pub edit_mode: EditMode,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

fn default_seats_per_bench() -> u32 {
    DEFAULT_SEATS_PER_BENCH
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self::scaffold()
    }
}

impl SeatingConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Starter config: three empty rooms, three seats per bench.
    pub fn scaffold() -> Self {
        SeatingConfig {
            seats_per_bench: DEFAULT_SEATS_PER_BENCH,
            seed: None,
            keep_roster_order: false,
            edit_mode: EditMode::Exclusive,
            rooms: (1..=3).map(|i| Room::new(format!("Room-{i}"), 0)).collect(),
        }
    }

    /// Build the seat layout described by this config.
    pub fn layout(&self) -> AllocResult<SeatLayout> {
        SeatLayout::new(&self.rooms, self.seats_per_bench)
    }

    /// Pool ordering described by this config.
    pub fn pool_order(&self) -> Box<dyn PoolOrder> {
        if self.keep_roster_order {
            return Box::new(RosterOrder);
        }
        match self.seed {
            Some(seed) => Box::new(SeededShuffle::seeded(seed)),
            None => Box::new(SeededShuffle::from_entropy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AllocError;

    #[test]
    fn test_scaffold_round_trips() {
        let config = SeatingConfig::scaffold();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("Room-1"));
        assert_eq!(SeatingConfig::from_toml_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_parse_minimal() {
        let config = SeatingConfig::from_toml_str("").unwrap();
        assert_eq!(config.seats_per_bench, 3);
        assert_eq!(config.seed, None);
        assert_eq!(config.edit_mode, EditMode::Exclusive);
        assert!(config.rooms.is_empty());
    }

    #[test]
    fn test_parse_full() {
        let toml_str = r#"
seats_per_bench = 2
seed = 42
edit_mode = "allow-duplicates"

[[rooms]]
name = "Hall A"
benches = 4

[[rooms]]
name = "Hall B"
benches = 1
"#;
        let config = SeatingConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.edit_mode, EditMode::AllowDuplicates);

        let layout = config.layout().unwrap();
        assert_eq!(layout.bench_count(), 5);
        assert_eq!(layout.total_seats(), 10);
    }

    #[test]
    fn test_negative_benches_surface_as_invalid_layout() {
        let toml_str = r#"
[[rooms]]
name = "Broken"
benches = -2
"#;
        let config = SeatingConfig::from_toml_str(toml_str).unwrap();
        assert!(matches!(config.layout(), Err(AllocError::InvalidLayout(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seating.toml");
        std::fs::write(&path, "seats_per_bench = 4\n").unwrap();

        let config = SeatingConfig::from_file(&path).unwrap();
        assert_eq!(config.seats_per_bench, 4);

        let missing = SeatingConfig::from_file(&dir.path().join("nope.toml"));
        assert!(missing.is_err());
    }
}
