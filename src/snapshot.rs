//! The learner record exchanged with the data service.

use crate::achievements::{AchievementLedger, Counter, Counters};
use crate::character::Character;
use crate::core::constants::SNAPSHOT_FILE_VERSION;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    pub character: Character,
    #[serde(default)]
    pub counters: Counters,
    #[serde(default)]
    pub achievements: AchievementLedger,
}

fn default_version() -> u32 {
    SNAPSHOT_FILE_VERSION
}

impl LearnerSnapshot {
    pub fn new(character: Character) -> Self {
        let mut counters = Counters::default();
        counters.set(Counter::LevelReached, character.level as u64);
        Self {
            version: SNAPSHOT_FILE_VERSION,
            character,
            counters,
            achievements: AchievementLedger::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_records_level() {
        let snapshot = LearnerSnapshot::new(Character::new("Ada".to_string()));
        assert_eq!(snapshot.counters.get(Counter::LevelReached), 1);
        assert_eq!(snapshot.version, SNAPSHOT_FILE_VERSION);
        assert_eq!(snapshot.achievements.unlocked_count(), 0);
    }

    #[test]
    fn test_minimal_json_fills_defaults() {
        let json = serde_json::json!({
            "character": {
                "id": "6f1c2a4e-8d43-4b4a-9a53-0c1d2e3f4a5b",
                "name": "Ada",
                "level": 2,
                "total_xp": 120,
                "unspent_stat_points": 3,
                "stats": {"wisdom": 1}
            }
        });
        let snapshot: LearnerSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_FILE_VERSION);
        assert_eq!(snapshot.character.level, 2);
        assert_eq!(snapshot.counters, Counters::default());
    }
}
