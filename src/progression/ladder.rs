//! XP/level ladder.
//!
//! Maps cumulative XP onto levels through a validated threshold table.
//! All operations are pure: they read the table and the caller's snapshot
//! values and return new values.

use crate::core::constants::MAX_CONFIGURABLE_LEVEL;
use crate::core::error::{ConfigError, ProgressionError, Result};
use serde::{Deserialize, Serialize};

/// One rung of the ladder: reaching `xp_required` cumulative XP grants
/// `level` and `stat_points` unspent points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThreshold {
    pub level: u32,
    pub xp_required: u64,
    pub stat_points: u32,
}

/// Ordered, validated sequence of level thresholds.
///
/// Starts at level 1 / 0 XP, levels are contiguous, XP strictly increases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdTable {
    entries: Vec<LevelThreshold>,
}

/// Result of applying XP to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceOutcome {
    pub new_level: u32,
    pub new_xp: u64,
    pub stat_points_awarded: u32,
    pub levels_gained: u32,
    pub leveled_up: bool,
}

/// Position of a character within its current level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp_into_level: u64,
    /// Width of the current level in XP. `None` at max level.
    pub xp_for_level: Option<u64>,
    /// XP still needed for the next level. `None` at max level.
    pub xp_to_next: Option<u64>,
    /// 0.0 - 1.0 progress bar value; 1.0 at max level.
    pub fraction: f64,
}

/// XP needed to go from `level` to `level + 1` on a power curve.
pub fn xp_for_next_level(base: f64, exponent: f64, level: u32) -> u64 {
    (base * f64::powf(level as f64, exponent)) as u64
}

impl ThresholdTable {
    pub fn new(entries: Vec<LevelThreshold>) -> std::result::Result<Self, ConfigError> {
        let first = entries
            .first()
            .ok_or_else(|| ConfigError::InvalidTable("table is empty".to_string()))?;
        if first.level != 1 || first.xp_required != 0 || first.stat_points != 0 {
            return Err(ConfigError::InvalidTable(format!(
                "first entry must be level 1 at 0 XP with no points, got {:?}",
                first
            )));
        }

        for pair in entries.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.level != prev.level + 1 {
                return Err(ConfigError::InvalidTable(format!(
                    "level {} follows level {}",
                    next.level, prev.level
                )));
            }
            if next.xp_required <= prev.xp_required {
                return Err(ConfigError::InvalidTable(format!(
                    "level {} requires {} XP, not more than level {} ({} XP)",
                    next.level, next.xp_required, prev.level, prev.xp_required
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Build a table from the power curve `base * level^exponent`, granting
    /// `points_per_level` at each level-up.
    pub fn from_curve(
        base: f64,
        exponent: f64,
        max_level: u32,
        points_per_level: u32,
    ) -> std::result::Result<Self, ConfigError> {
        if max_level == 0 {
            return Err(ConfigError::InvalidTable(
                "max level must be at least 1".to_string(),
            ));
        }
        if max_level > MAX_CONFIGURABLE_LEVEL {
            return Err(ConfigError::InvalidTable(format!(
                "max level {} exceeds the limit of {}",
                max_level, MAX_CONFIGURABLE_LEVEL
            )));
        }

        let mut entries = Vec::with_capacity(max_level as usize);
        entries.push(LevelThreshold {
            level: 1,
            xp_required: 0,
            stat_points: 0,
        });

        let mut cumulative: u64 = 0;
        for level in 1..max_level {
            cumulative = cumulative
                .checked_add(xp_for_next_level(base, exponent, level))
                .ok_or_else(|| {
                    ConfigError::InvalidTable(format!("XP overflow at level {}", level + 1))
                })?;
            entries.push(LevelThreshold {
                level: level + 1,
                xp_required: cumulative,
                stat_points: points_per_level,
            });
        }

        Self::new(entries)
    }

    pub fn entries(&self) -> &[LevelThreshold] {
        &self.entries
    }

    pub fn max_level(&self) -> u32 {
        // Non-empty by construction.
        self.entries.len() as u32
    }

    pub fn threshold(&self, level: u32) -> Option<&LevelThreshold> {
        let index = level.checked_sub(1)?;
        self.entries.get(index as usize)
    }

    /// Highest level whose requirement is met by `xp`.
    pub fn level_for_xp(&self, xp: u64) -> u32 {
        self.entries.partition_point(|t| t.xp_required <= xp) as u32
    }

    /// Total stat points granted by every level-up up to and including `level`.
    pub fn points_granted_through(&self, level: u32) -> u32 {
        self.entries
            .iter()
            .take_while(|t| t.level <= level)
            .map(|t| t.stat_points)
            .fold(0u32, |acc, p| acc.saturating_add(p))
    }

    /// Checks that `xp` lies inside the band of `level`.
    pub fn check_state(&self, level: u32, xp: u64) -> Result<()> {
        let current = self.threshold(level).ok_or_else(|| {
            ProgressionError::InvalidState(format!(
                "level {} is outside the table (1..={})",
                level,
                self.max_level()
            ))
        })?;
        if xp < current.xp_required {
            return Err(ProgressionError::InvalidState(format!(
                "level {} requires {} XP but character has {}",
                level, current.xp_required, xp
            )));
        }
        if let Some(next) = self.threshold(level + 1) {
            if xp >= next.xp_required {
                return Err(ProgressionError::InvalidState(format!(
                    "{} XP already reaches level {} but character is level {}",
                    xp, next.level, level
                )));
            }
        }
        Ok(())
    }

    /// Apply `xp_gained` and climb as many levels as the new total allows.
    ///
    /// XP is conserved: `new_xp == current_xp + xp_gained`.
    pub fn advance(&self, current_level: u32, current_xp: u64, xp_gained: u64) -> Result<AdvanceOutcome> {
        self.check_state(current_level, current_xp)?;

        let new_xp = current_xp.checked_add(xp_gained).ok_or_else(|| {
            ProgressionError::InvalidState(format!(
                "adding {} XP to {} overflows",
                xp_gained, current_xp
            ))
        })?;

        let mut new_level = current_level;
        let mut stat_points_awarded = 0u32;
        while let Some(next) = self.threshold(new_level + 1) {
            if new_xp < next.xp_required {
                break;
            }
            new_level = next.level;
            stat_points_awarded = stat_points_awarded.saturating_add(next.stat_points);
        }

        let levels_gained = new_level - current_level;
        if levels_gained > 0 {
            tracing::debug!(
                from = current_level,
                to = new_level,
                points = stat_points_awarded,
                "ladder advanced"
            );
        }

        Ok(AdvanceOutcome {
            new_level,
            new_xp,
            stat_points_awarded,
            levels_gained,
            leveled_up: levels_gained > 0,
        })
    }

    /// Remaining-progress view for a progress bar.
    pub fn progress(&self, level: u32, xp: u64) -> Result<LevelProgress> {
        self.check_state(level, xp)?;
        let floor = self.threshold(level).map_or(0, |t| t.xp_required);
        let xp_into_level = xp - floor;

        Ok(match self.threshold(level + 1) {
            Some(next) => {
                let width = next.xp_required - floor;
                LevelProgress {
                    level,
                    xp_into_level,
                    xp_for_level: Some(width),
                    xp_to_next: Some(next.xp_required - xp),
                    fraction: xp_into_level as f64 / width as f64,
                }
            }
            None => LevelProgress {
                level,
                xp_into_level,
                xp_for_level: None,
                xp_to_next: None,
                fraction: 1.0,
            },
        })
    }
}

impl<'de> Deserialize<'de> for ThresholdTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            entries: Vec<LevelThreshold>,
        }
        let raw = Raw::deserialize(deserializer)?;
        ThresholdTable::new(raw.entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> ThresholdTable {
        ThresholdTable::new(vec![
            LevelThreshold { level: 1, xp_required: 0, stat_points: 0 },
            LevelThreshold { level: 2, xp_required: 100, stat_points: 3 },
            LevelThreshold { level: 3, xp_required: 250, stat_points: 3 },
            LevelThreshold { level: 4, xp_required: 500, stat_points: 5 },
        ])
        .unwrap()
    }

    #[test]
    fn test_xp_for_next_level_curve() {
        assert_eq!(xp_for_next_level(100.0, 1.5, 1), 100);
        assert_eq!(xp_for_next_level(100.0, 1.5, 4), 800);
        // 100 * 2^1.5 = 282.84...
        assert_eq!(xp_for_next_level(100.0, 1.5, 2), 282);
    }

    #[test]
    fn test_from_curve_is_cumulative() {
        let table = ThresholdTable::from_curve(100.0, 1.5, 4, 3).unwrap();
        let xp: Vec<u64> = table.entries().iter().map(|t| t.xp_required).collect();
        // 0, 100, 100+282, 382+519
        assert_eq!(xp, vec![0, 100, 382, 901]);
        assert_eq!(table.max_level(), 4);
    }

    #[test]
    fn test_from_curve_caps_max_level() {
        let table = ThresholdTable::from_curve(1.0, 1.0, MAX_CONFIGURABLE_LEVEL, 1).unwrap();
        assert_eq!(table.max_level(), MAX_CONFIGURABLE_LEVEL);

        let err = ThresholdTable::from_curve(100.0, 1.5, u32::MAX, 3).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTable(_)));
    }

    #[test]
    fn test_single_threshold_crossing() {
        let outcome = small_table().advance(1, 90, 20).unwrap();
        assert_eq!(outcome.new_level, 2);
        assert_eq!(outcome.new_xp, 110);
        assert_eq!(outcome.stat_points_awarded, 3);
        assert_eq!(outcome.levels_gained, 1);
        assert!(outcome.leveled_up);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let outcome = small_table().advance(1, 0, 100).unwrap();
        assert_eq!(outcome.new_level, 2);
    }

    #[test]
    fn test_multi_level_jump_sums_grants() {
        let outcome = small_table().advance(1, 0, 600).unwrap();
        assert_eq!(outcome.new_level, 4);
        assert_eq!(outcome.stat_points_awarded, 3 + 3 + 5);
        assert_eq!(outcome.levels_gained, 3);
    }

    #[test]
    fn test_no_level_up() {
        let outcome = small_table().advance(2, 120, 10).unwrap();
        assert_eq!(outcome.new_level, 2);
        assert_eq!(outcome.new_xp, 130);
        assert_eq!(outcome.stat_points_awarded, 0);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn test_zero_gain_is_identity() {
        let outcome = small_table().advance(3, 300, 0).unwrap();
        assert_eq!(outcome.new_level, 3);
        assert_eq!(outcome.new_xp, 300);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn test_max_level_keeps_accumulating_xp() {
        let outcome = small_table().advance(4, 10_000, 5_000).unwrap();
        assert_eq!(outcome.new_level, 4);
        assert_eq!(outcome.new_xp, 15_000);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn test_inconsistent_state_rejected() {
        let table = small_table();
        // Too little XP for level 3.
        assert!(matches!(
            table.advance(3, 100, 10),
            Err(ProgressionError::InvalidState(_))
        ));
        // Enough XP for level 3 while claiming level 1.
        assert!(matches!(
            table.advance(1, 300, 0),
            Err(ProgressionError::InvalidState(_))
        ));
        // Levels outside the table.
        assert!(table.advance(0, 0, 10).is_err());
        assert!(table.advance(5, 1_000, 10).is_err());
    }

    #[test]
    fn test_overflow_is_invalid_state() {
        let result = small_table().advance(4, u64::MAX - 1, 5);
        assert!(matches!(result, Err(ProgressionError::InvalidState(_))));
    }

    #[test]
    fn test_level_for_xp() {
        let table = small_table();
        assert_eq!(table.level_for_xp(0), 1);
        assert_eq!(table.level_for_xp(99), 1);
        assert_eq!(table.level_for_xp(100), 2);
        assert_eq!(table.level_for_xp(499), 3);
        assert_eq!(table.level_for_xp(u64::MAX), 4);
    }

    #[test]
    fn test_points_granted_through() {
        let table = small_table();
        assert_eq!(table.points_granted_through(1), 0);
        assert_eq!(table.points_granted_through(3), 6);
        assert_eq!(table.points_granted_through(4), 11);
    }

    #[test]
    fn test_progress_mid_level() {
        let progress = small_table().progress(2, 175).unwrap();
        assert_eq!(progress.xp_into_level, 75);
        assert_eq!(progress.xp_for_level, Some(150));
        assert_eq!(progress.xp_to_next, Some(75));
        assert!((progress.fraction - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_at_max_level() {
        let progress = small_table().progress(4, 800).unwrap();
        assert_eq!(progress.xp_into_level, 300);
        assert_eq!(progress.xp_to_next, None);
        assert_eq!(progress.fraction, 1.0);
    }

    #[test]
    fn test_table_validation() {
        assert!(ThresholdTable::new(vec![]).is_err());

        let gap = vec![
            LevelThreshold { level: 1, xp_required: 0, stat_points: 0 },
            LevelThreshold { level: 3, xp_required: 100, stat_points: 3 },
        ];
        assert!(ThresholdTable::new(gap).is_err());

        let flat = vec![
            LevelThreshold { level: 1, xp_required: 0, stat_points: 0 },
            LevelThreshold { level: 2, xp_required: 0, stat_points: 3 },
        ];
        assert!(ThresholdTable::new(flat).is_err());

        let bad_start = vec![LevelThreshold { level: 1, xp_required: 10, stat_points: 0 }];
        assert!(ThresholdTable::new(bad_start).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ThresholdTable = serde_json::from_str(
            r#"{"entries": [{"level": 1, "xp_required": 0, "stat_points": 0},
                            {"level": 2, "xp_required": 50, "stat_points": 2}]}"#,
        )
        .unwrap();
        assert_eq!(ok.max_level(), 2);

        let bad = serde_json::from_str::<ThresholdTable>(
            r#"{"entries": [{"level": 2, "xp_required": 0, "stat_points": 0}]}"#,
        );
        assert!(bad.is_err());
    }
}
