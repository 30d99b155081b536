//! Tunable engine configuration.
//!
//! Every field has a default from [`super::constants`], so a partial JSON
//! file only needs to name the values it overrides.

use super::constants::*;
use super::error::ConfigError;
use crate::progression::ladder::ThresholdTable;
use crate::progression::rewards::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters for the generated XP curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    pub xp_curve_base: f64,
    pub xp_curve_exponent: f64,
    pub max_level: u32,
    pub stat_points_per_level: u32,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            xp_curve_base: XP_CURVE_BASE,
            xp_curve_exponent: XP_CURVE_EXPONENT,
            max_level: MAX_LEVEL,
            stat_points_per_level: LEVEL_UP_STAT_POINTS,
        }
    }
}

/// XP awarded per answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub correct_easy: u64,
    pub correct_medium: u64,
    pub correct_hard: u64,
    /// Awarded for an incorrect answer.
    pub participation: u64,
    /// Correct-answer streak length at which the bonus starts applying.
    pub streak_bonus_after: u32,
    pub streak_bonus: u64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            correct_easy: XP_CORRECT_EASY,
            correct_medium: XP_CORRECT_MEDIUM,
            correct_hard: XP_CORRECT_HARD,
            participation: XP_PARTICIPATION,
            streak_bonus_after: STREAK_BONUS_AFTER,
            streak_bonus: STREAK_BONUS_XP,
        }
    }
}

impl RewardConfig {
    pub fn correct_xp(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Easy => self.correct_easy,
            Difficulty::Medium => self.correct_medium,
            Difficulty::Hard => self.correct_hard,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub ladder: LadderConfig,
    pub rewards: RewardConfig,
}

impl TutorConfig {
    /// Load a config file. Missing fields fall back to defaults; the ladder
    /// section must describe a buildable table.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: TutorConfig = serde_json::from_str(&json)?;
        config.threshold_table()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults if it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default tutor config");
                Self::default()
            }
        }
    }

    /// Build the threshold table described by the ladder section.
    pub fn threshold_table(&self) -> Result<ThresholdTable, ConfigError> {
        ThresholdTable::from_curve(
            self.ladder.xp_curve_base,
            self.ladder.xp_curve_exponent,
            self.ladder.max_level,
            self.ladder.stat_points_per_level,
        )
    }
}
