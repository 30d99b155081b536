use crate::core::config::RewardConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// XP earned for one answer. `streak` is the correct-answer streak
/// including this answer (0 for an incorrect answer).
pub fn xp_for_answer(
    rewards: &RewardConfig,
    difficulty: Difficulty,
    correct: bool,
    streak: u32,
) -> u64 {
    if !correct {
        return rewards.participation;
    }
    let base = rewards.correct_xp(difficulty);
    if rewards.streak_bonus_after > 0 && streak >= rewards.streak_bonus_after {
        base.saturating_add(rewards.streak_bonus)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_earns_participation() {
        let rewards = RewardConfig::default();
        assert_eq!(xp_for_answer(&rewards, Difficulty::Hard, false, 0), 2);
    }

    #[test]
    fn test_correct_by_difficulty() {
        let rewards = RewardConfig::default();
        assert_eq!(xp_for_answer(&rewards, Difficulty::Easy, true, 1), 10);
        assert_eq!(xp_for_answer(&rewards, Difficulty::Medium, true, 1), 20);
        assert_eq!(xp_for_answer(&rewards, Difficulty::Hard, true, 1), 35);
    }

    #[test]
    fn test_streak_bonus_starts_at_threshold() {
        let rewards = RewardConfig::default();
        assert_eq!(xp_for_answer(&rewards, Difficulty::Easy, true, 2), 10);
        assert_eq!(xp_for_answer(&rewards, Difficulty::Easy, true, 3), 15);
        assert_eq!(xp_for_answer(&rewards, Difficulty::Easy, true, 12), 15);
    }

    #[test]
    fn test_streak_bonus_disabled_at_zero() {
        let rewards = RewardConfig {
            streak_bonus_after: 0,
            ..RewardConfig::default()
        };
        assert_eq!(xp_for_answer(&rewards, Difficulty::Easy, true, 50), 10);
    }

    #[test]
    fn test_streak_bonus_saturates_on_huge_rewards() {
        let rewards = RewardConfig {
            correct_hard: u64::MAX,
            ..RewardConfig::default()
        };
        assert_eq!(xp_for_answer(&rewards, Difficulty::Hard, true, 5), u64::MAX);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
