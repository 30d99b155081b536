//! Event payloads handed to the rendering layer.

use crate::achievements::AchievementId;
use crate::device::HapticPattern;
use crate::progression::AdvanceOutcome;
use serde::{Deserialize, Serialize};

/// Data for the level-up modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpPayload {
    pub new_level: u32,
    pub leveled_up: bool,
    pub stat_points_awarded: u32,
}

impl From<&AdvanceOutcome> for LevelUpPayload {
    fn from(outcome: &AdvanceOutcome) -> Self {
        Self {
            new_level: outcome.new_level,
            leveled_up: outcome.leveled_up,
            stat_points_awarded: outcome.stat_points_awarded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TutorEvent {
    AnswerGraded {
        correct: bool,
        xp_gained: u64,
        streak: u32,
    },
    LeveledUp(LevelUpPayload),
    StatPointsSpent {
        stat: String,
        points: u32,
        remaining: u32,
    },
    QuizCompleted {
        perfect: bool,
    },
    AchievementUnlocked {
        id: AchievementId,
        name: String,
        icon: String,
    },
}

impl TutorEvent {
    /// Suggested haptic feedback for this event.
    pub fn haptic(&self) -> HapticPattern {
        match self {
            TutorEvent::AnswerGraded { correct: true, .. } => HapticPattern::Light,
            TutorEvent::AnswerGraded { correct: false, .. } => HapticPattern::Error,
            TutorEvent::LeveledUp(_) => HapticPattern::Success,
            TutorEvent::StatPointsSpent { .. } => HapticPattern::Medium,
            TutorEvent::QuizCompleted { perfect: true } => HapticPattern::Success,
            TutorEvent::QuizCompleted { perfect: false } => HapticPattern::Medium,
            TutorEvent::AchievementUnlocked { .. } => HapticPattern::Heavy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_outcome() {
        let outcome = AdvanceOutcome {
            new_level: 3,
            new_xp: 400,
            stat_points_awarded: 6,
            levels_gained: 2,
            leveled_up: true,
        };
        let payload = LevelUpPayload::from(&outcome);
        assert_eq!(payload.new_level, 3);
        assert_eq!(payload.stat_points_awarded, 6);
        assert!(payload.leveled_up);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = TutorEvent::LeveledUp(LevelUpPayload {
            new_level: 2,
            leveled_up: true,
            stat_points_awarded: 3,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "leveled_up");
        assert_eq!(json["new_level"], 2);
    }

    #[test]
    fn test_haptics_per_event() {
        let wrong = TutorEvent::AnswerGraded {
            correct: false,
            xp_gained: 2,
            streak: 0,
        };
        assert_eq!(wrong.haptic(), HapticPattern::Error);
        let toast = TutorEvent::AchievementUnlocked {
            id: AchievementId::from("first_steps"),
            name: "First Steps".to_string(),
            icon: "📘".to_string(),
        };
        assert_eq!(toast.haptic(), HapticPattern::Heavy);
    }
}
