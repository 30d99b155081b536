//! Built-in achievement definitions.

use super::counters::{Counter, Streak};
use super::types::{AchievementCategory, AchievementDef, AchievementId, Predicate};

fn def(
    id: &str,
    name: &str,
    description: &str,
    category: AchievementCategory,
    icon: &str,
    predicate: Predicate,
) -> AchievementDef {
    AchievementDef {
        id: AchievementId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        category,
        secret: false,
        icon: icon.to_string(),
        predicate,
    }
}

fn counter(counter: Counter, value: u64) -> Predicate {
    Predicate::CounterAtLeast { counter, value }
}

fn streak(streak: Streak, length: u32) -> Predicate {
    Predicate::StreakAtLeast { streak, length }
}

/// All built-in definitions in display order.
pub fn default_achievements() -> Vec<AchievementDef> {
    use AchievementCategory::*;

    vec![
        // ═══════════════════════════════════════════════════════════════
        // LEARNING
        // ═══════════════════════════════════════════════════════════════
        def("first_steps", "First Steps", "Answer your first question", Learning, "📘",
            counter(Counter::QuestionsAnswered, 1)),
        def("curious_mind", "Curious Mind", "Answer 50 questions", Learning, "📚",
            counter(Counter::QuestionsAnswered, 50)),
        def("scholar", "Scholar", "Answer 500 questions", Learning, "🎓",
            counter(Counter::QuestionsAnswered, 500)),
        def("quiz_taker", "Quiz Taker", "Complete your first quiz", Learning, "📝",
            counter(Counter::QuizzesCompleted, 1)),
        // ═══════════════════════════════════════════════════════════════
        // MASTERY
        // ═══════════════════════════════════════════════════════════════
        def("quick_learner", "Quick Learner", "Answer 10 questions correctly", Mastery, "✅",
            counter(Counter::CorrectAnswers, 10)),
        def("sharp_mind", "Sharp Mind", "Answer 100 questions correctly", Mastery, "🧠",
            counter(Counter::CorrectAnswers, 100)),
        def("on_fire", "On Fire", "Answer 5 questions in a row correctly", Mastery, "🔥",
            streak(Streak::CorrectAnswers, 5)),
        def("unstoppable", "Unstoppable", "Answer 25 questions in a row correctly", Mastery, "⚡",
            streak(Streak::CorrectAnswers, 25)),
        def("perfectionist", "Perfectionist", "Finish a quiz without a mistake", Mastery, "💯",
            counter(Counter::PerfectQuizzes, 1)),
        // ═══════════════════════════════════════════════════════════════
        // LEVEL
        // ═══════════════════════════════════════════════════════════════
        def("level_5", "Apprentice", "Reach level 5", Level, "⭐",
            counter(Counter::LevelReached, 5)),
        def("level_10", "Adept", "Reach level 10", Level, "🌟",
            counter(Counter::LevelReached, 10)),
        def("level_25", "Sage", "Reach level 25", Level, "✨",
            counter(Counter::LevelReached, 25)),
        // ═══════════════════════════════════════════════════════════════
        // DEDICATION
        // ═══════════════════════════════════════════════════════════════
        def("regular", "Regular", "Study on 7 different days", Dedication, "📅",
            counter(Counter::DaysActive, 7)),
        def("weekly_ritual", "Weekly Ritual", "Log in 7 days in a row", Dedication, "🔁",
            streak(Streak::DailyLogin, 7)),
        // ═══════════════════════════════════════════════════════════════
        // CHARACTER
        // ═══════════════════════════════════════════════════════════════
        def("first_upgrade", "First Upgrade", "Spend your first stat point", Character, "💪",
            counter(Counter::StatPointsSpent, 1)),
        def("well_rounded", "Well Rounded", "Reach level 10 with a perfect quiz and a 10-answer streak",
            Character, "🏆",
            Predicate::All {
                of: vec![
                    counter(Counter::LevelReached, 10),
                    counter(Counter::PerfectQuizzes, 1),
                    streak(Streak::CorrectAnswers, 10),
                ],
            }),
    ]
}
