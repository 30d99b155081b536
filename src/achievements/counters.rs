//! Activity counters that achievement predicates are evaluated against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Monotonic activity totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    QuestionsAnswered,
    CorrectAnswers,
    PerfectQuizzes,
    QuizzesCompleted,
    LevelReached,
    StatPointsSpent,
    DaysActive,
}

/// Run lengths that reset when broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Streak {
    CorrectAnswers,
    DailyLogin,
}

/// Snapshot of a learner's counters. Absent entries read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(default)]
    counters: BTreeMap<Counter, u64>,
    #[serde(default)]
    streaks: BTreeMap<Streak, u32>,
    /// Longest run seen per streak, kept so a broken streak still counts.
    #[serde(default)]
    best_streaks: BTreeMap<Streak, u32>,
}

impl Counters {
    pub fn get(&self, counter: Counter) -> u64 {
        self.counters.get(&counter).copied().unwrap_or(0)
    }

    pub fn set(&mut self, counter: Counter, value: u64) {
        self.counters.insert(counter, value);
    }

    pub fn increment(&mut self, counter: Counter, by: u64) {
        let entry = self.counters.entry(counter).or_insert(0);
        *entry = entry.saturating_add(by);
    }

    /// Raise a counter to `value` if it is currently lower.
    pub fn raise_to(&mut self, counter: Counter, value: u64) {
        let entry = self.counters.entry(counter).or_insert(0);
        *entry = (*entry).max(value);
    }

    pub fn streak(&self, streak: Streak) -> u32 {
        self.streaks.get(&streak).copied().unwrap_or(0)
    }

    pub fn best_streak(&self, streak: Streak) -> u32 {
        self.best_streaks
            .get(&streak)
            .copied()
            .unwrap_or(0)
            .max(self.streak(streak))
    }

    /// Extend a streak by one and return the new length.
    pub fn extend_streak(&mut self, streak: Streak) -> u32 {
        let length = self.streak(streak).saturating_add(1);
        self.streaks.insert(streak, length);
        let best = self.best_streaks.entry(streak).or_insert(0);
        *best = (*best).max(length);
        length
    }

    pub fn reset_streak(&mut self, streak: Streak) {
        self.streaks.insert(streak, 0);
    }
}
