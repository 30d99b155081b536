//! Achievement system types and data structures.

use super::counters::{Counter, Counters, Streak};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Learning,
    Mastery,
    Level,
    Dedication,
    Character,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 5] = [
        AchievementCategory::Learning,
        AchievementCategory::Mastery,
        AchievementCategory::Level,
        AchievementCategory::Dedication,
        AchievementCategory::Character,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Learning => "Learning",
            AchievementCategory::Mastery => "Mastery",
            AchievementCategory::Level => "Level",
            AchievementCategory::Dedication => "Dedication",
            AchievementCategory::Character => "Character",
        }
    }
}

/// Stable identifier shared with the data service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementId(pub String);

impl AchievementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AchievementId {
    fn from(id: &str) -> Self {
        AchievementId(id.to_string())
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unlock condition, evaluated by [`Predicate::holds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    CounterAtLeast { counter: Counter, value: u64 },
    /// Compares against the best run seen, so a streak that has since
    /// broken still satisfies it.
    StreakAtLeast { streak: Streak, length: u32 },
    /// Holds when every inner predicate holds.
    All { of: Vec<Predicate> },
}

impl Predicate {
    pub fn holds(&self, counters: &Counters) -> bool {
        match self {
            Predicate::CounterAtLeast { counter, value } => counters.get(*counter) >= *value,
            Predicate::StreakAtLeast { streak, length } => counters.best_streak(*streak) >= *length,
            Predicate::All { of } => of.iter().all(|p| p.holds(counters)),
        }
    }

    /// True if this predicate or any nested one is an empty `All`.
    pub(crate) fn has_empty_composite(&self) -> bool {
        match self {
            Predicate::All { of } => of.is_empty() || of.iter().any(|p| p.has_empty_composite()),
            _ => false,
        }
    }
}

/// Definition of an achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    #[serde(default)]
    pub secret: bool,
    #[serde(default)]
    pub icon: String,
    pub predicate: Predicate,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// A learner's unlocked achievements. Entries are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementLedger {
    pub unlocked: BTreeMap<AchievementId, UnlockedAchievement>,
}

impl AchievementLedger {
    pub fn is_unlocked(&self, id: &AchievementId) -> bool {
        self.unlocked.contains_key(id)
    }

    pub fn unlocked_at(&self, id: &AchievementId) -> Option<i64> {
        self.unlocked.get(id).map(|u| u.unlocked_at)
    }

    pub fn unlocked_ids(&self) -> BTreeSet<AchievementId> {
        self.unlocked.keys().cloned().collect()
    }

    /// Record unlocks at `now`. Already-unlocked ids keep their original
    /// timestamp. Returns the ids that were new.
    pub fn record<I>(&mut self, ids: I, now: i64) -> Vec<AchievementId>
    where
        I: IntoIterator<Item = AchievementId>,
    {
        let mut newly = Vec::new();
        for id in ids {
            if self.is_unlocked(&id) {
                continue;
            }
            self.unlocked
                .insert(id.clone(), UnlockedAchievement { unlocked_at: now });
            newly.push(id);
        }
        newly
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}
