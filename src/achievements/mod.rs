//! Achievement system module.
//!
//! Achievements are defined as data (a catalog of tagged predicates over a
//! learner's counters) and evaluated statelessly. Unlock records live in an
//! [`AchievementLedger`] owned by the learner snapshot.

pub mod catalog;
pub mod counters;
pub mod data;
pub mod evaluator;
pub mod types;

pub use catalog::{AchievementCatalog, AchievementStatus};
pub use counters::{Counter, Counters, Streak};
pub use evaluator::AchievementEvaluator;
pub use types::{
    AchievementCategory, AchievementDef, AchievementId, AchievementLedger, Predicate,
    UnlockedAchievement,
};
