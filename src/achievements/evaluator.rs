//! Stateless achievement evaluation.
//!
//! Each call re-checks every catalog entry from scratch. At-most-once
//! unlocking holds as long as the caller persists
//! `previously_unlocked ∪ result` before the next call.

use super::catalog::AchievementCatalog;
use super::counters::Counters;
use super::types::AchievementId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct AchievementEvaluator {
    catalog: AchievementCatalog,
}

impl AchievementEvaluator {
    pub fn new(catalog: AchievementCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Ids whose predicate holds for `counters` and that are not already in
    /// `previously_unlocked`.
    ///
    /// Predicates are assumed independent of each other's unlock state.
    pub fn evaluate(
        &self,
        counters: &Counters,
        previously_unlocked: &BTreeSet<AchievementId>,
    ) -> BTreeSet<AchievementId> {
        self.catalog
            .iter()
            .filter(|def| !previously_unlocked.contains(&def.id))
            .filter(|def| def.predicate.holds(counters))
            .map(|def| def.id.clone())
            .collect()
    }
}
