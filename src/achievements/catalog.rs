//! Validated achievement catalogs, built in or loaded from JSON.

use super::data::default_achievements;
use super::types::{AchievementCategory, AchievementDef, AchievementId, AchievementLedger};
use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AchievementCatalog {
    defs: Vec<AchievementDef>,
}

/// Definition paired with a learner's unlock state, for the browser view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementStatus<'a> {
    pub def: &'a AchievementDef,
    pub unlocked: bool,
    pub unlocked_at: Option<i64>,
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self {
            defs: default_achievements(),
        }
    }
}

impl AchievementCatalog {
    /// Rejects duplicate ids and empty composite predicates.
    pub fn new(defs: Vec<AchievementDef>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for def in &defs {
            if !seen.insert(&def.id) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "duplicate achievement id {}",
                    def.id
                )));
            }
            if def.predicate.has_empty_composite() {
                return Err(ConfigError::InvalidCatalog(format!(
                    "achievement {} has an empty composite predicate",
                    def.id
                )));
            }
        }
        Ok(Self { defs })
    }

    /// Load a JSON array of definitions.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let defs: Vec<AchievementDef> = serde_json::from_str(&json)?;
        Self::new(defs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AchievementDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, id: &AchievementId) -> Option<&AchievementDef> {
        self.defs.iter().find(|d| &d.id == id)
    }

    pub fn by_category(&self, category: AchievementCategory) -> Vec<&AchievementDef> {
        self.defs.iter().filter(|d| d.category == category).collect()
    }

    /// (unlocked, total) for one category.
    pub fn count_by_category(
        &self,
        ledger: &AchievementLedger,
        category: AchievementCategory,
    ) -> (usize, usize) {
        let in_category = self.by_category(category);
        let unlocked = in_category
            .iter()
            .filter(|d| ledger.is_unlocked(&d.id))
            .count();
        (unlocked, in_category.len())
    }

    /// 0.0 - 100.0, counting only ids this catalog knows.
    pub fn unlock_percentage(&self, ledger: &AchievementLedger) -> f32 {
        if self.defs.is_empty() {
            return 0.0;
        }
        let unlocked = self.defs.iter().filter(|d| ledger.is_unlocked(&d.id)).count();
        (unlocked as f32 / self.defs.len() as f32) * 100.0
    }

    /// Browser view of the catalog. Secret achievements are listed only
    /// once unlocked.
    pub fn statuses<'a>(&'a self, ledger: &AchievementLedger) -> Vec<AchievementStatus<'a>> {
        self.defs
            .iter()
            .filter(|def| !def.secret || ledger.is_unlocked(&def.id))
            .map(|def| AchievementStatus {
                def,
                unlocked: ledger.is_unlocked(&def.id),
                unlocked_at: ledger.unlocked_at(&def.id),
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for AchievementCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let defs = Vec::<AchievementDef>::deserialize(deserializer)?;
        AchievementCatalog::new(defs).map_err(serde::de::Error::custom)
    }
}
