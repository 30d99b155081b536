//! Character snapshot, stats, and stat-point allocation.

pub mod allocator;
pub mod stats;

pub use allocator::{allocate, allocate_many, allocate_stat};
pub use stats::{StatName, Stats};

use crate::core::error::{ProgressionError, Result};
use crate::progression::ladder::{AdvanceOutcome, ThresholdTable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Character record as exchanged with the data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub level: u32,
    pub total_xp: u64,
    pub unspent_stat_points: u32,
    pub stats: Stats,
}

impl Character {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            level: 1,
            total_xp: 0,
            unspent_stat_points: 0,
            stats: Stats::new(),
        }
    }

    /// Returns the character after a ladder advance. Level-up grants are
    /// added to the unspent pool.
    pub fn apply_advance(&self, outcome: &AdvanceOutcome) -> Character {
        Character {
            level: outcome.new_level,
            total_xp: outcome.new_xp,
            unspent_stat_points: self
                .unspent_stat_points
                .saturating_add(outcome.stat_points_awarded),
            ..self.clone()
        }
    }

    /// Verifies level/XP against the table and that allocated plus unspent
    /// points equal everything the levels reached have granted.
    pub fn check_allocation(&self, table: &ThresholdTable) -> Result<()> {
        table.check_state(self.level, self.total_xp)?;

        let granted = table.points_granted_through(self.level) as i64;
        let accounted = self.stats.allocated() + self.unspent_stat_points as i64;
        if accounted != granted {
            return Err(ProgressionError::InvalidState(format!(
                "level {} grants {} points but {} are allocated or unspent",
                self.level, granted, accounted
            )));
        }
        Ok(())
    }
}
