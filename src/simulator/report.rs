//! Simulation report generation.

use crate::achievements::{AchievementCatalog, AchievementId};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Final state of one simulated learner.
#[derive(Debug, Clone)]
pub struct LearnerStats {
    pub final_level: u32,
    pub total_xp: u64,
    /// Level after every `sample_every` questions
    pub level_samples: Vec<u32>,
    pub unlocked: BTreeSet<AchievementId>,
}

/// Aggregated results across all learners.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_learners: u32,
    pub avg_final_level: f64,
    pub max_final_level: u32,
    pub avg_total_xp: f64,
    /// (questions answered, average level)
    pub level_curve: Vec<(u32, f64)>,
    /// Fraction of learners (0.0 - 1.0) that unlocked each achievement
    pub unlock_rates: BTreeMap<String, f64>,
}

impl SimReport {
    pub fn from_learners(
        learners: Vec<LearnerStats>,
        catalog: &AchievementCatalog,
        sample_every: u32,
    ) -> Self {
        let num_learners = learners.len() as u32;
        let divisor = num_learners.max(1) as f64;

        let avg_final_level =
            learners.iter().map(|l| l.final_level as f64).sum::<f64>() / divisor;
        let max_final_level = learners.iter().map(|l| l.final_level).max().unwrap_or(0);
        let avg_total_xp = learners.iter().map(|l| l.total_xp as f64).sum::<f64>() / divisor;

        let samples = learners
            .iter()
            .map(|l| l.level_samples.len())
            .min()
            .unwrap_or(0);
        let level_curve = (0..samples)
            .map(|i| {
                let avg = learners
                    .iter()
                    .map(|l| l.level_samples[i] as f64)
                    .sum::<f64>()
                    / divisor;
                ((i as u32 + 1) * sample_every.max(1), avg)
            })
            .collect();

        let unlock_rates = catalog
            .iter()
            .map(|def| {
                let count = learners
                    .iter()
                    .filter(|l| l.unlocked.contains(&def.id))
                    .count();
                (def.id.to_string(), count as f64 / divisor)
            })
            .collect();

        Self {
            num_learners,
            avg_final_level,
            max_final_level,
            avg_total_xp,
            level_curve,
            unlock_rates,
        }
    }

    pub fn unlock_rate(&self, id: &str) -> f64 {
        self.unlock_rates.get(id).copied().unwrap_or(0.0)
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Learners: {}\n", self.num_learners));
        report.push_str(&format!(
            "Final level: avg {:.1}, max {}\n",
            self.avg_final_level, self.max_final_level
        ));
        report.push_str(&format!("Average total XP: {:.0}\n\n", self.avg_total_xp));

        report.push_str("LEVEL CURVE\n");
        for (questions, level) in &self.level_curve {
            report.push_str(&format!("  {:>6} questions  level {:>5.1}\n", questions, level));
        }

        report.push_str("\nACHIEVEMENT UNLOCK RATES\n");
        for (id, rate) in &self.unlock_rates {
            report.push_str(&format!("  {:<16} {:>5.1}%\n", id, rate * 100.0));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
