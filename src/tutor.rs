//! Learner-facing operations.
//!
//! Each operation takes the current [`LearnerSnapshot`] by reference and
//! returns the next snapshot plus the events the UI should show. On error
//! nothing is returned, so the caller keeps its original snapshot.

use crate::achievements::{AchievementCatalog, AchievementEvaluator, Counter, Streak};
use crate::character::{allocate, Character};
use crate::core::config::TutorConfig;
use crate::core::error::{ConfigError, Result};
use crate::events::{LevelUpPayload, TutorEvent};
use crate::progression::{xp_for_answer, Difficulty, LevelProgress, ThresholdTable};
use crate::snapshot::LearnerSnapshot;
use serde::{Deserialize, Serialize};

/// A graded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub difficulty: Difficulty,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorOutcome {
    pub snapshot: LearnerSnapshot,
    pub events: Vec<TutorEvent>,
}

/// Threshold table, reward rules, and achievement catalog for one deployment.
#[derive(Debug, Clone)]
pub struct TutorEngine {
    config: TutorConfig,
    table: ThresholdTable,
    evaluator: AchievementEvaluator,
}

impl TutorEngine {
    pub fn new(config: TutorConfig) -> std::result::Result<Self, ConfigError> {
        Self::with_catalog(config, AchievementCatalog::default())
    }

    pub fn with_catalog(
        config: TutorConfig,
        catalog: AchievementCatalog,
    ) -> std::result::Result<Self, ConfigError> {
        let table = config.threshold_table()?;
        Ok(Self {
            config,
            table,
            evaluator: AchievementEvaluator::new(catalog),
        })
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    pub fn evaluator(&self) -> &AchievementEvaluator {
        &self.evaluator
    }

    /// Start a fresh learner.
    pub fn new_learner(&self, name: String) -> LearnerSnapshot {
        LearnerSnapshot::new(Character::new(name))
    }

    pub fn progress(&self, character: &Character) -> Result<LevelProgress> {
        self.table.progress(character.level, character.total_xp)
    }

    /// Grade one answer: award XP, climb the ladder, update counters, and
    /// unlock any achievements the new counters satisfy.
    pub fn answer_question(
        &self,
        snapshot: &LearnerSnapshot,
        answer: Answer,
        now: i64,
    ) -> Result<TutorOutcome> {
        let mut next = snapshot.clone();

        let streak = if answer.correct {
            next.counters.extend_streak(Streak::CorrectAnswers)
        } else {
            next.counters.reset_streak(Streak::CorrectAnswers);
            0
        };
        let xp_gained = xp_for_answer(
            &self.config.rewards,
            answer.difficulty,
            answer.correct,
            streak,
        );

        let character = &snapshot.character;
        let outcome = self
            .table
            .advance(character.level, character.total_xp, xp_gained)?;
        next.character = character.apply_advance(&outcome);

        next.counters.increment(Counter::QuestionsAnswered, 1);
        if answer.correct {
            next.counters.increment(Counter::CorrectAnswers, 1);
        }
        next.counters
            .raise_to(Counter::LevelReached, outcome.new_level as u64);

        let mut events = vec![TutorEvent::AnswerGraded {
            correct: answer.correct,
            xp_gained,
            streak,
        }];
        if outcome.leveled_up {
            tracing::info!(
                character = %character.id,
                level = outcome.new_level,
                points = outcome.stat_points_awarded,
                "level up"
            );
            events.push(TutorEvent::LeveledUp(LevelUpPayload::from(&outcome)));
        }

        self.unlock_pending(&mut next, now, &mut events);
        Ok(TutorOutcome {
            snapshot: next,
            events,
        })
    }

    /// Spend unspent stat points on one stat.
    pub fn spend_points(
        &self,
        snapshot: &LearnerSnapshot,
        stat_name: &str,
        points: u32,
        now: i64,
    ) -> Result<TutorOutcome> {
        let character = allocate(&snapshot.character, stat_name, points)?;

        let mut next = snapshot.clone();
        next.character = character;
        next.counters
            .increment(Counter::StatPointsSpent, points as u64);

        let mut events = Vec::new();
        if points > 0 {
            events.push(TutorEvent::StatPointsSpent {
                stat: stat_name.trim().to_ascii_lowercase(),
                points,
                remaining: next.character.unspent_stat_points,
            });
        }
        self.unlock_pending(&mut next, now, &mut events);
        Ok(TutorOutcome {
            snapshot: next,
            events,
        })
    }

    pub fn complete_quiz(&self, snapshot: &LearnerSnapshot, perfect: bool, now: i64) -> TutorOutcome {
        let mut next = snapshot.clone();
        next.counters.increment(Counter::QuizzesCompleted, 1);
        if perfect {
            next.counters.increment(Counter::PerfectQuizzes, 1);
        }

        let mut events = vec![TutorEvent::QuizCompleted { perfect }];
        self.unlock_pending(&mut next, now, &mut events);
        TutorOutcome {
            snapshot: next,
            events,
        }
    }

    /// Record the first activity of a new day. `consecutive` is true when
    /// the previous active day was yesterday.
    pub fn record_daily_login(
        &self,
        snapshot: &LearnerSnapshot,
        consecutive: bool,
        now: i64,
    ) -> TutorOutcome {
        let mut next = snapshot.clone();
        next.counters.increment(Counter::DaysActive, 1);
        if !consecutive {
            next.counters.reset_streak(Streak::DailyLogin);
        }
        next.counters.extend_streak(Streak::DailyLogin);

        let mut events = Vec::new();
        self.unlock_pending(&mut next, now, &mut events);
        TutorOutcome {
            snapshot: next,
            events,
        }
    }

    fn unlock_pending(&self, next: &mut LearnerSnapshot, now: i64, events: &mut Vec<TutorEvent>) {
        let previously = next.achievements.unlocked_ids();
        let pending = self.evaluator.evaluate(&next.counters, &previously);
        for id in next.achievements.record(pending, now) {
            let Some(def) = self.evaluator.catalog().get(&id) else {
                continue;
            };
            tracing::info!(
                character = %next.character.id,
                achievement = %id,
                "achievement unlocked"
            );
            events.push(TutorEvent::AchievementUnlocked {
                id,
                name: def.name.clone(),
                icon: def.icon.clone(),
            });
        }
    }
}
