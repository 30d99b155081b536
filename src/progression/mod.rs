//! XP ladder and answer rewards.

pub mod ladder;
pub mod rewards;

pub use ladder::{xp_for_next_level, AdvanceOutcome, LevelProgress, LevelThreshold, ThresholdTable};
pub use rewards::{xp_for_answer, Difficulty};
