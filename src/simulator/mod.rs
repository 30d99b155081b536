//! Learner simulator for balance analysis.
//!
//! Runs seeded simulated learners through [`crate::tutor::TutorEngine`] to
//! check how fast the XP curve and reward table move people up the ladder
//! and which achievements they reach.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{LearnerStats, SimReport};
pub use runner::run_simulation;
