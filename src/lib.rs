//! Quest Tutor - progression engine for an RPG-style learning app.
//!
//! Levels, stat points, achievements, and device-tiered animation settings
//! for a browser tutor. Everything here is a pure transformation over
//! learner snapshots; rendering and network I/O live in the host app.

pub mod achievements;
pub mod character;
pub mod core;
pub mod device;
pub mod events;
pub mod progression;
pub mod session;
pub mod simulator;
pub mod snapshot;
pub mod store;
pub mod tutor;

pub use achievements::{AchievementEvaluator, AchievementId, AchievementLedger, Counter, Counters};
pub use character::{allocate, Character, StatName};
pub use self::core::{ConfigError, ProgressionError, TutorConfig};
pub use device::{classify, config_for, AnimationConfig, DeviceSignals, PerformanceTier};
pub use events::TutorEvent;
pub use progression::{AdvanceOutcome, ThresholdTable};
pub use session::SessionContext;
pub use snapshot::LearnerSnapshot;
pub use store::{JsonFileStore, SnapshotStore};
pub use tutor::{Answer, TutorEngine, TutorOutcome};
