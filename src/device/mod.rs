//! Device tiering, animation budgets, and haptics.

pub mod animation;
pub mod classifier;
pub mod haptics;

pub use animation::{config_for, AnimationConfig};
pub use classifier::{classify, DeviceSignals, NetworkClass, PerformanceTier};
pub use haptics::{HapticPattern, HapticsGate};
