//! Named vibration patterns for touch devices.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticPattern {
    Light,
    Medium,
    Heavy,
    Success,
    Error,
    Warning,
}

impl HapticPattern {
    /// Alternating vibrate/pause durations in milliseconds.
    pub fn pulses(&self) -> &'static [u32] {
        match self {
            HapticPattern::Light => &[10],
            HapticPattern::Medium => &[20],
            HapticPattern::Heavy => &[30],
            HapticPattern::Success => &[10, 50, 10],
            HapticPattern::Error => &[50, 100, 50],
            HapticPattern::Warning => &[30, 50, 30],
        }
    }
}

/// Decides whether patterns are played at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HapticsGate {
    pub touch_capable: bool,
}

impl HapticsGate {
    pub fn new(touch_capable: bool) -> Self {
        Self { touch_capable }
    }

    /// The pulse sequence to play, or `None` on devices without touch.
    pub fn pattern(&self, pattern: HapticPattern) -> Option<&'static [u32]> {
        self.touch_capable.then(|| pattern.pulses())
    }
}
