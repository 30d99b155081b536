//! Per-session device context.
//!
//! Computed once when a session starts and passed to whatever needs it.

use crate::device::{
    classify, config_for, AnimationConfig, DeviceSignals, HapticPattern, HapticsGate,
    PerformanceTier,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionContext {
    pub signals: DeviceSignals,
    pub tier: PerformanceTier,
    pub animation: AnimationConfig,
    pub haptics: HapticsGate,
}

impl SessionContext {
    pub fn start(signals: DeviceSignals, touch_capable: bool) -> Self {
        let tier = classify(&signals);
        tracing::info!(?tier, touch_capable, "session started");
        Self {
            signals,
            tier,
            animation: config_for(tier),
            haptics: HapticsGate::new(touch_capable),
        }
    }

    pub fn haptic(&self, pattern: HapticPattern) -> Option<&'static [u32]> {
        self.haptics.pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::NetworkClass;

    #[test]
    fn test_start_derives_tier_and_animation() {
        let ctx = SessionContext::start(
            DeviceSignals {
                memory_gb: Some(16.0),
                core_count: Some(12),
                network_class: Some(NetworkClass::G4),
            },
            true,
        );
        assert_eq!(ctx.tier, PerformanceTier::High);
        assert_eq!(ctx.animation, config_for(PerformanceTier::High));
        assert!(ctx.haptic(HapticPattern::Success).is_some());
    }

    #[test]
    fn test_desktop_without_signals() {
        let ctx = SessionContext::start(DeviceSignals::default(), false);
        assert_eq!(ctx.tier, PerformanceTier::Medium);
        assert_eq!(ctx.haptic(HapticPattern::Light), None);
    }
}
