use super::classifier::PerformanceTier;
use serde::{Deserialize, Serialize};

/// Visual effects budget handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub enable_particles: bool,
    pub enable_blur: bool,
    pub enable_shadows: bool,
    /// Scales every animation duration; below 1.0 is snappier.
    pub duration_multiplier: f64,
    /// Delay between staggered children, in milliseconds.
    pub stagger_delay_ms: u32,
}

pub fn config_for(tier: PerformanceTier) -> AnimationConfig {
    match tier {
        PerformanceTier::Low => AnimationConfig {
            enable_particles: false,
            enable_blur: false,
            enable_shadows: false,
            duration_multiplier: 0.5,
            stagger_delay_ms: 0,
        },
        PerformanceTier::Medium => AnimationConfig {
            enable_particles: false,
            enable_blur: true,
            enable_shadows: true,
            duration_multiplier: 0.8,
            stagger_delay_ms: 50,
        },
        PerformanceTier::High => AnimationConfig {
            enable_particles: true,
            enable_blur: true,
            enable_shadows: true,
            duration_multiplier: 1.0,
            stagger_delay_ms: 100,
        },
    }
}
