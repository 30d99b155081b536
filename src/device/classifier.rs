//! Device capability classification.
//!
//! Turns the coarse signals a browser exposes (device memory, logical core
//! count, effective network type) into a [`PerformanceTier`].

use crate::core::constants::{
    HIGH_TIER_MIN_CORES, HIGH_TIER_MIN_MEMORY_GB, LOW_TIER_MAX_CORES, LOW_TIER_MAX_MEMORY_GB,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Low,
    Medium,
    High,
}

/// Effective connection class, slowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NetworkClass {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    G2,
    #[serde(rename = "3g")]
    G3,
    #[serde(rename = "4g")]
    G4,
    #[serde(rename = "5g")]
    G5,
    #[serde(rename = "wifi")]
    Wifi,
    #[serde(rename = "ethernet")]
    Ethernet,
}

impl NetworkClass {
    /// Parses effective-type strings. Unknown strings yield `None` so they
    /// count as a missing signal.
    pub fn parse(s: &str) -> Option<NetworkClass> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => Some(NetworkClass::Slow2g),
            "2g" => Some(NetworkClass::G2),
            "3g" => Some(NetworkClass::G3),
            "4g" => Some(NetworkClass::G4),
            "5g" => Some(NetworkClass::G5),
            "wifi" => Some(NetworkClass::Wifi),
            "ethernet" => Some(NetworkClass::Ethernet),
            _ => None,
        }
    }

    pub fn is_slow(&self) -> bool {
        matches!(self, NetworkClass::Slow2g | NetworkClass::G2)
    }

    pub fn is_fast(&self) -> bool {
        *self >= NetworkClass::G4
    }
}

/// Raw signals; any may be unavailable on a given browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSignals {
    #[serde(default)]
    pub memory_gb: Option<f64>,
    #[serde(default)]
    pub core_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_network_class")]
    pub network_class: Option<NetworkClass>,
}

fn lenient_network_class<'de, D>(deserializer: D) -> Result<Option<NetworkClass>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(NetworkClass::parse))
}

/// Any one weak signal makes the device low tier; high tier needs all three
/// signals present and strong. Missing signals are neutral.
pub fn classify(signals: &DeviceSignals) -> PerformanceTier {
    let low_memory = signals.memory_gb.is_some_and(|m| m <= LOW_TIER_MAX_MEMORY_GB);
    let low_cores = signals.core_count.is_some_and(|c| c <= LOW_TIER_MAX_CORES);
    let slow_network = signals.network_class.is_some_and(|n| n.is_slow());

    if low_memory || low_cores || slow_network {
        return PerformanceTier::Low;
    }

    let high_memory = signals.memory_gb.is_some_and(|m| m >= HIGH_TIER_MIN_MEMORY_GB);
    let high_cores = signals.core_count.is_some_and(|c| c >= HIGH_TIER_MIN_CORES);
    let fast_network = signals.network_class.is_some_and(|n| n.is_fast());

    if high_memory && high_cores && fast_network {
        PerformanceTier::High
    } else {
        PerformanceTier::Medium
    }
}
