use crate::core::constants::{NUM_STATS, STARTING_STAT_VALUE};
use crate::core::error::ProgressionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatName {
    Intelligence,
    Vitality,
    Wisdom,
    Charisma,
    Dexterity,
    Creativity,
}

impl StatName {
    pub fn all() -> [StatName; NUM_STATS] {
        [
            StatName::Intelligence,
            StatName::Vitality,
            StatName::Wisdom,
            StatName::Charisma,
            StatName::Dexterity,
            StatName::Creativity,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Intelligence => "intelligence",
            StatName::Vitality => "vitality",
            StatName::Wisdom => "wisdom",
            StatName::Charisma => "charisma",
            StatName::Dexterity => "dexterity",
            StatName::Creativity => "creativity",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatName::Intelligence => 0,
            StatName::Vitality => 1,
            StatName::Wisdom => 2,
            StatName::Charisma => 3,
            StatName::Dexterity => 4,
            StatName::Creativity => 5,
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatName {
    type Err = ProgressionError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StatName::all()
            .into_iter()
            .find(|stat| stat.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ProgressionError::InvalidStat(s.to_string()))
    }
}

/// Six stat values. Serialized as a name -> value map; stats missing from
/// a map are read as [`STARTING_STAT_VALUE`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "BTreeMap<StatName, u32>", from = "BTreeMap<StatName, u32>")]
pub struct Stats {
    values: [u32; NUM_STATS],
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            values: [STARTING_STAT_VALUE; NUM_STATS],
        }
    }

    pub fn get(&self, stat: StatName) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatName, value: u32) {
        self.values[stat.index()] = value;
    }

    /// Adds `points` to one stat. Returns `None`, leaving the value
    /// unchanged, if the stat would overflow.
    pub fn add(&mut self, stat: StatName, points: u32) -> Option<u32> {
        let value = self.values[stat.index()].checked_add(points)?;
        self.values[stat.index()] = value;
        Some(value)
    }

    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }

    /// Points placed on top of the starting values, summed over all stats.
    pub fn allocated(&self) -> i64 {
        self.total() as i64 - (STARTING_STAT_VALUE as i64 * NUM_STATS as i64)
    }
}

impl From<Stats> for BTreeMap<StatName, u32> {
    fn from(stats: Stats) -> Self {
        StatName::all()
            .into_iter()
            .map(|stat| (stat, stats.get(stat)))
            .collect()
    }
}

impl From<BTreeMap<StatName, u32>> for Stats {
    fn from(map: BTreeMap<StatName, u32>) -> Self {
        let mut stats = Stats::new();
        for (stat, value) in map {
            stats.set(stat, value);
        }
        stats
    }
}
