// XP and leveling
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;
pub const MAX_LEVEL: u32 = 100;
/// Upper bound for a configured curve's max level.
pub const MAX_CONFIGURABLE_LEVEL: u32 = MAX_LEVEL * 10;
pub const LEVEL_UP_STAT_POINTS: u32 = 3;

// Character stats
pub const NUM_STATS: usize = 6;
pub const STARTING_STAT_VALUE: u32 = 1;

// Answer rewards
pub const XP_CORRECT_EASY: u64 = 10;
pub const XP_CORRECT_MEDIUM: u64 = 20;
pub const XP_CORRECT_HARD: u64 = 35;
pub const XP_PARTICIPATION: u64 = 2;
pub const STREAK_BONUS_AFTER: u32 = 3;
pub const STREAK_BONUS_XP: u64 = 5;

// Device classification
pub const LOW_TIER_MAX_MEMORY_GB: f64 = 2.0;
pub const LOW_TIER_MAX_CORES: u32 = 2;
pub const HIGH_TIER_MIN_MEMORY_GB: f64 = 8.0;
pub const HIGH_TIER_MIN_CORES: u32 = 8;

// Persistence
pub const SAVE_DIR_NAME: &str = ".quest_tutor";
pub const SNAPSHOT_FILE_VERSION: u32 = 1;
