//! Error types for the progression engine.

use thiserror::Error;

/// Result type alias for progression operations.
pub type Result<T> = std::result::Result<T, ProgressionError>;

/// Local, synchronous failures surfaced to the immediate caller.
///
/// None of these are retried: the engine performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// Level/XP inputs disagree with the threshold table.
    #[error("invalid progression state: {0}")]
    InvalidState(String),

    /// Attempted to spend more stat points than are available.
    #[error("insufficient stat points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u32, available: u32 },

    /// Stat name is not one of the six recognized stats.
    #[error("unknown stat: {0:?}")]
    InvalidStat(String),
}

/// Errors raised while loading or validating configuration data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Threshold table breaks ordering or starting-point rules.
    #[error("invalid threshold table: {0}")]
    InvalidTable(String),

    /// Achievement catalog has duplicate ids or empty composites.
    #[error("invalid achievement catalog: {0}")]
    InvalidCatalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_points_message() {
        let err = ProgressionError::InsufficientPoints {
            requested: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stat points: requested 5, available 2"
        );
    }

    #[test]
    fn test_invalid_stat_message_quotes_name() {
        let err = ProgressionError::InvalidStat("luck".to_string());
        assert_eq!(err.to_string(), "unknown stat: \"luck\"");
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
