//! # Gameplay Configuration
//!
//! Session tuning loaded once at startup. Every field defaults to the
//! compiled baseline in [`crate::constants`], so an empty TOML document is a
//! valid configuration and partial documents only override what they name.

use serde::Deserialize;
use thiserror::Error;

use crate::constants;

/// Errors raised while loading or validating a gameplay configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid gameplay config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A parsed field failed validation.
    #[error("invalid gameplay config field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete tuning for one play session.
///
/// Construct with [`Default`] for the shipped balance, or load overrides
/// with [`GameplayConfig::from_toml_str`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameplayConfig {
    /// Number of slots on the workshop table.
    pub table_capacity: usize,
    /// Capacity of the producer hand-off channel.
    pub handoff_capacity: usize,
    /// Base production interval per conveyor, in milliseconds. One conveyor
    /// is spawned per entry.
    pub conveyor_intervals_ms: Vec<u64>,
    /// Multiplier applied to producer intervals on level-up.
    pub production_accel_factor: f64,
    /// Floor for the production interval, in milliseconds.
    pub min_production_interval_ms: u64,
    /// Points per collected gift.
    pub score_per_gift: u32,
    /// Penalty weight per lost gift.
    pub penalty_per_lost_gift: u32,
    /// Score that wins the session.
    pub win_score: u32,
    /// First level-up threshold.
    pub first_level_up_score: u32,
    /// Threshold advance per level-up.
    pub level_up_score_step: u32,
    /// Penalty-to-score multiple that triggers defeat.
    pub loss_penalty_multiplier: u32,
    /// Gift fall speed at level 1, in pixels per frame.
    pub base_fall_speed: f32,
    /// Fall speed gained per level.
    pub fall_speed_increment: f32,
    /// Visual spawn interval at level 1, in milliseconds.
    pub base_spawn_interval_ms: f64,
    /// Multiplier applied to the spawn interval on level-up.
    pub spawn_interval_factor: f64,
    /// Floor for the spawn interval, in milliseconds.
    pub min_spawn_interval_ms: f64,
    /// Gifts the player can carry at session start.
    pub base_carry_capacity: usize,
    /// Carry capacity gained per level-up.
    pub carry_capacity_step: usize,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            table_capacity: constants::TABLE_CAPACITY,
            handoff_capacity: constants::HANDOFF_CAPACITY,
            conveyor_intervals_ms: constants::CONVEYOR_BASE_INTERVALS_MS.to_vec(),
            production_accel_factor: constants::PRODUCTION_ACCEL_FACTOR,
            min_production_interval_ms: constants::MIN_PRODUCTION_INTERVAL_MS,
            score_per_gift: constants::SCORE_PER_GIFT,
            penalty_per_lost_gift: constants::PENALTY_PER_LOST_GIFT,
            win_score: constants::WIN_SCORE,
            first_level_up_score: constants::FIRST_LEVEL_UP_SCORE,
            level_up_score_step: constants::LEVEL_UP_SCORE_STEP,
            loss_penalty_multiplier: constants::LOSS_PENALTY_MULTIPLIER,
            base_fall_speed: constants::BASE_FALL_SPEED,
            fall_speed_increment: constants::FALL_SPEED_INCREMENT,
            base_spawn_interval_ms: constants::BASE_SPAWN_INTERVAL_MS,
            spawn_interval_factor: constants::SPAWN_INTERVAL_FACTOR,
            min_spawn_interval_ms: constants::MIN_SPAWN_INTERVAL_MS,
            base_carry_capacity: constants::BASE_CARRY_CAPACITY,
            carry_capacity_step: constants::CARRY_CAPACITY_STEP,
        }
    }
}

impl GameplayConfig {
    /// Parses a configuration from a TOML document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields,
    /// and [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the mechanics cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.table_capacity == 0 {
            return Err(invalid("table_capacity", "must be at least 1"));
        }
        if self.handoff_capacity == 0 {
            return Err(invalid("handoff_capacity", "must be at least 1"));
        }
        if self.conveyor_intervals_ms.is_empty() {
            return Err(invalid(
                "conveyor_intervals_ms",
                "at least one conveyor is required",
            ));
        }
        if self.conveyor_intervals_ms.contains(&0) {
            return Err(invalid(
                "conveyor_intervals_ms",
                "intervals must be non-zero",
            ));
        }
        if !(self.production_accel_factor > 0.0 && self.production_accel_factor < 1.0) {
            return Err(invalid(
                "production_accel_factor",
                "must be strictly between 0 and 1",
            ));
        }
        if self.min_production_interval_ms == 0 {
            return Err(invalid("min_production_interval_ms", "must be non-zero"));
        }
        if !(self.spawn_interval_factor > 0.0 && self.spawn_interval_factor < 1.0) {
            return Err(invalid(
                "spawn_interval_factor",
                "must be strictly between 0 and 1",
            ));
        }
        if self.min_spawn_interval_ms > self.base_spawn_interval_ms {
            return Err(invalid(
                "min_spawn_interval_ms",
                "floor cannot exceed the base spawn interval",
            ));
        }
        if self.win_score == 0 {
            return Err(invalid("win_score", "must be non-zero"));
        }
        if self.loss_penalty_multiplier == 0 {
            return Err(invalid("loss_penalty_multiplier", "must be non-zero"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameplayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.table_capacity, 3);
        assert_eq!(config.win_score, 300);
        assert_eq!(config.conveyor_intervals_ms, vec![4_000, 3_500, 3_000]);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GameplayConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameplayConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = GameplayConfig::from_toml_str(
            r#"
            table_capacity = 5
            conveyor_intervals_ms = [1000, 2000]
            "#,
        )
        .unwrap();
        assert_eq!(config.table_capacity, 5);
        assert_eq!(config.conveyor_intervals_ms, vec![1_000, 2_000]);
        // Untouched fields keep the compiled baseline.
        assert_eq!(config.win_score, 300);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = GameplayConfig::from_toml_str("tabel_capacity = 5");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = GameplayConfig::from_toml_str("table_capacity = 0");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidField {
                field: "table_capacity",
                ..
            })
        ));
    }

    #[test]
    fn test_accel_factor_must_shrink_intervals() {
        let result = GameplayConfig::from_toml_str("production_accel_factor = 1.5");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidField {
                field: "production_accel_factor",
                ..
            })
        ));
    }

    #[test]
    fn test_no_conveyors_rejected() {
        let result = GameplayConfig::from_toml_str("conveyor_intervals_ms = []");
        assert!(result.is_err());
    }
}
