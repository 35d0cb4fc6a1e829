//! Game settings and balance
//!
//! Every tunable the simulation reads lives here instead of being a
//! literal in the tick path. Defaults preserve the classic values, so a
//! `Config::default()` game behaves exactly like the reference balance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Position;

/// Rejected configuration values, fatal at game construction
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive, finite number of milliseconds (got {value})")]
    BadInterval { name: &'static str, value: f64 },
    #[error("pursuit_chance must be within [0, 1] (got {0})")]
    BadPursuitChance(f64),
    #[error("cell_size must be positive (got {0})")]
    BadCellSize(f32),
}

/// Game balance and display-mapping configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Milliseconds between committed player moves
    pub player_interval_ms: f64,
    /// Milliseconds between committed enemy moves
    pub enemy_interval_ms: f64,
    /// Points per collected dot
    pub dot_score: u32,
    /// Bonus added to the final score on victory
    pub victory_bonus: u32,
    /// Probability the enemy pursues instead of wandering, per eligible tick
    pub pursuit_chance: f64,
    /// Cell edge length in pixels (display mapping)
    pub cell_size: f32,
    /// Play-area padding in pixels (display mapping)
    pub cell_padding: f32,
    /// Player spawn cell
    pub player_start: Position,
    /// Enemy spawn cell
    pub enemy_start: Position,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_interval_ms: PLAYER_MOVE_INTERVAL_MS,
            enemy_interval_ms: ENEMY_MOVE_INTERVAL_MS,
            dot_score: DOT_SCORE,
            victory_bonus: VICTORY_BONUS,
            pursuit_chance: PURSUIT_CHANCE,
            cell_size: CELL_SIZE,
            cell_padding: CELL_PADDING,
            player_start: Position::new(1, 1),
            enemy_start: Position::new(13, 1),
        }
    }
}

impl Config {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("player_interval_ms", self.player_interval_ms),
            ("enemy_interval_ms", self.enemy_interval_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::BadInterval { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.pursuit_chance) {
            return Err(ConfigError::BadPursuitChance(self.pursuit_chance));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::BadCellSize(self.cell_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_balance() {
        let config = Config::default();
        assert_eq!(config.dot_score, 10);
        assert_eq!(config.victory_bonus, 100);
        assert_eq!(config.pursuit_chance, 0.3);
        assert_eq!(config.player_interval_ms, 200.0);
        assert_eq!(config.enemy_interval_ms, 800.0);
        assert_eq!(config.player_start, Position::new(1, 1));
        assert_eq!(config.enemy_start, Position::new(13, 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.player_interval_ms = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadInterval { .. })
        ));

        let mut config = Config::default();
        config.pursuit_chance = 1.5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BadPursuitChance(1.5))
        );

        let mut config = Config::default();
        config.cell_size = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::BadCellSize(-1.0)));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
