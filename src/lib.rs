//! Grid Chase - a grid-based maze chase game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, entities, adversary AI, game state)
//! - `display`: Narrow sink the host implements to reflect state on screen
//! - `highscores`: High score persistence collaborator
//! - `settings`: Data-driven game balance
//!
//! The engine has no process surface of its own: a host drives it by
//! feeding monotonic millisecond timestamps into [`sim::Game::tick`] and
//! consuming the emitted events.

pub mod display;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::{ScoreError, ScoreStore};
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    /// Default maze width in cells
    pub const GRID_WIDTH: u32 = 15;
    /// Default maze height in cells
    pub const GRID_HEIGHT: u32 = 10;

    /// Cell edge length in pixels (display mapping)
    pub const CELL_SIZE: f32 = 40.0;
    /// Play-area padding in pixels (display mapping)
    pub const CELL_PADDING: f32 = 20.0;

    /// Points awarded per collected dot
    pub const DOT_SCORE: u32 = 10;
    /// Bonus applied to the final score on victory
    pub const VICTORY_BONUS: u32 = 100;

    /// Milliseconds between committed player moves
    pub const PLAYER_MOVE_INTERVAL_MS: f64 = 200.0;
    /// Milliseconds between committed enemy moves
    pub const ENEMY_MOVE_INTERVAL_MS: f64 = 800.0;
    /// Hard floor for the enemy move interval (set_speed clamps to this)
    pub const MIN_MOVE_INTERVAL_MS: f64 = 100.0;

    /// Probability the enemy hunts the player on an eligible tick,
    /// as opposed to wandering with the anti-reversal policy
    pub const PURSUIT_CHANCE: f64 = 0.3;
}
