//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestamps are passed in, never read from a clock
//! - Seeded RNG only
//! - Stable direction enumeration order for tie-breaking
//! - No rendering or platform dependencies

pub mod enemy;
pub mod entity;
pub mod game;
pub mod grid;
pub mod player;
pub mod state;

pub use enemy::Enemy;
pub use entity::Mover;
pub use game::{Game, GameError};
pub use grid::{DEFAULT_LAYOUT, Direction, LayoutError, Maze, Position, distance, entities_collide};
pub use player::Player;
pub use state::{GameEvent, GameState};
