//! Game state and tick events
//!
//! `GameState` is replaced wholesale on every transition (start, collision,
//! win, restart), never mutated field-by-field, so transitions stay atomic
//! and snapshots are cheap to take in tests.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Centralized game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Accumulated score (victory bonus included once the game is won)
    pub score: u32,
    /// Number of dots the maze was seeded with
    pub total_dots: usize,
    /// Terminal flag; one-way within a run
    pub game_over: bool,
    /// Meaningful only when `game_over` is true
    pub victory: bool,
    /// Whether the tick loop should be scheduled
    pub is_running: bool,
}

impl GameState {
    /// Fresh state for a maze holding `total_dots` pickups.
    pub fn new(total_dots: usize) -> Self {
        Self {
            score: 0,
            total_dots,
            game_over: false,
            victory: false,
            is_running: false,
        }
    }
}

/// One tick's worth of observable effects, for the host to drive display
/// and sound without the engine knowing about either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player committed a move this tick
    PlayerMoved(Position),
    /// The enemy committed a move this tick
    EnemyMoved(Position),
    /// The player picked up the dot at `pos`
    DotCollected {
        pos: Position,
        score: u32,
        remaining: usize,
    },
    /// Terminal transition; `final_score` includes the victory bonus
    GameEnded { victory: bool, final_score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(74);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_dots, 74);
        assert!(!state.game_over);
        assert!(!state.victory);
        assert!(!state.is_running);
    }
}
