//! Shared movable-entity contract
//!
//! Both the player and the enemy move the same way: a facing direction, a
//! per-entity rate gate, and a commit-only-onto-open-cells step. The two
//! timers are independent state; each entity is gated against the same
//! shared "now" within a tick but never resets the other's clock.

use super::grid::{Direction, Maze, Position};

/// Rate-limited, wall-respecting motion state
#[derive(Debug, Clone)]
pub struct Mover {
    position: Position,
    direction: Option<Direction>,
    last_move_ms: f64,
    move_interval_ms: f64,
}

impl Mover {
    /// A mover starts with no facing direction and a zeroed move clock,
    /// so the first eligible tick may move immediately.
    pub fn new(start: Position, move_interval_ms: f64) -> Self {
        Self {
            position: start,
            direction: None,
            last_move_ms: 0.0,
            move_interval_ms,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn set_direction(&mut self, dir: Option<Direction>) {
        self.direction = dir;
    }

    /// Minimum milliseconds between committed moves.
    pub fn move_interval_ms(&self) -> f64 {
        self.move_interval_ms
    }

    pub fn set_move_interval_ms(&mut self, interval_ms: f64) {
        self.move_interval_ms = interval_ms;
    }

    /// Whether enough time has elapsed since the last committed move.
    pub fn due(&self, now_ms: f64) -> bool {
        now_ms - self.last_move_ms >= self.move_interval_ms
    }

    /// Commit one step along the current facing direction if the rate gate
    /// is open and the destination is an open cell. Returns whether a move
    /// was committed; a blocked or absent direction is a no-op, not an
    /// error. Position and the move clock change only on a commit.
    pub fn try_step(&mut self, maze: &Maze, now_ms: f64) -> bool {
        let Some(dir) = self.direction else {
            return false;
        };
        if !self.due(now_ms) {
            return false;
        }
        if !maze.can_move(self.position, dir) {
            return false;
        }
        self.position = self.position.step(dir);
        self.last_move_ms = now_ms;
        true
    }

    /// Put the mover back at `start` with no facing direction and a zeroed
    /// clock (restart semantics).
    pub fn reset(&mut self, start: Position) {
        self.position = start;
        self.direction = None;
        self.last_move_ms = 0.0;
    }
}
