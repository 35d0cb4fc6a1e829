//! Player controller
//!
//! Direction is driven by held-key state: four independent flags fed by the
//! host's input source as activate/release edges. Input handlers only set
//! these flags; position changes happen exclusively inside `update`.

use super::entity::Mover;
use super::grid::{DIRECTIONS, Direction, Maze, Position};

/// Held state of the four direction controls
#[derive(Debug, Clone, Copy, Default)]
struct Controls {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Controls {
    fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// The player-controlled token
#[derive(Debug, Clone)]
pub struct Player {
    mover: Mover,
    controls: Controls,
}

impl Player {
    pub fn new(start: Position, move_interval_ms: f64) -> Self {
        Self {
            mover: Mover::new(start, move_interval_ms),
            controls: Controls::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.mover.position()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.mover.direction()
    }

    /// Activate edge for a direction key. Sets the facing direction; a
    /// repeated activation while the key is already held is ignored.
    pub fn key_down(&mut self, dir: Direction) {
        if self.controls.get(dir) {
            return;
        }
        self.controls.set(dir, true);
        self.mover.set_direction(Some(dir));
    }

    /// Release edge for a direction key. Clears the facing direction only
    /// if it matches the released key, so releasing a non-active key while
    /// holding another never cancels motion.
    pub fn key_up(&mut self, dir: Direction) {
        self.controls.set(dir, false);
        if self.mover.direction() == Some(dir) {
            self.mover.set_direction(None);
        }
    }

    /// Advance the player. An invalid facing direction simply blocks
    /// movement; unlike the enemy there is no automatic re-selection.
    /// Returns whether a move was committed.
    pub fn update(&mut self, maze: &Maze, now_ms: f64) -> bool {
        self.mover.try_step(maze, now_ms)
    }

    /// True iff any control flag is held.
    pub fn is_moving(&self) -> bool {
        self.controls.any()
    }

    /// First held direction in fixed priority order (up, down, left,
    /// right), or `None`.
    pub fn active_direction(&self) -> Option<Direction> {
        DIRECTIONS.into_iter().find(|&dir| self.controls.get(dir))
    }

    /// Back to `start` with cleared controls, direction and move clock.
    pub fn reset(&mut self, start: Position) {
        self.mover.reset(start);
        self.controls = Controls::default();
    }
}
