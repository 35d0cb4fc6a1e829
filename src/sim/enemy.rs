//! Adversary AI
//!
//! Three direction-selection policies layered on the shared mover:
//! uniformly random (construction/reset default), anti-reversal wandering,
//! and greedy pursuit of a target cell. On an eligible tick with a target
//! supplied, pursuit is used with a configured probability and
//! anti-reversal otherwise, which yields mostly-wandering,
//! occasionally-hunting behavior instead of a deterministic chase.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Mover;
use super::grid::{Direction, Maze, Position, distance};
use crate::consts::MIN_MOVE_INTERVAL_MS;

/// The pursuing adversary
#[derive(Debug, Clone)]
pub struct Enemy {
    mover: Mover,
    rng: Pcg32,
    target: Option<Position>,
    pursuit_chance: f64,
    visible: bool,
}

impl Enemy {
    /// Construct with a seeded RNG and an initial uniformly random facing
    /// direction.
    pub fn new(
        start: Position,
        move_interval_ms: f64,
        pursuit_chance: f64,
        seed: u64,
        maze: &Maze,
    ) -> Self {
        let mut enemy = Self {
            mover: Mover::new(start, move_interval_ms),
            rng: Pcg32::seed_from_u64(seed),
            target: None,
            pursuit_chance,
            visible: true,
        };
        enemy.choose_random_direction(maze);
        enemy
    }

    pub fn position(&self) -> Position {
        self.mover.position()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.mover.direction()
    }

    /// Current move interval in milliseconds.
    pub fn speed(&self) -> f64 {
        self.mover.move_interval_ms()
    }

    /// Change the move interval, clamped to the 100 ms floor.
    pub fn set_speed(&mut self, interval_ms: f64) {
        self.mover
            .set_move_interval_ms(interval_ms.max(MIN_MOVE_INTERVAL_MS));
    }

    /// Whether the current facing direction is presently valid.
    pub fn can_move(&self, maze: &Maze) -> bool {
        match self.mover.direction() {
            Some(dir) => maze.can_move(self.mover.position(), dir),
            None => false,
        }
    }

    pub fn set_target(&mut self, target: Position) {
        self.target = Some(target);
    }

    /// Re-run the anti-reversal policy immediately (external trigger).
    pub fn force_direction_change(&mut self, maze: &Maze) {
        self.choose_smart_direction(maze);
    }

    /// Visibility is consumed by the display layer, not simulation state.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Uniform choice among the validity set.
    fn choose_random_direction(&mut self, maze: &Maze) {
        let valid = maze.valid_directions(self.mover.position());
        if !valid.is_empty() {
            let idx = self.rng.random_range(0..valid.len());
            self.mover.set_direction(Some(valid[idx]));
        }
    }

    /// Anti-reversal: avoid the opposite of the current direction unless it
    /// is the only way out.
    fn choose_smart_direction(&mut self, maze: &Maze) {
        let valid = maze.valid_directions(self.mover.position());
        if valid.is_empty() {
            return;
        }

        let reverse = self.mover.direction().map(Direction::opposite);
        let mut candidates: Vec<Direction> = valid
            .iter()
            .copied()
            .filter(|&dir| Some(dir) != reverse)
            .collect();
        if candidates.is_empty() {
            candidates = valid;
        }

        let idx = self.rng.random_range(0..candidates.len());
        self.mover.set_direction(Some(candidates[idx]));
    }

    /// Greedy pursuit: among the validity set, pick the direction whose
    /// next cell minimizes Euclidean distance to the target. Ties break on
    /// enumeration order (first minimum wins). Falls back to anti-reversal
    /// with no target.
    fn choose_pursuit_direction(&mut self, maze: &Maze) {
        let Some(target) = self.target else {
            self.choose_smart_direction(maze);
            return;
        };

        let valid = maze.valid_directions(self.mover.position());
        if valid.is_empty() {
            return;
        }

        let mut best = valid[0];
        let mut shortest = f32::INFINITY;
        for dir in valid {
            let next = self.mover.position().step(dir);
            let dist = distance(next, target);
            if dist < shortest {
                shortest = dist;
                best = dir;
            }
        }
        self.mover.set_direction(Some(best));
    }

    /// Advance the enemy. On each eligible tick the policy is re-run: with
    /// a target supplied, pursuit with probability `pursuit_chance` and
    /// anti-reversal otherwise; with no target, always anti-reversal. If
    /// the chosen facing direction is no longer valid it is re-selected
    /// before the move attempt. Returns whether a move was committed.
    pub fn update(&mut self, maze: &Maze, now_ms: f64, target: Option<Position>) -> bool {
        if !self.mover.due(now_ms) {
            return false;
        }

        match target {
            Some(pos) => {
                self.set_target(pos);
                if self.rng.random::<f64>() < self.pursuit_chance {
                    self.choose_pursuit_direction(maze);
                } else {
                    self.choose_smart_direction(maze);
                }
            }
            None => self.choose_smart_direction(maze),
        }

        if !self.can_move(maze) {
            self.choose_smart_direction(maze);
        }

        let moved = self.mover.try_step(maze, now_ms);
        if moved {
            log::trace!(
                "enemy moved {:?} -> ({}, {})",
                self.mover.direction(),
                self.position().x,
                self.position().y
            );
        }
        moved
    }

    /// Back to `start` with a fresh random facing, cleared target and a
    /// zeroed move clock. The RNG stream is left alone.
    pub fn reset(&mut self, start: Position, maze: &Maze) {
        self.mover.reset(start);
        self.target = None;
        self.choose_random_direction(maze);
    }
}
