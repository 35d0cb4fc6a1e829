//! Game orchestrator
//!
//! Owns the maze, the dot set, the score and the terminal state machine:
//! NotRunning -> Running -> Lost | Won, with restart looping back to
//! NotRunning. One call to [`Game::tick`] is one simulation step; the host
//! schedules ticks while [`Game::is_running`] holds and stops once the
//! state turns terminal.

use std::collections::HashSet;

use thiserror::Error;

use super::enemy::Enemy;
use super::grid::{Direction, LayoutError, Maze, Position, entities_collide};
use super::player::Player;
use super::state::{GameEvent, GameState};
use crate::settings::{Config, ConfigError};

/// Fatal setup failures. Nothing is partially initialized on error.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("{entity} start ({}, {}) is not an open cell", pos.x, pos.y)]
    BlockedStart { entity: &'static str, pos: Position },
}

/// The simulation core: grid, entities, pickups, score and state machine
#[derive(Debug)]
pub struct Game {
    config: Config,
    maze: Maze,
    /// Cells still holding a pickup; its size is the authoritative
    /// remaining count
    dots: HashSet<Position>,
    /// Seeded dot set, kept for restart
    initial_dots: HashSet<Position>,
    state: GameState,
    player: Player,
    enemy: Enemy,
}

impl Game {
    /// Build a game over the classic 15x10 maze.
    pub fn new(config: Config, seed: u64) -> Result<Self, GameError> {
        Self::with_layout(config, &super::grid::DEFAULT_LAYOUT, seed)
    }

    /// Build a game over a custom layout. Fails if the configuration is
    /// invalid, the layout is unusable, or either start cell is blocked.
    pub fn with_layout(config: Config, layout: &[&str], seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let (maze, dots) = Maze::parse(layout)?;

        for (entity, pos) in [("player", config.player_start), ("enemy", config.enemy_start)] {
            if !maze.is_open(pos) {
                return Err(GameError::BlockedStart { entity, pos });
            }
        }

        let player = Player::new(config.player_start, config.player_interval_ms);
        let enemy = Enemy::new(
            config.enemy_start,
            config.enemy_interval_ms,
            config.pursuit_chance,
            seed,
            &maze,
        );
        let state = GameState::new(dots.len());

        log::info!(
            "game ready: {}x{} maze, {} dots, seed {}",
            maze.width(),
            maze.height(),
            dots.len(),
            seed
        );

        Ok(Self {
            config,
            maze,
            initial_dots: dots.clone(),
            dots,
            state,
            player,
            enemy,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Snapshot of the whole game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn remaining_dots(&self) -> usize {
        self.dots.len()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Begin a run. No-op while running; a finished run must be restarted
    /// first.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        if self.state.game_over {
            log::warn!("start ignored: game is over, restart first");
            return;
        }
        self.state = GameState {
            score: 0,
            total_dots: self.state.total_dots,
            game_over: false,
            victory: false,
            is_running: true,
        };
        log::info!("game started");
    }

    /// Forwarded input edges (the input source's narrow contract).
    pub fn key_down(&mut self, dir: Direction) {
        self.player.key_down(dir);
    }

    pub fn key_up(&mut self, dir: Direction) {
        self.player.key_up(dir);
    }

    /// Change the enemy move interval (clamped to the engine floor).
    pub fn set_enemy_speed(&mut self, interval_ms: f64) {
        self.enemy.set_speed(interval_ms);
    }

    /// Make the enemy re-pick its direction immediately.
    pub fn force_enemy_direction_change(&mut self) {
        self.enemy.force_direction_change(&self.maze);
    }

    /// Advance the simulation one step at `now_ms` (monotonic). Both
    /// entities are measured against the same "now"; their move clocks
    /// stay independent. Returns the tick's observable effects.
    pub fn tick(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.state.is_running || self.state.game_over {
            return events;
        }

        if self.player.update(&self.maze, now_ms) {
            events.push(GameEvent::PlayerMoved(self.player.position()));
        }
        if self
            .enemy
            .update(&self.maze, now_ms, Some(self.player.position()))
        {
            events.push(GameEvent::EnemyMoved(self.enemy.position()));
        }

        // Losing beats collecting: the catch check runs before the pickup
        // scan, any tick the positions coincide
        if entities_collide(self.player.position(), self.enemy.position()) {
            self.end(false, &mut events);
            return events;
        }

        let pos = self.player.position();
        if self.dots.remove(&pos) {
            let score = self.state.score + self.config.dot_score;
            self.state = GameState { score, ..self.state };
            events.push(GameEvent::DotCollected {
                pos,
                score,
                remaining: self.dots.len(),
            });
        }

        if self.dots.is_empty() {
            self.enemy.hide();
            self.end(true, &mut events);
        }

        events
    }

    /// One-way, idempotent terminal transition. Applies the victory bonus
    /// on a win and stops the tick loop.
    fn end(&mut self, victory: bool, events: &mut Vec<GameEvent>) {
        if self.state.game_over {
            return;
        }
        let final_score = if victory {
            self.state.score + self.config.victory_bonus
        } else {
            self.state.score
        };
        self.state = GameState {
            score: final_score,
            total_dots: self.state.total_dots,
            game_over: true,
            victory,
            is_running: false,
        };
        events.push(GameEvent::GameEnded {
            victory,
            final_score,
        });
        log::info!(
            "game over: {} with {} points",
            if victory { "victory" } else { "defeat" },
            final_score
        );
    }

    /// Rebuild the dot set and reset both entities to their start cells,
    /// keeping the wall geometry. Leaves the game in NotRunning.
    pub fn restart(&mut self) {
        self.dots = self.initial_dots.clone();
        self.state = GameState::new(self.initial_dots.len());
        self.player.reset(self.config.player_start);
        self.enemy.reset(self.config.enemy_start, &self.maze);
        self.enemy.show();
        log::info!("game reset: {} dots restored", self.dots.len());
    }
}
