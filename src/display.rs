//! Display sink
//!
//! The narrow contract between the simulation and whatever draws it. The
//! engine pushes pixel coordinates, removal notifications and text at a
//! host-provided sink; it never knows how they are shown.

use glam::Vec2;

use crate::settings::Config;
use crate::sim::{Game, GameEvent, Position};

/// Host-implemented surface the engine reflects state onto
pub trait DisplaySink {
    /// Place the player marker at a pixel coordinate.
    fn place_player(&mut self, px: Vec2);
    /// Place the enemy marker; `visible` is the enemy's visibility flag.
    fn place_enemy(&mut self, px: Vec2, visible: bool);
    /// One-shot notification that the dot at `pos` should animate away.
    fn dot_collected(&mut self, pos: Position);
    /// Score / remaining-count line.
    fn set_status(&mut self, text: &str);
    /// Terminal message payload.
    fn show_end_message(&mut self, text: &str, victory: bool);
}

/// Map a grid cell to the pixel position of its marker:
/// `position * cell_size + padding`.
pub fn cell_to_pixel(pos: Position, config: &Config) -> Vec2 {
    Vec2::from(pos) * config.cell_size + Vec2::splat(config.cell_padding)
}

/// The running score line.
pub fn score_line(score: u32, remaining: usize) -> String {
    format!("Score: {score} | Dots remaining: {remaining}")
}

/// The terminal message payload text.
pub fn end_message(victory: bool, final_score: u32, new_record: bool) -> String {
    if victory {
        let record = if new_record { "\nNEW HIGH SCORE!" } else { "" };
        format!("VICTORY!\nScore: {final_score} points{record}\nAll dots collected!")
    } else {
        format!("GAME OVER\nFinal score: {final_score} points\nThe enemy caught you!")
    }
}

/// Reflect one tick's outcome onto the sink: reposition whoever moved,
/// animate collected dots, refresh the status line, and deliver the end
/// message when the run finished. `new_record` is whatever the host's
/// score store reported for this run (ignored until the run ends).
pub fn present(game: &Game, events: &[GameEvent], new_record: bool, sink: &mut dyn DisplaySink) {
    let config = game.config();
    for event in events {
        match *event {
            GameEvent::PlayerMoved(pos) => sink.place_player(cell_to_pixel(pos, config)),
            GameEvent::EnemyMoved(pos) => {
                sink.place_enemy(cell_to_pixel(pos, config), game.enemy().is_visible())
            }
            GameEvent::DotCollected { pos, .. } => sink.dot_collected(pos),
            GameEvent::GameEnded {
                victory,
                final_score,
            } => sink.show_end_message(&end_message(victory, final_score, new_record), victory),
        }
    }
    sink.set_status(&score_line(game.score(), game.remaining_dots()));
}

/// Initial placement: both markers and the status line, before any tick.
pub fn sync(game: &Game, sink: &mut dyn DisplaySink) {
    let config = game.config();
    sink.place_player(cell_to_pixel(game.player().position(), config));
    sink.place_enemy(
        cell_to_pixel(game.enemy().position(), config),
        game.enemy().is_visible(),
    );
    sink.set_status(&score_line(game.score(), game.remaining_dots()));
}
