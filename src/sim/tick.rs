//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::resolve::resolve_tick;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle left (held)
    pub move_left: bool,
    /// Paddle right (held)
    pub move_right: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start a fresh round (from any phase)
    pub restart: bool,
}

/// Advance the game state by one tick
///
/// Returns what happened, in order, for the presentation layer.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.restart();
        log::info!("New round started");
        events.push(GameEvent::Restarted);
        return events;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::info!("Paused at tick {}", state.time_ticks);
                events.push(GameEvent::Paused);
                return events;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::info!("Resumed at tick {}", state.time_ticks);
                events.push(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    // Menu, paused, and finished rounds don't simulate
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    if input.move_left {
        state.paddle.move_left();
    }
    if input.move_right {
        state.paddle.move_right(state.config.canvas_width);
    }

    state.ball.advance();

    let bounds = state.wall_bounds();
    let outcome = resolve_tick(
        &mut state.ball,
        &state.paddle.rect,
        bounds,
        &mut state.bricks,
    );

    if let Some(index) = outcome.destroyed_obstacle_index {
        state.score += u64::from(outcome.score_delta);
        events.push(GameEvent::BrickDestroyed {
            index,
            score: state.score,
        });
    }

    if outcome.is_win() {
        state.phase = GamePhase::Win;
        log::info!("All bricks cleared! Final score {}", state.score);
        events.push(GameEvent::Won { score: state.score });
    } else if outcome.hit_bottom_wall {
        lose_life(state, &mut events);
    }

    events
}

/// Ball went out the bottom: respawn it, or end the round on the last life
fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", state.score);
        events.push(GameEvent::LifeLost { lives_left: 0 });
        events.push(GameEvent::GameOver { score: state.score });
    } else {
        state.ball = GameState::spawn_ball(&state.config);
        log::info!("Life lost, {} remaining", state.lives);
        events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
    }
}
