//! Per-frame simulation step
//!
//! One call advances the game by one presented frame: update, then
//! collision resolution in a fixed order. Drawing happens afterwards in the
//! host, from the resulting state.

use super::brick::HitAxis;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input sampled by the host for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer x in field coordinates (None when the pointer is unknown)
    pub pointer_x: Option<f32>,
    /// Pause toggle
    pub pause: bool,
    /// Start over with a fresh grid
    pub restart: bool,
}

impl FrameInput {
    /// Click or tap on the field: starts over once the round has ended
    pub fn tap(&mut self, phase: GamePhase) {
        if phase.is_over() {
            self.restart = true;
        }
    }
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) {
    if input.restart {
        state.restart();
        log::info!("Game restarted");
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    state.frame += 1;

    // Update
    if let Some(x) = input.pointer_x {
        state.paddle.update(x);
    }
    state.ball.update(dt);

    // Collision
    if let Some(hit) = state.bricks.test_and_resolve(&mut state.ball) {
        log::debug!("Brick {} hit ({:?})", hit.index, hit.axis);
        state.events.push(GameEvent::BrickHit {
            index: hit.index,
            axis: hit.axis,
        });
    }

    let walls = state.field.test_and_resolve(&mut state.ball);
    if walls.ceiling {
        state.events.push(GameEvent::WallBounce {
            axis: HitAxis::Vertical,
        });
    }
    if walls.side {
        state.events.push(GameEvent::WallBounce {
            axis: HitAxis::Horizontal,
        });
    }

    if let Some(offset) = state.paddle.test_and_resolve(&mut state.ball) {
        log::debug!("Paddle hit at offset {:.1}", offset);
        state.events.push(GameEvent::PaddleBounce { offset });
    }

    // End of round
    if state.bricks.is_cleared() {
        state.phase = GamePhase::Cleared;
        state.events.push(GameEvent::Cleared);
        log::info!("All bricks cleared after {} frames", state.frame);
    } else if state.field.is_out_of_bounds(&state.ball) {
        state.phase = GamePhase::BallLost;
        state.events.push(GameEvent::BallLost);
        log::info!(
            "Ball lost after {} frames, {} bricks left",
            state.frame,
            state.bricks.remaining()
        );
    }
}
