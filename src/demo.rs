//! Headless autopilot demo
//!
//! Drives the game without a window: an autopilot stands in for the pointer,
//! the frame is drawn into a `DrawList` (no GPU), and events are tallied.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::NOMINAL_FRAME_DT;
use crate::renderer::{DrawList, draw_game};
use crate::settings::Settings;
use crate::sim::{FrameInput, GameEvent, GamePhase, GameState, tick};

/// Largest aim offset from the ball, in pixels (paddle half-width is 30)
const MAX_AIM_OFFSET: f32 = 24.0;

/// Pointer stand-in that follows the ball with a random aim offset.
/// A new offset is rolled after every paddle bounce so the rallies vary.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    aim_offset: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        let mut autopilot = Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_offset: 0.0,
        };
        autopilot.reroll();
        autopilot
    }

    fn reroll(&mut self) {
        self.aim_offset = self.rng.random_range(-MAX_AIM_OFFSET..=MAX_AIM_OFFSET);
    }

    pub fn aim_offset(&self) -> f32 {
        self.aim_offset
    }

    /// Pointer x for the coming frame
    pub fn pointer_x(&self, state: &GameState) -> f32 {
        state.ball.pos().x - self.aim_offset
    }

    /// React to the previous frame's events
    pub fn observe(&mut self, events: &[GameEvent]) {
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::PaddleBounce { .. }))
        {
            self.reroll();
        }
    }
}

/// Tally of a demo run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoSummary {
    pub frames: u64,
    pub rounds: u32,
    pub bricks_hit: u32,
    pub paddle_bounces: u32,
    pub wall_bounces: u32,
    pub balls_lost: u32,
    pub clears: u32,
    pub bricks_left: usize,
    pub final_phase: Option<GamePhase>,
    pub vertices_last_frame: usize,
}

/// Run `frames` frames at 60 Hz, restarting after each finished round
pub fn run(frames: u64, seed: u64, settings: &Settings) -> DemoSummary {
    let mut state = GameState::default();
    let mut autopilot = Autopilot::new(seed);
    let mut list = DrawList::new();
    let mut summary = DemoSummary {
        rounds: 1,
        ..Default::default()
    };
    let mut restart = false;

    for _ in 0..frames {
        let input = FrameInput {
            pointer_x: Some(autopilot.pointer_x(&state)),
            restart,
            ..Default::default()
        };
        if restart {
            summary.rounds += 1;
        }
        restart = false;

        tick(&mut state, &input, NOMINAL_FRAME_DT);
        draw_game(&state, settings, &mut list);
        summary.frames += 1;

        let events = state.drain_events();
        for event in &events {
            match event {
                GameEvent::BrickHit { .. } => summary.bricks_hit += 1,
                GameEvent::PaddleBounce { .. } => summary.paddle_bounces += 1,
                GameEvent::WallBounce { .. } => summary.wall_bounces += 1,
                GameEvent::BallLost => summary.balls_lost += 1,
                GameEvent::Cleared => summary.clears += 1,
                _ => {}
            }
            log::debug!("frame {}: {:?}", state.frame, event);
        }
        autopilot.observe(&events);

        if state.phase.is_over() {
            log::info!(
                "Round {} over ({:?}), {} bricks left",
                summary.rounds,
                state.phase,
                state.bricks.remaining()
            );
            restart = true;
        }
    }

    summary.bricks_left = state.bricks.remaining();
    summary.final_phase = Some(state.phase);
    summary.vertices_last_frame = list.vertices().len();
    summary
}
