//! Game state and core simulation types

use serde::Serialize;

use super::ball::Ball;
use super::brick::{Bricks, HitAxis};
use super::field::Field;
use super::paddle::Paddle;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Ball dropped below the field; waits for restart
    BallLost,
    /// Every brick is gone; waits for restart
    Cleared,
}

impl GamePhase {
    /// Whether the simulation has stopped for good (until restart)
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::BallLost | GamePhase::Cleared)
    }
}

/// Something that happened during a frame, for the host to log or display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BrickHit { index: usize, axis: HitAxis },
    WallBounce { axis: HitAxis },
    PaddleBounce { offset: f32 },
    BallLost,
    Cleared,
    Paused,
    Resumed,
    Restarted,
}

/// Everything the frame loop owns
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub ball: Ball,
    pub bricks: Bricks,
    pub paddle: Paddle,
    pub phase: GamePhase,
    /// Simulated `Playing` frames since the last (re)start
    pub frame: u64,
    /// Events raised since the host last drained them
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Field::default())
    }
}

impl GameState {
    /// Fresh game on `field`: full grid, ball at spawn, paddle centred
    pub fn new(field: Field) -> Self {
        Self {
            field,
            ball: Ball::default(),
            bricks: Bricks::new(),
            paddle: Paddle::centered_at(field.width / 2.0),
            phase: GamePhase::Playing,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Rebuild everything except the field and pending events
    pub fn restart(&mut self) {
        let events = std::mem::take(&mut self.events);
        *self = Self::new(self.field);
        self.events = events;
        self.events.push(GameEvent::Restarted);
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bricks.remaining(), 100);
        assert_eq!(state.paddle.bounds.center().x, 400.0);
        assert_eq!(state.frame, 0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_restart_keeps_field_and_events() {
        let mut state = GameState::new(Field::new(640.0, 480.0));
        state.phase = GamePhase::BallLost;
        state.frame = 42;
        state.events.push(GameEvent::BallLost);
        state.bricks.get_mut(0).unwrap().life = 0;

        state.restart();
        assert_eq!(state.field, Field::new(640.0, 480.0));
        assert_eq!(state.paddle.bounds.center().x, 320.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.frame, 0);
        assert_eq!(state.bricks.remaining(), 100);
        assert_eq!(state.drain_events(), vec![GameEvent::BallLost, GameEvent::Restarted]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_phase_is_over() {
        assert!(!GamePhase::Playing.is_over());
        assert!(!GamePhase::Paused.is_over());
        assert!(GamePhase::BallLost.is_over());
        assert!(GamePhase::Cleared.is_over());
    }
}
