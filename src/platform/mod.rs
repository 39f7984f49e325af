//! Platform abstraction layer
//!
//! Pieces of the host frame pump that need code on our side:
//! - Frame timestamps to clamped delta time
//! - FPS tracking
//! - Pointer coordinates to field coordinates

use crate::consts::{MAX_FRAME_DT, NOMINAL_FRAME_DT};

/// Turns frame timestamps (milliseconds) into per-frame delta time (seconds)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame. The first frame gets a nominal
    /// 60 Hz step; stalls (tab switch, debugger) are clamped.
    pub fn tick(&mut self, time_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => NOMINAL_FRAME_DT,
        };
        self.last_time = Some(time_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the last timestamp (after a pause, so resuming doesn't jump)
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

/// Rolling FPS over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp (ms) and return the current estimate
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % 60;

        // Oldest slot is the one we'll overwrite next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                self.fps = (59_000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Map a pointer x in client pixels onto the field's x range
pub fn pointer_to_field_x(client_x: f32, client_width: f32, field_width: f32) -> f32 {
    if client_width <= 0.0 {
        return field_width / 2.0;
    }
    client_x / client_width * field_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1000.0), NOMINAL_FRAME_DT);
        assert!((clock.tick(1016.0) - 0.016).abs() < 1e-6);
        // Stall is clamped
        assert_eq!(clock.tick(5000.0), MAX_FRAME_DT);
        // Clock going backwards never yields negative time
        assert_eq!(clock.tick(4000.0), 0.0);

        clock.reset();
        assert_eq!(clock.tick(9000.0), NOMINAL_FRAME_DT);
    }

    #[test]
    fn test_fps_counter_steady_60() {
        let mut fps = FpsCounter::new();
        let mut last = 0;
        for i in 1..=120 {
            last = fps.record(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(last, 60);
        assert_eq!(fps.fps(), 60);
    }

    #[test]
    fn test_fps_counter_needs_full_window() {
        let mut fps = FpsCounter::new();
        for i in 1..=30 {
            assert_eq!(fps.record(i as f64 * 16.0), 0);
        }
    }

    #[test]
    fn test_pointer_mapping() {
        assert_eq!(pointer_to_field_x(200.0, 400.0, 800.0), 400.0);
        assert_eq!(pointer_to_field_x(0.0, 1600.0, 800.0), 0.0);
        // Outside the canvas stays outside the field
        assert_eq!(pointer_to_field_x(-40.0, 800.0, 800.0), -40.0);
        assert_eq!(pointer_to_field_x(10.0, 0.0, 800.0), 400.0);
    }
}
