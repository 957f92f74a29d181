/// Monotonic frame clock
///
/// Every timer in the game is a millisecond timestamp compared against the
/// value sampled once at the top of a frame, so the whole update pass sees a
/// single consistent `now`.
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Milliseconds since the clock started
pub type Millis = u64;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Source of monotonic millisecond timestamps
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall clock for the running game, also tracks frame rate
pub struct GameClock {
    /// Time when the clock started
    start_time: Instant,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the timestamp the frame runs at
    pub fn begin_frame(&mut self) -> Millis {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.now_ms()
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames started
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Clock for GameClock {
    fn now_ms(&self) -> Millis {
        Instant::now().duration_since(self.start_time).as_millis() as Millis
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand-driven clock for deterministic simulations
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: Millis) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = GameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_frame_counting() {
        let mut clock = GameClock::new();
        clock.begin_frame();
        assert_eq!(clock.frame_count(), 1);
        clock.begin_frame();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_now_is_monotonic() {
        let mut clock = GameClock::new();
        let first = clock.begin_frame();
        thread::sleep(Duration::from_millis(10));
        let second = clock.begin_frame();
        assert!(second >= first + 10);
    }

    #[test]
    fn test_fps_updates_every_ten_frames() {
        let mut clock = GameClock::new();
        for _ in 0..10 {
            thread::sleep(Duration::from_millis(1));
            clock.begin_frame();
        }
        assert!(clock.fps() > 0.0);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        clock.advance(16);
        assert_eq!(clock.now_ms(), 116);
        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }
}
