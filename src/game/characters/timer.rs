// Timestamp timers for cooldowns and gates

use crate::engine::clock::Millis;

/// Time of the last triggering event, if the timer is running.
///
/// A timer is pure data: nothing fires on its own. The owner asks
/// `has_elapsed(now, duration)` once per frame and stops it when done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    started_at: Option<Millis>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Millis) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    /// Time since start, `None` while stopped
    pub fn elapsed(&self, now: Millis) -> Option<Millis> {
        self.started_at.map(|start| now.saturating_sub(start))
    }

    /// Running and at least `duration` old
    pub fn has_elapsed(&self, now: Millis, duration: Millis) -> bool {
        self.elapsed(now).is_some_and(|elapsed| elapsed >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_elapses() {
        let timer = Timer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(1_000), None);
        assert!(!timer.has_elapsed(1_000, 0));
    }

    #[test]
    fn test_elapses_at_exact_duration() {
        let mut timer = Timer::new();
        timer.start(100);
        assert!(!timer.has_elapsed(299, 200));
        assert!(timer.has_elapsed(300, 200));
        assert_eq!(timer.elapsed(350), Some(250));
    }

    #[test]
    fn test_restart_and_stop() {
        let mut timer = Timer::new();
        timer.start(0);
        timer.start(500);
        assert_eq!(timer.started_at(), Some(500));
        assert!(!timer.has_elapsed(600, 200));

        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_clock_behind_start_counts_as_zero() {
        let mut timer = Timer::new();
        timer.start(1_000);
        assert_eq!(timer.elapsed(900), Some(0));
    }
}
