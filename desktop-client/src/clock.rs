use std::time::{Duration, Instant};

/// Frames far behind schedule drop the backlog instead of fast-forwarding.
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Turns wall-clock time between frames into a count of due game ticks.
pub struct FixedRateClock {
    interval: Duration,
    accumulated: Duration,
    last_frame: Option<Instant>,
    paused: bool,
}

impl FixedRateClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            last_frame: None,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.accumulated = Duration::ZERO;
    }

    /// The first call only starts the clock.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        let Some(last_frame) = self.last_frame.replace(now) else {
            return 0;
        };
        if self.paused {
            return 0;
        }

        self.accumulated += now.saturating_duration_since(last_frame);
        let mut ticks = 0;
        while self.accumulated >= self.interval && ticks < MAX_CATCH_UP_TICKS {
            self.accumulated -= self.interval;
            ticks += 1;
        }
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
        }
        ticks
    }

    pub fn until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn test_first_frame_starts_clock() {
        let mut clock = FixedRateClock::new(TICK);
        assert_eq!(clock.ticks_due(Instant::now()), 0);
    }

    #[test]
    fn test_ticks_accumulate_across_frames() {
        let mut clock = FixedRateClock::new(TICK);
        let start = Instant::now();
        clock.ticks_due(start);

        assert_eq!(clock.ticks_due(start + Duration::from_millis(60)), 0);
        assert_eq!(clock.ticks_due(start + Duration::from_millis(120)), 1);
        assert_eq!(clock.until_next_tick(), Duration::from_millis(80));
        assert_eq!(clock.ticks_due(start + Duration::from_millis(320)), 2);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = FixedRateClock::new(TICK);
        let start = Instant::now();
        clock.ticks_due(start);

        assert_eq!(clock.ticks_due(start + Duration::from_secs(10)), MAX_CATCH_UP_TICKS);
        assert_eq!(clock.until_next_tick(), TICK);
    }

    #[test]
    fn test_paused_clock_never_ticks() {
        let mut clock = FixedRateClock::new(TICK);
        let start = Instant::now();
        clock.ticks_due(start);
        clock.toggle_pause();

        assert_eq!(clock.ticks_due(start + Duration::from_secs(1)), 0);
        clock.toggle_pause();
        assert_eq!(clock.ticks_due(start + Duration::from_millis(1050)), 0);
        assert_eq!(clock.ticks_due(start + Duration::from_millis(1150)), 1);
    }
}
