use std::time::{Duration, Instant};

/// Don't replay more than this many missed frames after a stall (e.g. a minimized window)
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Fixed-rate tick schedule
#[derive(Clone, Debug)]
pub struct FrameClock {
    period: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32, now: Instant) -> Self {
        let period = Duration::from_secs(1) / frames_per_second.max(1);
        Self {
            period,
            next_tick: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of tick boundaries passed since the last call
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next_tick {
            ticks += 1;
            self.next_tick += self.period;
            if ticks == MAX_CATCH_UP_TICKS && now >= self.next_tick {
                log::debug!("frame clock fell behind - skipping missed frames");
                self.next_tick = now + self.period;
                break;
            }
        }
        ticks
    }

    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rstest::rstest;

    use super::FrameClock;

    #[test]
    fn sixty_fps_period() {
        let clock = FrameClock::new(60, Instant::now());
        assert_eq!(clock.period(), Duration::from_nanos(16_666_666));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(9, 0)]
    #[case(10, 1)]
    #[case(19, 1)]
    #[case(30, 3)]
    #[case(49, 4)]
    #[case(1000, 5)]
    fn ticks_due_after(#[case] elapsed_ms: u64, #[case] expected: u32) {
        let start = Instant::now();
        let mut clock = FrameClock::new(100, start);
        assert_eq!(clock.due_ticks(start + Duration::from_millis(elapsed_ms)), expected);
    }

    #[test]
    fn ticks_are_consumed() {
        let start = Instant::now();
        let mut clock = FrameClock::new(100, start);
        let now = start + Duration::from_millis(25);

        assert_eq!(clock.due_ticks(now), 2);
        assert_eq!(clock.due_ticks(now), 0);
        assert_eq!(clock.until_next_tick(now), Duration::from_millis(5));
    }

    #[test]
    fn stall_does_not_fast_forward() {
        let start = Instant::now();
        let mut clock = FrameClock::new(100, start);
        let now = start + Duration::from_secs(10);

        assert_eq!(clock.due_ticks(now), 5);
        assert_eq!(clock.due_ticks(now), 0);
        assert_eq!(clock.until_next_tick(now), Duration::from_millis(10));
    }
}
