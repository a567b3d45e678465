use std::time::Duration;

/// Default logical update rate, in ticks per second.
pub const DEFAULT_TPS: u32 = 60;

/// Default cap on updates run for a single presented frame.
pub const DEFAULT_MAX_TICKS_PER_FRAME: u32 = 4;

/// Fixed-timestep accumulator.
///
/// Feed it the frame delta with [`push`](Self::push); it answers how many
/// logical ticks are due. Backlog beyond `max_ticks_per_frame` is discarded so a
/// slow device drops simulation time instead of spiralling.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    step: Duration,
    max_ticks_per_frame: u32,
    accumulator: Duration,
    primed: bool,
}

impl TickScheduler {
    /// # Panics
    /// Panics if `ticks_per_second` or `max_ticks_per_frame` is zero.
    pub fn new(ticks_per_second: u32, max_ticks_per_frame: u32) -> Self {
        assert!(ticks_per_second > 0, "ticks_per_second must be positive");
        assert!(max_ticks_per_frame > 0, "max_ticks_per_frame must be positive");
        Self {
            step: Duration::from_secs(1) / ticks_per_second,
            max_ticks_per_frame,
            accumulator: Duration::ZERO,
            primed: false,
        }
    }

    /// Duration of one logical tick.
    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Forgets accumulated time. The next `push` yields at least one tick again.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
        self.primed = false;
    }

    /// Accumulates `dt` and returns the number of ticks to run now.
    pub fn push(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt;

        let mut due = 0u32;
        if !self.primed {
            // First frame: always update once before drawing.
            self.primed = true;
            self.accumulator = self.accumulator.saturating_sub(self.step);
            due = 1;
        }

        while self.accumulator >= self.step && due < self.max_ticks_per_frame {
            self.accumulator -= self.step;
            due += 1;
        }

        if self.accumulator >= self.step {
            log::debug!(
                "tick backlog of {:?} dropped (cap {} per frame)",
                self.accumulator,
                self.max_ticks_per_frame
            );
            self.accumulator = Duration::ZERO;
        }

        due
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TPS, DEFAULT_MAX_TICKS_PER_FRAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_push_always_ticks() {
        let mut s = TickScheduler::default();
        assert_eq!(s.push(Duration::ZERO), 1);
    }

    #[test]
    fn one_tick_per_step_at_steady_rate() {
        let mut s = TickScheduler::new(50, 4);
        assert_eq!(s.push(ms(20)), 1);
        for _ in 0..10 {
            assert_eq!(s.push(ms(20)), 1);
        }
    }

    #[test]
    fn fast_frames_accumulate_into_ticks() {
        let mut s = TickScheduler::new(50, 4);
        s.push(ms(0));
        assert_eq!(s.push(ms(10)), 0);
        assert_eq!(s.push(ms(10)), 1);
    }

    #[test]
    fn stall_is_capped_and_backlog_dropped() {
        let mut s = TickScheduler::new(100, 3);
        s.push(ms(0));
        assert_eq!(s.push(ms(1000)), 3);
        // Remaining 970 ms of backlog was discarded.
        assert_eq!(s.push(ms(5)), 0);
        assert_eq!(s.push(ms(5)), 1);
    }

    #[test]
    fn reset_primes_again() {
        let mut s = TickScheduler::new(10, 4);
        s.push(ms(0));
        assert_eq!(s.push(ms(1)), 0);
        s.reset();
        assert_eq!(s.push(ms(1)), 1);
    }

    #[test]
    #[should_panic(expected = "ticks_per_second must be positive")]
    fn zero_rate_is_rejected() {
        let _ = TickScheduler::new(0, 1);
    }
}
