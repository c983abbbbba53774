//! # Fixed Tick Scheduler
//!
//! Converts elapsed wall-clock time into a whole number of simulation ticks.

use log::debug;
use std::time::Duration;

/// Most ticks a single `advance` will ask for. Time beyond that is dropped so
/// a long stall does not turn into a burst of catch-up movement.
pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

/// Accumulates frame time and hands out fixed-length ticks.
///
/// # Examples
///
/// ```
/// use hallway::FixedTickScheduler;
/// use std::time::Duration;
///
/// let mut scheduler = FixedTickScheduler::new(60);
/// assert_eq!(scheduler.advance(Duration::from_millis(10)), 0);
/// assert_eq!(scheduler.advance(Duration::from_millis(10)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTickScheduler {
    tick: Duration,
    accumulated: Duration,
    max_ticks: u32,
}

impl FixedTickScheduler {
    /// Creates a scheduler running at the given rate. A rate of zero is
    /// treated as one tick per second.
    pub fn new(ticks_per_second: u32) -> Self {
        let rate = u64::from(ticks_per_second.max(1));
        Self {
            tick: Duration::from_nanos(1_000_000_000 / rate),
            accumulated: Duration::ZERO,
            max_ticks: MAX_TICKS_PER_ADVANCE,
        }
    }

    /// Length of one tick.
    pub fn tick_length(&self) -> Duration {
        self.tick
    }

    /// Adds elapsed time and returns how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut ticks = 0;
        while self.accumulated >= self.tick && ticks < self.max_ticks {
            self.accumulated -= self.tick;
            ticks += 1;
        }

        if self.accumulated >= self.tick {
            debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulated
            );
            self.accumulated = Duration::ZERO;
        }

        ticks
    }

    /// Like [`advance`](Self::advance) but takes seconds as reported by a
    /// frame timer. Negative or non-finite values count as no time.
    pub fn advance_seconds(&mut self, seconds: f32) -> u32 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        self.advance(Duration::from_secs_f32(seconds))
    }

    /// Forgets any partially accumulated tick.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
