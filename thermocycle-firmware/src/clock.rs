//! Monotonic time source over the embassy time driver

use embassy_time::{block_for, Duration, Instant};

use thermocycle_core::traits::TimeSource;

/// Wall-clock stamps and bounded blocking pauses for the task chain
pub struct MonotonicClock;

impl TimeSource for MonotonicClock {
    fn now_micros(&mut self) -> u64 {
        Instant::now().as_micros()
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
