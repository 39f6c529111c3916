//! Time source trait

/// Trait for wall-clock timestamps and bounded pauses
///
/// The task chain uses `now_micros` to stamp stage boundaries and
/// `delay_ms` for the fixed-duration alert flash. Takes `&mut self` so
/// test clocks can advance deterministically on every observation.
pub trait TimeSource {
    /// Current monotonic time in microseconds.
    fn now_micros(&mut self) -> u64;

    /// Block for the given number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
