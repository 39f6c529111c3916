//! Configuration constants
//!
//! Fixed parameters of the cyclic pipeline. There is no runtime
//! configuration surface; the process has exactly one run mode.

/// Nominal cycle period in milliseconds (one task chain run per period)
pub const CYCLE_PERIOD_MS: u64 = 1000;

/// Number of prior samples the trend classifier compares against
pub const TREND_WINDOW: usize = 4;

/// Default hysteresis threshold in °C
///
/// Movement within ±delta of the window reference classifies as STABLE,
/// which keeps the trend from oscillating on sensor noise.
pub const DEFAULT_TREND_DELTA_C: f32 = 0.5;

/// Low-temperature alert threshold in °C
///
/// A valid sample strictly below this triggers the indicator flash stage.
pub const LOW_TEMP_ALERT_C: f32 = 1.0;

/// Fixed duration of the low-temperature indicator flash in milliseconds
///
/// This is the one documented source of cycle-period overrun.
pub const FLASH_DURATION_MS: u32 = 200;

/// Physical validity range for temperature samples in °C
///
/// Readings outside this envelope indicate a sensor fault, not weather.
pub const MIN_VALID_TEMP_C: f32 = -40.0;
pub const MAX_VALID_TEMP_C: f32 = 125.0;
