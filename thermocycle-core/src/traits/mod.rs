//! Collaborator traits
//!
//! These traits define the interface between the task chain and the
//! hardware-specific implementations, so the chain can be unit-tested
//! with deterministic mocks instead of real hardware timing.

pub mod display;
pub mod indicator;
pub mod sensor;
pub mod time;

pub use display::StatusDisplay;
pub use indicator::{Rgb, TrendIndicator};
pub use sensor::TemperatureSource;
pub use time::TimeSource;
