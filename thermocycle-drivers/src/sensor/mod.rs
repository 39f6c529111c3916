//! Temperature sensor implementations

pub mod onboard;

pub use onboard::{AdcReader, OnboardTempSensor};
