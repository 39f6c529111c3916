//! Board-agnostic core logic for the thermocycle firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (temperature source, display, indicator, time)
//! - Trend classification with hysteresis
//! - Pending-cycle synchronization between timer and main loop
//! - The fixed per-cycle task chain with stage timing
//! - Cycle report formatting

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod executor;
pub mod report;
pub mod sync;
pub mod traits;
pub mod trend;
