//! Collaborator implementations for the thermocycle pipeline
//!
//! This crate provides concrete implementations of the traits defined
//! in thermocycle-core, generic over small hardware seams so they stay
//! host-testable:
//!
//! - Averaging on-chip temperature sensor (generic over an ADC reader)
//! - Trend indicator matrix (generic over a pixel frame sink)

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod sensor;
