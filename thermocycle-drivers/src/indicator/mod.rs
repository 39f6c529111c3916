//! Trend indicator implementations

pub mod matrix;

pub use matrix::{color_for_trend, FrameSink, TrendMatrix};
