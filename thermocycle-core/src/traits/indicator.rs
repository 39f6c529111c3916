//! Trend indicator trait and color type

use crate::trend::Trend;

/// An RGB color for the indicator matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All channels off
    pub const OFF: Rgb = Rgb::new(0, 0, 0);
}

/// Trait for the trend indicator collaborator (RGB matrix)
///
/// `render` is the per-cycle entry point. The primitive operations
/// `set_all`/`flush`/`clear` exist for the low-temperature alert flash,
/// which drives the matrix directly with a bounded pause in between.
pub trait TrendIndicator {
    /// Show the color/pattern corresponding to a trend.
    fn render(&mut self, trend: Trend);

    /// Fill the whole frame with one color (does not push to hardware).
    fn set_all(&mut self, color: Rgb);

    /// Push the current frame to the hardware.
    fn flush(&mut self);

    /// Fill the frame with black (does not push to hardware).
    fn clear(&mut self);
}
