//! WS2812 trend indicator matrix
//!
//! Maps each trend to a solid color across an N-pixel matrix. Brightness
//! is kept low: the matrix sits next to the operator and full-brightness
//! WS2812s are unpleasant at desk distance.

use thermocycle_core::traits::{Rgb, TrendIndicator};
use thermocycle_core::trend::Trend;

/// Indicator brightness per channel
const LEVEL: u8 = 32;

/// Solid color shown for each trend
pub fn color_for_trend(trend: Trend) -> Rgb {
    match trend {
        Trend::Rising => Rgb::new(LEVEL, 0, 0),
        Trend::Falling => Rgb::new(0, 0, LEVEL),
        Trend::Stable => Rgb::new(0, LEVEL, 0),
        Trend::Fault => Rgb::new(LEVEL, 0, LEVEL),
    }
}

/// Hardware seam: pushes one complete pixel frame to the LEDs
pub trait FrameSink {
    fn write_frame(&mut self, pixels: &[Rgb]);
}

/// N-pixel indicator matrix over a frame sink
pub struct TrendMatrix<F, const N: usize> {
    sink: F,
    frame: [Rgb; N],
}

impl<F: FrameSink, const N: usize> TrendMatrix<F, N> {
    /// Create a matrix with all pixels off
    pub fn new(sink: F) -> Self {
        Self {
            sink,
            frame: [Rgb::OFF; N],
        }
    }

    /// Current frame contents
    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }
}

impl<F: FrameSink, const N: usize> TrendIndicator for TrendMatrix<F, N> {
    fn render(&mut self, trend: Trend) {
        self.set_all(color_for_trend(trend));
        self.flush();
    }

    fn set_all(&mut self, color: Rgb) {
        self.frame = [color; N];
    }

    fn flush(&mut self) {
        self.sink.write_frame(&self.frame);
    }

    fn clear(&mut self) {
        self.set_all(Rgb::OFF);
    }
}
