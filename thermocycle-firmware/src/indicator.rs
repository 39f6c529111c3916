//! WS2812 matrix backend
//!
//! Bridges the core `FrameSink` seam to the embassy-rp PIO WS2812
//! program. The DMA write is async; the pipeline's indicator stage is
//! blocking and short, so the write is driven to completion in place.

use embassy_futures::block_on;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use thermocycle_core::traits::Rgb;
use thermocycle_drivers::indicator::FrameSink;

/// Pixel count of the 5x5 indicator matrix
pub const MATRIX_PIXELS: usize = 25;

/// Frame sink over the PIO WS2812 state machine
pub struct Ws2812Frame {
    ws: PioWs2812<'static, PIO0, 0, MATRIX_PIXELS>,
}

impl Ws2812Frame {
    pub fn new(ws: PioWs2812<'static, PIO0, 0, MATRIX_PIXELS>) -> Self {
        Self { ws }
    }
}

impl FrameSink for Ws2812Frame {
    fn write_frame(&mut self, pixels: &[Rgb]) {
        let mut data = [RGB8::default(); MATRIX_PIXELS];
        for (out, px) in data.iter_mut().zip(pixels) {
            *out = RGB8::new(px.r, px.g, px.b);
        }
        block_on(self.ws.write(&data));
    }
}
