//! Status display
//!
//! SSD1306 text driver plus the adapter implementing the core
//! `StatusDisplay` trait. Every I2C failure is logged and swallowed;
//! a dead display must not affect the cycle.

pub mod font;
pub mod ssd1306;

use core::fmt::Write;

use defmt::warn;
use embedded_hal::i2c::I2c;
use heapless::String;

use thermocycle_core::traits::StatusDisplay;
use thermocycle_core::trend::Trend;

pub use ssd1306::Ssd1306;

/// Status screen over an SSD1306
pub struct OledStatus<I2C> {
    oled: Ssd1306<I2C>,
}

impl<I2C: I2c> OledStatus<I2C> {
    pub fn new(oled: Ssd1306<I2C>) -> Self {
        Self { oled }
    }

    /// Initialize the panel and draw the static header.
    ///
    /// Failure is non-fatal: the cycle keeps running without a display.
    pub fn init(&mut self) {
        if self.oled.init().is_err() {
            warn!("display init failed");
            return;
        }
        self.oled.text(0, 0, "THERMOCYCLE");
        if self.oled.flush().is_err() {
            warn!("display flush failed");
        }
    }
}

impl<I2C: I2c> StatusDisplay for OledStatus<I2C> {
    fn render(&mut self, temperature_c: f32, trend: Trend) {
        let mut temp_line: String<21> = String::new();
        let mut trend_line: String<21> = String::new();

        // Capacity failures only truncate; still worth drawing
        let _ = write!(temp_line, "TEMP:  {temperature_c:.2} C");
        let _ = write!(trend_line, "TREND: {}", trend.as_str());

        // Padded to the full row so shorter values overwrite longer ones
        self.oled.text(2, 0, "                     ");
        self.oled.text(2, 0, &temp_line);
        self.oled.text(4, 0, "                     ");
        self.oled.text(4, 0, &trend_line);

        if self.oled.flush().is_err() {
            warn!("display flush failed");
        }
    }
}
