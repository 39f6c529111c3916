//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via blocking I2C.
//! Text-only: 5x7 glyphs on a page-aligned grid, 21 columns x 8 rows.

use embedded_hal::i2c::I2c;

use super::font::{glyph, GLYPH_WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Text grid dimensions (6-pixel glyph advance)
pub const TEXT_COLS: u8 = (WIDTH / (GLYPH_WIDTH + 1)) as u8;
pub const TEXT_ROWS: u8 = PAGES as u8;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const RAM_CONTENT: u8 = 0xA4;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Control bytes prefixing each I2C transfer
const CTRL_COMMAND: u8 = 0x00;
const CTRL_DATA: u8 = 0x40;

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RAM_CONTENT,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.clear();
        self.flush()
    }

    /// Send one command byte
    fn command(&mut self, c: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[CTRL_COMMAND, c])
    }

    /// Blank the frame buffer (no hardware write until flush)
    pub fn clear(&mut self) {
        self.buffer = [[0; WIDTH]; PAGES];
    }

    /// Draw text at a grid position
    ///
    /// - `row`: text row (0-7, one display page each)
    /// - `col`: text column (0-20)
    ///
    /// Text past the right edge is dropped.
    pub fn text(&mut self, row: u8, col: u8, text: &str) {
        if row >= TEXT_ROWS {
            return;
        }

        let page = &mut self.buffer[row as usize];
        let mut x = col as usize * (GLYPH_WIDTH + 1);

        for c in text.chars() {
            if x + GLYPH_WIDTH >= WIDTH {
                break;
            }
            page[x..x + GLYPH_WIDTH].copy_from_slice(glyph(c));
            page[x + GLYPH_WIDTH] = 0x00;
            x += GLYPH_WIDTH + 1;
        }
    }

    /// Push the frame buffer to the display
    pub fn flush(&mut self) -> Result<(), I2C::Error> {
        // Full-screen addressing window, then stream all pages;
        // horizontal mode auto-advances across page boundaries.
        self.command(cmd::SET_COLUMN_ADDR)?;
        self.command(0)?;
        self.command((WIDTH - 1) as u8)?;
        self.command(cmd::SET_PAGE_ADDR)?;
        self.command(0)?;
        self.command((PAGES - 1) as u8)?;

        for page in 0..PAGES {
            let mut chunk = [0u8; WIDTH + 1];
            chunk[0] = CTRL_DATA;
            chunk[1..].copy_from_slice(&self.buffer[page]);
            self.i2c.write(SSD1306_ADDR, &chunk)?;
        }

        Ok(())
    }
}
