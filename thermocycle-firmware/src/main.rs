//! Thermocycle - cyclic temperature/trend pipeline firmware
//!
//! One fixed task chain per timer cycle on an RP2040 board with the
//! on-die temperature sensor, an SSD1306 status OLED and a 5x5 WS2812
//! indicator matrix: acquire -> classify -> render display -> render
//! indicator, with per-stage timing reported over defmt.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use thermocycle_core::executor::{ChainConfig, TaskChain};
use thermocycle_core::report::Reporter;
use thermocycle_core::traits::TrendIndicator;
use thermocycle_core::trend::Trend;
use thermocycle_drivers::indicator::TrendMatrix;
use thermocycle_drivers::sensor::OnboardTempSensor;

use crate::clock::MonotonicClock;
use crate::display::{OledStatus, Ssd1306};
use crate::indicator::{Ws2812Frame, MATRIX_PIXELS};
use crate::observe::DefmtSink;
use crate::sensor::TempAdc;
use crate::tasks::BoardChain;

mod channels;
mod clock;
mod display;
mod indicator;
mod observe;
mod sensor;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Thermocycle firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // On-die temperature sensor via blocking ADC
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let temp_channel = Channel::new_temp_sensor(p.ADC_TEMP_SENSOR);
    let sensor = OnboardTempSensor::new(TempAdc::new(adc, temp_channel));
    info!("ADC initialized");

    // Status OLED on I2C1 (SDA=GPIO14, SCL=GPIO15)
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, I2cConfig::default());
    let mut display = OledStatus::new(Ssd1306::new(i2c));
    display.init();
    info!("Display initialized");

    // 5x5 WS2812 matrix on GPIO7 via PIO0 + DMA
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws: PioWs2812<'static, PIO0, 0, MATRIX_PIXELS> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
    let mut matrix: TrendMatrix<Ws2812Frame, MATRIX_PIXELS> =
        TrendMatrix::new(Ws2812Frame::new(ws));
    info!("Indicator matrix initialized");

    // Power-on indicator check: sweep through every trend color
    for trend in [Trend::Rising, Trend::Falling, Trend::Stable, Trend::Fault] {
        matrix.render(trend);
        Timer::after_millis(150).await;
    }
    matrix.clear();
    matrix.flush();

    let chain: BoardChain = TaskChain::new(
        sensor,
        display,
        matrix,
        MonotonicClock,
        ChainConfig::default(),
    );
    let reporter = Reporter::new(DefmtSink);

    // Timer registration failure is startup-fatal
    if spawner.spawn(tasks::cycle_timer_task()).is_err() {
        halt("cycle timer registration failed");
    }
    if spawner.spawn(tasks::pipeline_task(chain, reporter)).is_err() {
        halt("pipeline registration failed");
    }

    info!("Tasks spawned, cycling every second");

    // Nothing left to do here - the timer and pipeline tasks carry the cycle
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Halt into a safe idle loop (requires reset/power cycle to recover)
fn halt(reason: &str) -> ! {
    error!("startup failed: {=str}; halting", reason);
    loop {
        cortex_m::asm::wfe();
    }
}
