//! Pipeline task
//!
//! The cooperative main loop: idle until the cycle timer wakes it, take
//! the pending-cycle flag, run the task chain synchronously, report.
//! Cycle N's chain always completes before cycle N+1's begins.

use defmt::info;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;

use thermocycle_core::config::TREND_WINDOW;
use thermocycle_core::executor::TaskChain;
use thermocycle_core::report::Reporter;
use thermocycle_drivers::indicator::TrendMatrix;
use thermocycle_drivers::sensor::OnboardTempSensor;

use crate::channels::{CYCLE_PENDING, CYCLE_WAKE};
use crate::clock::MonotonicClock;
use crate::display::OledStatus;
use crate::indicator::{Ws2812Frame, MATRIX_PIXELS};
use crate::observe::DefmtSink;
use crate::sensor::TempAdc;

/// The fully wired task chain for this board
pub type BoardChain = TaskChain<
    OnboardTempSensor<TempAdc>,
    OledStatus<I2c<'static, I2C1, Blocking>>,
    TrendMatrix<Ws2812Frame, MATRIX_PIXELS>,
    MonotonicClock,
    TREND_WINDOW,
>;

/// Reporter over the defmt observation channel
pub type BoardReporter = Reporter<DefmtSink>;

/// Pipeline task - one task chain run per taken cycle
#[embassy_executor::task]
pub async fn pipeline_task(mut chain: BoardChain, mut reporter: BoardReporter) {
    info!("Pipeline task started");

    loop {
        CYCLE_WAKE.wait().await;

        // Coalesced triggers yield exactly one pending cycle
        if CYCLE_PENDING.take_pending_cycle() {
            let report = chain.run_cycle();
            reporter.report(&report);
        }
    }
}
