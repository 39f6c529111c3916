//! Cycle timer task
//!
//! The periodic trigger source. Each tick marks a cycle as pending and
//! wakes the pipeline; if the pipeline is still busy with the previous
//! chain, the flag coalesces and the extra tick is dropped.

use defmt::info;
use embassy_time::{Duration, Ticker};

use thermocycle_core::config::CYCLE_PERIOD_MS;

use crate::channels::{CYCLE_PENDING, CYCLE_WAKE};

/// Cycle timer task - signals one pending cycle per period
#[embassy_executor::task]
pub async fn cycle_timer_task() {
    info!("Cycle timer started ({} ms period)", CYCLE_PERIOD_MS);

    let mut ticker = Ticker::every(Duration::from_millis(CYCLE_PERIOD_MS));

    loop {
        ticker.next().await;
        CYCLE_PENDING.signal_cycle();
        CYCLE_WAKE.signal(());
    }
}
