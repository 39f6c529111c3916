//! Observation channel
//!
//! One report line per completed cycle, emitted over the defmt/RTT link.

use core::convert::Infallible;

use defmt::info;

use thermocycle_core::report::ObservationSink;

/// Line sink over defmt
pub struct DefmtSink;

impl ObservationSink for DefmtSink {
    type Error = Infallible;

    fn emit_line(&mut self, line: &str) -> Result<(), Infallible> {
        info!("{=str}", line);
        Ok(())
    }
}
