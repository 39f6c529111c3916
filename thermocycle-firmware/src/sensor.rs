//! On-die temperature ADC channel

use embassy_rp::adc::{Adc, Blocking, Channel, Error};

use thermocycle_drivers::sensor::AdcReader;

/// Blocking reads of the RP2040 internal temperature channel
pub struct TempAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl TempAdc {
    /// Wrap the ADC with its temperature-sensor channel
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for TempAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_: Error| ())
    }
}
