//! RP2040 on-die temperature sensor
//!
//! The chip routes an internal bias voltage to ADC channel 4; temperature
//! follows the datasheet formula T = 27 - (V - 0.706) / 0.001721 at a
//! 3.3 V reference. A single conversion is noisy (a couple of °C), so a
//! reading is the average of a block of conversions, the way the original
//! board firmware averaged a DMA capture block each cycle.

use thermocycle_core::traits::TemperatureSource;

/// ADC reference voltage in millivolts
const VREF_MV: f32 = 3300.0;

/// ADC resolution (12-bit)
const ADC_MAX: f32 = 4096.0;

/// Sensor bias voltage at 27 °C, in volts (datasheet typical)
const V_AT_27C: f32 = 0.706;

/// Bias voltage slope in volts per °C (datasheet typical, negative-going)
const V_PER_DEGREE: f32 = 0.001721;

/// Default conversions averaged per reading
pub const DEFAULT_SAMPLES_PER_READING: u16 = 100;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read one raw conversion (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Convert one raw conversion to °C
pub fn convert_celsius(raw: u16) -> f32 {
    let volts = raw as f32 * (VREF_MV / 1000.0) / ADC_MAX;
    27.0 - (volts - V_AT_27C) / V_PER_DEGREE
}

/// Averaging on-die temperature sensor
///
/// Blocks for the duration of the sample block; with the hardware ADC
/// pacing this stays well inside half the cycle period.
pub struct OnboardTempSensor<ADC> {
    adc: ADC,
    samples_per_reading: u16,
}

impl<ADC> OnboardTempSensor<ADC> {
    /// Create a sensor averaging the default block size
    pub fn new(adc: ADC) -> Self {
        Self::with_samples(adc, DEFAULT_SAMPLES_PER_READING)
    }

    /// Create a sensor averaging `samples_per_reading` conversions
    pub fn with_samples(adc: ADC, samples_per_reading: u16) -> Self {
        Self {
            adc,
            samples_per_reading: samples_per_reading.max(1),
        }
    }
}

impl<ADC: AdcReader> TemperatureSource for OnboardTempSensor<ADC> {
    fn acquire_celsius(&mut self) -> f32 {
        let mut sum = 0.0f32;
        let mut count = 0u16;

        for _ in 0..self.samples_per_reading {
            if let Ok(raw) = self.adc.read() {
                sum += convert_celsius(raw);
                count += 1;
            }
        }

        if count == 0 {
            // Every conversion failed; the classifier turns this into FAULT
            return f32::NAN;
        }

        sum / count as f32
    }
}
