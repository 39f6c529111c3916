//! Temperature acquisition trait

/// Trait for the temperature acquisition collaborator
///
/// Acquisition is a blocking call and may take a bounded, non-negligible
/// duration (on the order of half the cycle period when averaging a large
/// sample block).
pub trait TemperatureSource {
    /// Acquire one averaged temperature reading in °C.
    ///
    /// Sensor faults surface as non-finite or out-of-physical-range values
    /// rather than an error: the classifier downstream turns them into a
    /// FAULT trend so the cycle still completes and is reported.
    fn acquire_celsius(&mut self) -> f32;
}
