//! Status display trait

use crate::trend::Trend;

/// Trait for the status display collaborator
///
/// Rendering is treated as effectively non-blocking relative to the cycle
/// period. Implementations must swallow their own transport failures;
/// display trouble never aborts the chain.
pub trait StatusDisplay {
    /// Render the current temperature and trend.
    fn render(&mut self, temperature_c: f32, trend: Trend);
}
