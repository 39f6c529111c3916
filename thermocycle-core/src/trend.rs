//! Trend classification
//!
//! Turns the per-cycle temperature sample stream into a discrete trend
//! signal by comparing each new sample against a short rolling window of
//! prior samples, with a hysteresis band around the window reference.

use heapless::Vec;

use crate::config::{MAX_VALID_TEMP_C, MIN_VALID_TEMP_C};

/// Short-term temperature trend for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trend {
    /// Sample exceeds the reference by more than the hysteresis threshold
    Rising,
    /// Sample is below the reference by more than the hysteresis threshold
    Falling,
    /// Within the hysteresis band (or no history yet)
    Stable,
    /// Sample was NaN or outside the physical range (sensor fault)
    Fault,
}

impl Trend {
    /// Text form used on the display and in report lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "RISING",
            Trend::Falling => "FALLING",
            Trend::Stable => "STABLE",
            Trend::Fault => "FAULT",
        }
    }
}

/// Classify a sample against a window of prior samples.
///
/// The reference is the arithmetic mean of the window. Movement must
/// exceed `delta_c` strictly to count as RISING/FALLING; ties and the
/// exact ±delta boundary classify as STABLE. An empty window always
/// yields STABLE, and a non-finite or out-of-physical-range sample
/// yields FAULT regardless of history.
///
/// Pure function of its inputs; the caller owns the history.
pub fn classify(sample_c: f32, history: &[f32], delta_c: f32) -> Trend {
    if !sample_c.is_finite() || !(MIN_VALID_TEMP_C..=MAX_VALID_TEMP_C).contains(&sample_c) {
        return Trend::Fault;
    }

    if history.is_empty() {
        return Trend::Stable;
    }

    let reference = history.iter().sum::<f32>() / history.len() as f32;

    if sample_c > reference + delta_c {
        Trend::Rising
    } else if sample_c < reference - delta_c {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

/// Rolling sample window feeding the classifier
///
/// Holds up to `N` prior samples. Valid samples roll through in arrival
/// order; FAULT samples are never recorded, so one bad reading does not
/// pollute the reference for the cycles that follow.
#[derive(Debug, Default)]
pub struct TrendWindow<const N: usize> {
    samples: Vec<f32, N>,
}

impl<const N: usize> TrendWindow<N> {
    /// Create an empty window
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Classify a new sample against the window, then record it.
    pub fn observe(&mut self, sample_c: f32, delta_c: f32) -> Trend {
        let trend = classify(sample_c, &self.samples, delta_c);

        if trend != Trend::Fault {
            if self.samples.is_full() {
                self.samples.remove(0);
            }
            // Cannot fail: we just made room
            let _ = self.samples.push(sample_c);
        }

        trend
    }

    /// Prior samples, oldest first
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// True if no valid sample has been observed yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DELTA: f32 = 2.0;

    #[test]
    fn test_empty_history_is_stable() {
        assert_eq!(classify(25.0, &[], DELTA), Trend::Stable);
        assert_eq!(classify(-39.0, &[], DELTA), Trend::Stable);
        assert_eq!(classify(124.0, &[], DELTA), Trend::Stable);
    }

    #[test]
    fn test_rising_above_threshold() {
        // Reference 20.0, delta 2.0: anything strictly above 22.0 rises
        assert_eq!(classify(25.0, &[20.0], DELTA), Trend::Rising);
        assert_eq!(classify(22.01, &[20.0], DELTA), Trend::Rising);
    }

    #[test]
    fn test_falling_below_threshold() {
        assert_eq!(classify(15.0, &[20.0], DELTA), Trend::Falling);
        assert_eq!(classify(17.99, &[20.0], DELTA), Trend::Falling);
    }

    #[test]
    fn test_boundary_is_stable() {
        // Exactly reference ± delta stays STABLE (hysteresis is inclusive)
        assert_eq!(classify(22.0, &[20.0], DELTA), Trend::Stable);
        assert_eq!(classify(18.0, &[20.0], DELTA), Trend::Stable);
        assert_eq!(classify(20.0, &[20.0], DELTA), Trend::Stable);
    }

    #[test]
    fn test_reference_is_window_mean() {
        // Window mean is 21.0, so 23.5 is rising but 22.5 is not
        let history = [20.0, 21.0, 22.0];
        assert_eq!(classify(23.5, &history, DELTA), Trend::Rising);
        assert_eq!(classify(22.5, &history, DELTA), Trend::Stable);
    }

    #[test]
    fn test_nan_is_fault() {
        assert_eq!(classify(f32::NAN, &[20.0], DELTA), Trend::Fault);
        assert_eq!(classify(f32::NAN, &[], DELTA), Trend::Fault);
        assert_eq!(classify(f32::INFINITY, &[20.0], DELTA), Trend::Fault);
    }

    #[test]
    fn test_out_of_range_is_fault() {
        assert_eq!(classify(-60.0, &[20.0], DELTA), Trend::Fault);
        assert_eq!(classify(300.0, &[20.0], DELTA), Trend::Fault);
    }

    #[test]
    fn test_window_first_cycle_stable() {
        let mut window: TrendWindow<4> = TrendWindow::new();
        assert_eq!(window.observe(25.0, DELTA), Trend::Stable);
        assert_eq!(window.samples(), &[25.0]);
    }

    #[test]
    fn test_window_rolls_oldest_out() {
        let mut window: TrendWindow<2> = TrendWindow::new();
        window.observe(10.0, DELTA);
        window.observe(11.0, DELTA);
        window.observe(12.0, DELTA);
        assert_eq!(window.samples(), &[11.0, 12.0]);
    }

    #[test]
    fn test_window_skips_fault_samples() {
        let mut window: TrendWindow<4> = TrendWindow::new();
        window.observe(20.0, DELTA);
        assert_eq!(window.observe(f32::NAN, DELTA), Trend::Fault);
        assert_eq!(window.samples(), &[20.0]);

        // Next valid sample still classifies against the clean window
        assert_eq!(window.observe(25.0, DELTA), Trend::Rising);
    }

    proptest! {
        #[test]
        fn valid_samples_never_fault(
            sample in MIN_VALID_TEMP_C..=MAX_VALID_TEMP_C,
            reference in MIN_VALID_TEMP_C..=MAX_VALID_TEMP_C,
        ) {
            let trend = classify(sample, &[reference], DELTA);
            prop_assert_ne!(trend, Trend::Fault);
        }

        #[test]
        fn hysteresis_band_is_stable(
            reference in -20.0f32..=100.0,
            offset in -2.0f32..=2.0,
        ) {
            let trend = classify(reference + offset, &[reference], DELTA);
            prop_assert_eq!(trend, Trend::Stable);
        }

        #[test]
        fn classification_matches_sign_of_excess(
            reference in -20.0f32..=100.0,
            excess in 2.1f32..=10.0,
        ) {
            prop_assert_eq!(classify(reference + excess, &[reference], DELTA), Trend::Rising);
            prop_assert_eq!(classify(reference - excess, &[reference], DELTA), Trend::Falling);
        }
    }
}
