//! Per-cycle task chain
//!
//! Runs the fixed sequence acquire -> classify -> render display ->
//! render indicator once per pending-cycle signal, stamping each stage
//! with wall-clock timestamps. There is no parallelism across stages:
//! every output depends on the trend value, and the stages share no
//! state that would justify independent contexts.

use crate::config::{
    DEFAULT_TREND_DELTA_C, FLASH_DURATION_MS, LOW_TEMP_ALERT_C, TREND_WINDOW,
};
use crate::traits::{Rgb, StatusDisplay, TemperatureSource, TimeSource, TrendIndicator};
use crate::trend::{Trend, TrendWindow};

/// Color of the low-temperature attention flash
pub const ALERT_FLASH_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Tunable parameters of the task chain
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainConfig {
    /// Hysteresis threshold for the trend classifier (°C)
    pub delta_c: f32,
    /// Samples strictly below this trigger the alert flash (°C)
    pub low_temp_alert_c: f32,
    /// Fixed duration of the alert flash (ms)
    pub flash_duration_ms: u32,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            delta_c: DEFAULT_TREND_DELTA_C,
            low_temp_alert_c: LOW_TEMP_ALERT_C,
            flash_duration_ms: FLASH_DURATION_MS,
        }
    }
}

/// Wall-clock duration of each stage of one cycle, in microseconds
///
/// Owned by the task chain while the cycle runs, read by the reporter
/// afterwards. Not retained across cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StageTiming {
    pub acquire_us: u64,
    pub classify_us: u64,
    pub display_us: u64,
    pub indicator_us: u64,
    /// Zero unless the alert flash stage ran
    pub flash_us: u64,
}

impl StageTiming {
    /// Total chain duration for the cycle
    pub fn total_us(&self) -> u64 {
        self.acquire_us + self.classify_us + self.display_us + self.indicator_us + self.flash_us
    }
}

/// Result of one full task chain run
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Raw acquired sample (may be NaN/out-of-range on sensor fault)
    pub temperature_c: f32,
    /// Trend classified for this cycle
    pub trend: Trend,
    /// Per-stage durations
    pub timing: StageTiming,
    /// Whether the low-temperature alert flash ran
    pub flashed: bool,
}

/// The fixed per-cycle task chain
///
/// Generic over the injected collaborators so the whole chain runs under
/// test with deterministic mocks. `W` is the trend window capacity.
pub struct TaskChain<S, D, I, T, const W: usize = TREND_WINDOW> {
    sensor: S,
    display: D,
    indicator: I,
    time: T,
    window: TrendWindow<W>,
    config: ChainConfig,
}

impl<S, D, I, T, const W: usize> TaskChain<S, D, I, T, W>
where
    S: TemperatureSource,
    D: StatusDisplay,
    I: TrendIndicator,
    T: TimeSource,
{
    /// Create a chain with an empty sample history
    pub fn new(sensor: S, display: D, indicator: I, time: T, config: ChainConfig) -> Self {
        Self {
            sensor,
            display,
            indicator,
            time,
            window: TrendWindow::new(),
            config,
        }
    }

    /// Run one full cycle. Invoked exactly once per pending-cycle signal.
    ///
    /// Stages execute strictly sequentially; no stage failure aborts the
    /// chain. A fault sample flows through the display and indicator as
    /// `Trend::Fault` so the system stays observable.
    pub fn run_cycle(&mut self) -> CycleReport {
        let mut timing = StageTiming::default();

        // Stage 1: acquire (blocking, bounded)
        let t0 = self.time.now_micros();
        let sample_c = self.sensor.acquire_celsius();
        let t1 = self.time.now_micros();
        timing.acquire_us = t1.saturating_sub(t0);

        // Stage 2: classify against the previous cycles' history
        let trend = self.window.observe(sample_c, self.config.delta_c);
        let t2 = self.time.now_micros();
        timing.classify_us = t2.saturating_sub(t1);

        // Stage 3: render display
        self.display.render(sample_c, trend);
        let t3 = self.time.now_micros();
        timing.display_us = t3.saturating_sub(t2);

        // Stage 4: render indicator
        self.indicator.render(trend);
        let t4 = self.time.now_micros();
        timing.indicator_us = t4.saturating_sub(t3);

        // Stage 5 (conditional): low-temperature attention flash.
        // Extends total cycle duration; the one documented overrun source.
        let flashed = trend != Trend::Fault && sample_c < self.config.low_temp_alert_c;
        if flashed {
            self.flash_alert();
            let t5 = self.time.now_micros();
            timing.flash_us = t5.saturating_sub(t4);
        }

        CycleReport {
            temperature_c: sample_c,
            trend,
            timing,
            flashed,
        }
    }

    /// Bounded attention-getting flash on the indicator
    fn flash_alert(&mut self) {
        self.indicator.set_all(ALERT_FLASH_COLOR);
        self.indicator.flush();
        self.time.delay_ms(self.config.flash_duration_ms);
        self.indicator.clear();
        self.indicator.flush();
    }

    /// Prior valid samples, oldest first
    pub fn history(&self) -> &[f32] {
        self.window.samples()
    }

    /// The injected indicator collaborator
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// The injected display collaborator
    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::format_report;
    use heapless::Vec;

    /// Scripted sensor: returns readings in order, repeating the last one
    struct ScriptedSensor {
        readings: Vec<f32, 8>,
        index: usize,
    }

    impl ScriptedSensor {
        fn new(readings: &[f32]) -> Self {
            Self {
                readings: Vec::from_slice(readings).unwrap(),
                index: 0,
            }
        }
    }

    impl TemperatureSource for ScriptedSensor {
        fn acquire_celsius(&mut self) -> f32 {
            let value = self.readings[self.index.min(self.readings.len() - 1)];
            self.index += 1;
            value
        }
    }

    /// Display that records what it was asked to show
    #[derive(Default)]
    struct RecordingDisplay {
        rendered: Vec<(f32, Trend), 8>,
    }

    impl StatusDisplay for RecordingDisplay {
        fn render(&mut self, temperature_c: f32, trend: Trend) {
            let _ = self.rendered.push((temperature_c, trend));
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum IndicatorEvent {
        Render(Trend),
        SetAll(Rgb),
        Flush,
        Clear,
    }

    /// Indicator that records the call sequence
    #[derive(Default)]
    struct RecordingIndicator {
        events: Vec<IndicatorEvent, 16>,
    }

    impl TrendIndicator for RecordingIndicator {
        fn render(&mut self, trend: Trend) {
            let _ = self.events.push(IndicatorEvent::Render(trend));
        }

        fn set_all(&mut self, color: Rgb) {
            let _ = self.events.push(IndicatorEvent::SetAll(color));
        }

        fn flush(&mut self) {
            let _ = self.events.push(IndicatorEvent::Flush);
        }

        fn clear(&mut self) {
            let _ = self.events.push(IndicatorEvent::Clear);
        }
    }

    /// Deterministic clock: every observation advances by a fixed step,
    /// delays advance by their nominal duration.
    struct FakeClock {
        now_us: u64,
        step_us: u64,
    }

    impl FakeClock {
        fn new(step_us: u64) -> Self {
            Self { now_us: 0, step_us }
        }
    }

    impl TimeSource for FakeClock {
        fn now_micros(&mut self) -> u64 {
            let now = self.now_us;
            self.now_us += self.step_us;
            now
        }

        fn delay_ms(&mut self, ms: u32) {
            self.now_us += ms as u64 * 1000;
        }
    }

    fn test_config() -> ChainConfig {
        ChainConfig {
            delta_c: 2.0,
            ..ChainConfig::default()
        }
    }

    fn make_chain(
        readings: &[f32],
    ) -> TaskChain<ScriptedSensor, RecordingDisplay, RecordingIndicator, FakeClock, 4> {
        TaskChain::new(
            ScriptedSensor::new(readings),
            RecordingDisplay::default(),
            RecordingIndicator::default(),
            FakeClock::new(500),
            test_config(),
        )
    }

    #[test]
    fn test_rising_cycle_and_report_line() {
        let mut chain = make_chain(&[20.0, 25.0]);

        // First cycle seeds the history: empty window -> STABLE
        let first = chain.run_cycle();
        assert_eq!(first.trend, Trend::Stable);
        assert_eq!(chain.history(), &[20.0]);

        // Second cycle: 25.0 vs reference 20.0 with delta 2.0 -> RISING
        let second = chain.run_cycle();
        assert_eq!(second.trend, Trend::Rising);
        assert!(!second.flashed);

        let line = format_report(&second);
        assert!(line.contains("Temperature: 25.00"));
        assert!(line.contains("RISING"));
    }

    #[test]
    fn test_stage_order_and_timing() {
        let mut chain = make_chain(&[22.0]);
        let report = chain.run_cycle();

        // Each stage spans exactly one clock step
        assert_eq!(report.timing.acquire_us, 500);
        assert_eq!(report.timing.classify_us, 500);
        assert_eq!(report.timing.display_us, 500);
        assert_eq!(report.timing.indicator_us, 500);
        assert_eq!(report.timing.flash_us, 0);

        assert_eq!(chain.display().rendered.as_slice(), &[(22.0, Trend::Stable)]);
        assert_eq!(
            chain.indicator().events.as_slice(),
            &[IndicatorEvent::Render(Trend::Stable)]
        );
    }

    #[test]
    fn test_low_temperature_flash_runs_once() {
        // 0.50 is below the 1.0 alert threshold
        let mut chain = make_chain(&[0.5]);
        let report = chain.run_cycle();

        assert!(report.flashed);
        assert_eq!(
            chain.indicator().events.as_slice(),
            &[
                IndicatorEvent::Render(Trend::Stable),
                IndicatorEvent::SetAll(ALERT_FLASH_COLOR),
                IndicatorEvent::Flush,
                IndicatorEvent::Clear,
                IndicatorEvent::Flush,
            ]
        );

        // Total duration exceeds the base chain by the bounded flash amount
        let base_us = report.timing.acquire_us
            + report.timing.classify_us
            + report.timing.display_us
            + report.timing.indicator_us;
        assert!(report.timing.flash_us >= FLASH_DURATION_MS as u64 * 1000);
        assert_eq!(report.timing.total_us(), base_us + report.timing.flash_us);
    }

    #[test]
    fn test_fault_sample_still_completes_chain() {
        let mut chain = make_chain(&[f32::NAN]);
        let report = chain.run_cycle();

        assert_eq!(report.trend, Trend::Fault);
        assert!(!report.flashed);

        // Downstream stages still ran with the FAULT trend
        assert_eq!(chain.display().rendered.len(), 1);
        assert_eq!(chain.display().rendered[0].1, Trend::Fault);
        assert_eq!(
            chain.indicator().events.as_slice(),
            &[IndicatorEvent::Render(Trend::Fault)]
        );

        // Fault samples never enter the history
        assert!(chain.history().is_empty());
    }

    #[test]
    fn test_fault_sample_does_not_flash() {
        // NaN compares false against the alert threshold; make sure an
        // out-of-range negative reading doesn't flash either.
        let mut chain = make_chain(&[-60.0]);
        let report = chain.run_cycle();
        assert_eq!(report.trend, Trend::Fault);
        assert!(!report.flashed);
    }
}
