//! Cycle reporting
//!
//! Formats one human-readable line per completed cycle and hands it to an
//! observation sink. Side-effect only: a sink failure is swallowed, never
//! retried, never fatal. Observability must not affect control flow.

use core::fmt::Write;

use heapless::String;

use crate::executor::CycleReport;

/// Maximum report line length
pub const MAX_REPORT_LEN: usize = 160;

/// Format the per-cycle report line.
///
/// `Temperature: <2-decimal> C | Trend: <text>` followed by per-stage
/// durations in seconds at 3 decimals, plus the alert flash duration
/// when that stage ran.
pub fn format_report(report: &CycleReport) -> String<MAX_REPORT_LEN> {
    let mut line: String<MAX_REPORT_LEN> = String::new();
    let t = &report.timing;

    // Writes to a heapless String only fail on capacity, which the
    // buffer is sized to avoid; a truncated line is still reportable.
    let _ = write!(
        line,
        "Temperature: {:.2} C | Trend: {}",
        report.temperature_c,
        report.trend.as_str()
    );
    let _ = write!(
        line,
        " | acquire: {:.3}s | classify: {:.3}s | display: {:.3}s | indicator: {:.3}s",
        secs(t.acquire_us),
        secs(t.classify_us),
        secs(t.display_us),
        secs(t.indicator_us),
    );
    if report.flashed {
        let _ = write!(line, " | alert: {:.3}s", secs(t.flash_us));
    }

    line
}

fn secs(us: u64) -> f32 {
    us as f32 / 1_000_000.0
}

/// Line-oriented observation channel
pub trait ObservationSink {
    type Error;

    /// Emit one completed line.
    fn emit_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Per-cycle reporter over an observation sink
pub struct Reporter<O> {
    sink: O,
}

impl<O: ObservationSink> Reporter<O> {
    /// Create a reporter over the given sink
    pub fn new(sink: O) -> Self {
        Self { sink }
    }

    /// Format and emit the cycle report. Sink failures are swallowed.
    pub fn report(&mut self, report: &CycleReport) {
        let line = format_report(report);
        let _ = self.sink.emit_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::StageTiming;
    use crate::trend::Trend;

    fn sample_report() -> CycleReport {
        CycleReport {
            temperature_c: 25.0,
            trend: Trend::Rising,
            timing: StageTiming {
                acquire_us: 512_000,
                classify_us: 120,
                display_us: 3_400,
                indicator_us: 900,
                flash_us: 0,
            },
            flashed: false,
        }
    }

    #[test]
    fn test_report_line_format() {
        let line = format_report(&sample_report());
        assert!(line.starts_with("Temperature: 25.00 C | Trend: RISING"));
        assert!(line.contains("acquire: 0.512s"));
        assert!(line.contains("classify: 0.000s"));
        assert!(line.contains("display: 0.003s"));
        assert!(line.contains("indicator: 0.001s"));
        assert!(!line.contains("alert:"));
    }

    #[test]
    fn test_report_line_includes_flash_when_it_ran() {
        let mut report = sample_report();
        report.flashed = true;
        report.timing.flash_us = 201_000;

        let line = format_report(&report);
        assert!(line.contains("alert: 0.201s"));
    }

    #[test]
    fn test_fault_report_is_still_a_line() {
        let mut report = sample_report();
        report.temperature_c = f32::NAN;
        report.trend = Trend::Fault;

        let line = format_report(&report);
        assert!(line.contains("Trend: FAULT"));
    }

    /// Sink that always fails
    struct BrokenSink;

    impl ObservationSink for BrokenSink {
        type Error = ();

        fn emit_line(&mut self, _line: &str) -> Result<(), ()> {
            Err(())
        }
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let mut reporter = Reporter::new(BrokenSink);
        // Must not panic or surface the error
        reporter.report(&sample_report());
    }
}
