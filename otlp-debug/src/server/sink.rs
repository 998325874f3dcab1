//! Report output sinks
//!
//! The ingestion handler hands every framed report to a [`ReportSink`]. The
//! default writes to stdout; [`MemorySink`] keeps reports for inspection.

use chrono::{DateTime, Local};
use log::warn;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Destination for rendered reports.
///
/// Shared by all request handlers, so implementations must tolerate
/// concurrent calls.
pub trait ReportSink: Send + Sync {
    fn emit(&self, framed: &str);
}

/// Writes reports to stdout, one report per lock so they never interleave.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, framed: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(framed.as_bytes()).and_then(|()| stdout.flush()) {
            warn!("Failed to write report to stdout: {e}");
        }
    }
}

/// Collects reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, framed: &str) {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).push(framed.to_string());
    }
}

/// Wrap a report in the debug banner stamped with `at` (local time)
#[must_use]
pub fn frame_report(report: &str, at: DateTime<Local>) -> String {
    format!(
        "\n=== OTLP DEBUG [{}] ===\n{report}=== END DEBUG ===\n\n",
        at.format("%Y-%m-%d %H:%M:%S")
    )
}
