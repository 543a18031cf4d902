//! # Status Reporting
//!
//! Per-message status lines are handed to a [`StatusReporter`] so callers can
//! decide where they end up. The default reporter writes them to the
//! `tracing` log.

use tracing::info;

/// Receives one status line at a time, in the order they are produced.
pub trait StatusReporter {
    /// Reports a single line of status output
    fn report(&self, line: &str);
}

/// Writes status lines as `info` level log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn report(&self, line: &str) {
        info!("{}", line);
    }
}

impl<R: StatusReporter + ?Sized> StatusReporter for &R {
    fn report(&self, line: &str) {
        (**self).report(line)
    }
}
