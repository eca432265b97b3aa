//! Command metrics tracking.
//!
//! Counts what the REPL has handled during one session and emits a
//! structured `tracing` event per command.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Session metrics for the command router.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    commands_total: Arc<AtomicU64>,
    command_errors_total: Arc<AtomicU64>,
    search_queries_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            commands_total: Arc::new(AtomicU64::new(0)),
            command_errors_total: Arc::new(AtomicU64::new(0)),
            search_queries_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a handled command.
    ///
    /// `success` is false when the command ended in a user error (bad
    /// arguments, validation failure, unknown name).
    pub fn track_command(&self, command: &str, duration_us: u128, success: bool) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.command_errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            command = %command,
            duration_us = duration_us,
            success = success,
            "Command handled"
        );
    }

    /// Track a search query.
    pub fn track_search_query(&self, result_count: usize) {
        self.search_queries_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(result_count = result_count, "Search query completed");
    }

    /// Get the total number of handled commands.
    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    /// Get the total number of commands that ended in a user error.
    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total.load(Ordering::Relaxed)
    }

    /// Get the total number of search queries.
    pub fn search_queries_total(&self) -> u64 {
        self.search_queries_total.load(Ordering::Relaxed)
    }

    /// Get the command error rate (0.0 to 1.0).
    pub fn command_error_rate(&self) -> f64 {
        let errors = self.command_errors_total() as f64;
        let total = self.commands_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            errors / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Commands: {}\n\
             Command Errors: {} ({:.2}% error rate)\n\
             Search Queries: {}",
            self.commands_total(),
            self.command_errors_total(),
            self.command_error_rate() * 100.0,
            self.search_queries_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in microseconds.
    pub fn finish(self) -> u128 {
        let duration_us = self.start.elapsed().as_micros();

        tracing::trace!(
            operation = %self.operation,
            duration_us = duration_us,
            "Operation completed"
        );

        duration_us
    }
}
