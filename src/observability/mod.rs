//! Observability module for monitoring and metrics.
//!
//! This module provides per-session command metrics and a timer that
//! reports operation durations through structured logging.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
