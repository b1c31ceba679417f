//! Simulated IO latency per engine operation.

use std::time::Duration;

/// Per-operation artificial delay, applied once at the operation boundary.
///
/// Timing is not behaviorally significant; defaults mirror the mock service
/// this engine stands in for, and tests run with [`Latency::zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub vendors: Duration,
    pub get: Duration,
    pub add: Duration,
    pub update: Duration,
    pub auto_approval: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            vendors: Duration::from_millis(200),
            get: Duration::from_millis(300),
            add: Duration::from_millis(800),
            update: Duration::from_millis(500),
            auto_approval: Duration::from_millis(600),
        }
    }
}

impl Latency {
    /// No artificial delay anywhere. Skips the timer entirely.
    pub fn zero() -> Self {
        Self {
            list: Duration::ZERO,
            vendors: Duration::ZERO,
            get: Duration::ZERO,
            add: Duration::ZERO,
            update: Duration::ZERO,
            auto_approval: Duration::ZERO,
        }
    }
}
