//! Per-sink counters
//!
//! Kept in process so callers (and tests) can inspect delivery without a
//! metrics recorder installed.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Counters for a single sink
#[derive(Debug, Default)]
pub struct SinkMetrics {
    /// Lines waiting in the sink queue
    queue_len: AtomicUsize,
    /// Lines written successfully
    writes: AtomicU64,
    /// Failed write attempts
    failures: AtomicU64,
    /// Lines refused because the queue was full
    queue_full_drops: AtomicU64,
}

impl SinkMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_len(&self) -> usize {
        self.queue_len.load(Ordering::Relaxed)
    }

    pub fn set_queue_len(&self, len: usize) {
        self.queue_len.store(len, Ordering::Relaxed);
    }

    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn queue_full_drops(&self) -> u64 {
        self.queue_full_drops.load(Ordering::Relaxed)
    }

    pub fn record_queue_full(&self) {
        self.queue_full_drops.fetch_add(1, Ordering::Relaxed);
    }

    /// Write attempts so far, successful or not
    pub fn attempts(&self) -> u64 {
        self.writes() + self.failures()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queue_len: self.queue_len(),
            writes: self.writes(),
            failures: self.failures(),
            queue_full_drops: self.queue_full_drops(),
        }
    }
}

/// Point-in-time copy of [`SinkMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub queue_len: usize,
    pub writes: u64,
    pub failures: u64,
    pub queue_full_drops: u64,
}
