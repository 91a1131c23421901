//! # Forwarder
//!
//! Fan-out of formatted lines to remote collectors.
//!
//! Responsibilities:
//! - Suppress an immediately repeated line (`DedupFilter`)
//! - Connect to every configured collector in the background (`SinkPool`)
//! - Queue each accepted line to every active sink without blocking the caller
//! - Isolate failing or slow sinks from each other and from the host

pub mod dedup;
pub mod forwarder;
pub mod handle;
pub mod metrics;
pub mod pool;
pub mod sinks;

#[cfg(test)]
mod testing;

pub use contracts::{LineSink, LogLine};
pub use dedup::DedupFilter;
pub use forwarder::{Emission, Forwarder};
pub use handle::SinkHandle;
pub use metrics::{MetricsSnapshot, SinkMetrics};
pub use pool::SinkPool;
pub use sinks::{TcpSink, TraceSink};
