//! LineSink trait - Forwarder output interface
//!
//! Defines the abstract interface for log collectors.

use crate::{ContractError, LogLine};

/// Line output trait
///
/// All sink implementations must implement this trait. A sink is owned by a
/// single worker task, so implementations never see concurrent writes.
#[trait_variant::make(LineSink: Send)]
pub trait LocalLineSink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Write one formatted line
    ///
    /// # Errors
    /// Returns write error (should include context)
    async fn write(&mut self, line: &LogLine) -> Result<(), ContractError>;

    /// Flush buffer (if any)
    async fn flush(&mut self) -> Result<(), ContractError>;

    /// Close sink
    async fn close(&mut self) -> Result<(), ContractError>;
}
