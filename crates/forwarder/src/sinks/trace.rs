//! TraceSink - echoes forwarded lines through tracing

use contracts::{ContractError, LineSink, LogLine};
use tracing::{info, instrument};

/// Sink that writes every line to the process log
pub struct TraceSink {
    name: String,
}

impl TraceSink {
    /// Create a new TraceSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LineSink for TraceSink {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "trace_sink_write", skip(self, line), fields(sink = %self.name))]
    async fn write(&mut self, line: &LogLine) -> Result<(), ContractError> {
        info!(sink = %self.name, line = %line, "Forwarded line");
        Ok(())
    }

    #[instrument(name = "trace_sink_flush", skip(self))]
    async fn flush(&mut self) -> Result<(), ContractError> {
        // Nothing to flush for trace sink
        Ok(())
    }

    #[instrument(name = "trace_sink_close", skip(self))]
    async fn close(&mut self) -> Result<(), ContractError> {
        info!(sink = %self.name, "TraceSink closed");
        Ok(())
    }
}
