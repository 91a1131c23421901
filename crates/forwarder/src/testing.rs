//! Test doubles

use std::sync::{Arc, Mutex};
use std::time::Duration;

use contracts::{ContractError, LineSink, LogLine};
use tokio::time::sleep;

/// Sink recording every line it accepts
pub(crate) struct MockSink {
    pub name: String,
    pub received: Arc<Mutex<Vec<LogLine>>>,
    pub should_fail: bool,
    pub delay_ms: u64,
}

impl MockSink {
    pub fn new(name: &str) -> (Self, Arc<Mutex<Vec<LogLine>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            name: name.to_string(),
            received: Arc::clone(&received),
            should_fail: false,
            delay_ms: 0,
        };
        (sink, received)
    }

    pub fn failing(name: &str) -> Self {
        let (mut sink, _) = Self::new(name);
        sink.should_fail = true;
        sink
    }
}

impl LineSink for MockSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn write(&mut self, line: &LogLine) -> Result<(), ContractError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.should_fail {
            return Err(ContractError::sink_write(&self.name, "mock failure"));
        }
        self.received.lock().unwrap().push(line.clone());
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), ContractError> {
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ContractError> {
        Ok(())
    }
}

pub(crate) fn line(body: &str) -> LogLine {
    LogLine::compose("Mon Jan 01 12:00:00 +0000 2024", body)
}
