//! SinkHandle - one collector connection behind its own delivery queue
//!
//! The worker is the only writer of its sink, so records never interleave on
//! the wire and a stalled collector only backs up its own queue.

use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument, warn};

use contracts::{LineSink, LogLine};

use crate::metrics::SinkMetrics;

/// Producer side of a sink's delivery queue
pub struct SinkHandle {
    name: String,
    queue: mpsc::Sender<LogLine>,
    metrics: Arc<SinkMetrics>,
    worker: JoinHandle<()>,
}

impl SinkHandle {
    /// Move `sink` onto a delivery worker holding at most `queue_capacity`
    /// pending lines
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S: LineSink + Send + 'static>(sink: S, queue_capacity: usize) -> Self {
        let name = sink.name().to_string();
        let (queue, pending) = mpsc::channel(queue_capacity.max(1));
        let metrics = Arc::new(SinkMetrics::new());

        let worker = tokio::spawn(deliver(
            sink,
            pending,
            Arc::clone(&metrics),
            name.clone(),
        ));

        Self {
            name,
            queue,
            metrics,
            worker,
        }
    }

    /// Collector name, `host:port` for TCP sinks
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metrics(&self) -> &Arc<SinkMetrics> {
        &self.metrics
    }

    /// Hand a line to the worker without waiting
    ///
    /// `false` means this collector will never see the line: its queue was
    /// full or its worker has exited. Other sinks are unaffected.
    pub fn try_send(&self, line: LogLine) -> bool {
        match self.queue.try_send(line) {
            Ok(()) => {
                self.metrics
                    .set_queue_len(self.queue.max_capacity() - self.queue.capacity());
                true
            }
            Err(TrySendError::Full(_)) => {
                self.metrics.record_queue_full();
                observability::record_line_dropped("queue_full");
                warn!(sink = %self.name, "Collector backlog full, line dropped");
                false
            }
            Err(TrySendError::Closed(_)) => {
                error!(sink = %self.name, "Delivery worker is gone");
                false
            }
        }
    }

    /// Stop accepting lines, deliver the backlog, then close the connection
    #[instrument(name = "sink_handle_shutdown", skip(self), fields(sink = %self.name))]
    pub async fn shutdown(self) {
        let Self {
            name,
            queue,
            worker,
            ..
        } = self;

        drop(queue);
        if let Err(e) = worker.await {
            error!(sink = %name, error = ?e, "Delivery worker panicked");
        }
        debug!(sink = %name, "Collector closed");
    }
}

/// Write queued lines in order until every producer is gone
///
/// A failed write is counted and logged, and the next line is still
/// attempted on the same connection.
#[instrument(name = "sink_delivery", skip(sink, pending, metrics), fields(sink = %name))]
async fn deliver<S: LineSink>(
    mut sink: S,
    mut pending: mpsc::Receiver<LogLine>,
    metrics: Arc<SinkMetrics>,
    name: String,
) {
    debug!("Delivery started");

    while let Some(line) = pending.recv().await {
        metrics.set_queue_len(pending.len());

        let delivered = sink.write(&line).await;
        observability::record_sink_write(&name, delivered.is_ok());
        match delivered {
            Ok(()) => metrics.record_write(),
            Err(e) => {
                metrics.record_failure();
                error!(error = %e, record = %line, "Line not delivered");
            }
        }
    }

    if let Err(e) = sink.flush().await {
        error!(error = %e, "Flush before close failed");
    }
    if let Err(e) = sink.close().await {
        error!(error = %e, "Close failed");
    }

    debug!("Delivery stopped");
}
