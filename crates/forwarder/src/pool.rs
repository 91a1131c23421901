//! SinkPool - the set of active sinks
//!
//! Connections are opened by independent background tasks; each one that
//! succeeds appends its sink to the shared set. A failed attempt only drops
//! that endpoint and is never retried.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use contracts::{LogLine, SinkEndpoint};

use crate::handle::SinkHandle;
use crate::metrics::MetricsSnapshot;
use crate::sinks::TcpSink;

#[derive(Default)]
struct ActiveSinks {
    handles: Vec<SinkHandle>,
    /// Set by `close_all`; late connections are shut down instead of added
    closed: bool,
}

/// Shared, append-only set of sinks
#[derive(Clone, Default)]
pub struct SinkPool {
    active: Arc<Mutex<ActiveSinks>>,
    connecting: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl SinkPool {
    /// Empty pool; writes are no-ops until a sink is attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool over already running sinks
    pub fn with_handles(handles: Vec<SinkHandle>) -> Self {
        let pool = Self::new();
        for handle in handles {
            pool.attach(handle);
        }
        pool
    }

    /// Start one connection attempt per endpoint and return immediately
    ///
    /// Attempts run concurrently on `runtime`; see [`SinkPool::wait_for_connections`].
    #[instrument(name = "sink_pool_connect_all", skip_all, fields(endpoints = endpoints.len()))]
    pub fn connect_all(endpoints: &[SinkEndpoint], queue_capacity: usize, runtime: &Handle) -> Self {
        let pool = Self::new();
        for endpoint in endpoints {
            pool.spawn_connect(endpoint.clone(), queue_capacity, runtime);
        }
        pool
    }

    /// Start a background connection attempt for one endpoint
    pub fn spawn_connect(&self, endpoint: SinkEndpoint, queue_capacity: usize, runtime: &Handle) {
        let pool = self.clone();
        let task = runtime.spawn(async move {
            match TcpSink::connect(&endpoint).await {
                Ok(sink) => {
                    observability::record_sink_connection(true);
                    info!(sink = %endpoint, "Added collector");
                    pool.attach(SinkHandle::spawn(sink, queue_capacity));
                }
                Err(e) => {
                    observability::record_sink_connection(false);
                    error!(sink = %endpoint, error = %e, "Could not connect to collector");
                }
            }
        });
        lock(&self.connecting).push(task);
    }

    /// Wait until every connection attempt started so far has finished
    pub async fn wait_for_connections(&self) {
        let tasks = std::mem::take(&mut *lock(&self.connecting));
        for task in tasks {
            if let Err(e) = task.await {
                error!(error = ?e, "Connection task panicked");
            }
        }
    }

    /// Add a running sink to the active set
    ///
    /// Returns false when the pool is already closed; the handle is then
    /// dropped, which lets its worker close the sink.
    pub fn attach(&self, handle: SinkHandle) -> bool {
        let mut active = lock(&self.active);
        if active.closed {
            debug!(sink = %handle.name(), "Pool closed, discarding late sink");
            return false;
        }
        active.handles.push(handle);
        observability::set_active_sinks(active.handles.len());
        true
    }

    /// Queue `line` to every active sink
    ///
    /// Returns the number of write attempts made, one per active sink. A
    /// full or dead queue on one sink does not affect the others.
    pub fn write(&self, line: &LogLine) -> usize {
        let active = lock(&self.active);
        for handle in &active.handles {
            handle.try_send(line.clone());
        }
        active.handles.len()
    }

    /// Number of active sinks
    pub fn active_count(&self) -> usize {
        lock(&self.active).handles.len()
    }

    /// Counters of every active sink, by name
    pub fn metrics(&self) -> Vec<(String, MetricsSnapshot)> {
        lock(&self.active)
            .handles
            .iter()
            .map(|h| (h.name().to_string(), h.metrics().snapshot()))
            .collect()
    }

    /// Close every active sink
    ///
    /// Queued lines are written first. Close failures are logged per sink and
    /// never stop the remaining sinks from being closed.
    #[instrument(name = "sink_pool_close_all", skip(self))]
    pub async fn close_all(&self) {
        let handles = {
            let mut active = lock(&self.active);
            active.closed = true;
            std::mem::take(&mut active.handles)
        };
        observability::set_active_sinks(0);

        let count = handles.len();
        for handle in handles {
            handle.shutdown().await;
        }
        info!(sinks = count, "All sinks closed");
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic elsewhere must not take logging down with it.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
