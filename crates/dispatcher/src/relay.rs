//! Relay - start/stop lifecycle
//!
//! Wires settings -> SinkPool -> Forwarder -> Dispatcher. Startup never
//! waits on a collector; shutdown closes whatever connected.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{info, instrument};

use config_loader::parse_endpoints;
use contracts::{ContractError, RelaySettings, Scheduler};
use forwarder::{Forwarder, SinkHandle, SinkPool, TraceSink};

use crate::dispatcher::Dispatcher;

/// A running relay
pub struct Relay {
    dispatcher: Dispatcher,
    forwarder: Arc<Forwarder>,
}

impl Relay {
    /// Start connecting to every configured collector and return at once
    ///
    /// Malformed sink entries are logged and skipped. Background work runs
    /// on `runtime`; deferred host work goes to `scheduler`.
    ///
    /// # Errors
    /// `ContractError::ConfigValidation` when `queue_capacity` is zero.
    #[instrument(name = "relay_start", skip_all)]
    pub fn start(
        settings: &RelaySettings,
        runtime: &Handle,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, ContractError> {
        if settings.queue_capacity == 0 {
            return Err(ContractError::config_validation(
                "queue_capacity",
                "must be greater than 0",
            ));
        }

        let endpoints = parse_endpoints(settings.splunks.as_deref());
        let pool = SinkPool::connect_all(&endpoints, settings.queue_capacity, runtime);

        if settings.echo {
            let _guard = runtime.enter();
            pool.attach(SinkHandle::spawn(
                TraceSink::new("echo"),
                settings.queue_capacity,
            ));
        }

        let forwarder = Arc::new(Forwarder::new(pool));
        let dispatcher = Dispatcher::new(Arc::clone(&forwarder), scheduler);

        info!(
            collectors = endpoints.len(),
            echo = settings.echo,
            "Relay started"
        );

        Ok(Self {
            dispatcher,
            forwarder,
        })
    }

    /// Entry points for host notifications
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn forwarder(&self) -> &Arc<Forwarder> {
        &self.forwarder
    }

    /// Wait for every startup connection attempt to finish
    pub async fn wait_for_connections(&self) {
        self.forwarder.pool().wait_for_connections().await;
    }

    /// Close every sink
    #[instrument(name = "relay_stop", skip(self))]
    pub async fn stop(self) {
        self.forwarder.pool().close_all().await;
        info!("Relay stopped");
    }
}
