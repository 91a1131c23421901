//! SinkEndpoint - one configured remote collector

use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote TCP collector address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SinkEndpoint {
    /// Host name or IP literal
    pub host: String,

    /// TCP port, never 0
    pub port: u16,
}

impl SinkEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port` form, also used as the sink name in logs and metrics
    pub fn address(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SinkEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
