//! RelaySettings - Config Loader output
//!
//! Everything the relay reads at startup. The sink list stays a raw string so
//! malformed entries are rejected one by one instead of failing the whole file.

use serde::{Deserialize, Serialize};

/// Relay startup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    /// Comma separated `host:port` list, e.g. `boris.local:10000, hilda:1234`
    #[serde(default)]
    pub splunks: Option<String>,

    /// Per-sink queue capacity
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Also emit every forwarded line through the process log
    #[serde(default)]
    pub echo: bool,
}

fn default_queue_capacity() -> usize {
    1024
}

impl RelaySettings {
    /// Settings with the given sink list and defaults elsewhere
    pub fn with_splunks(splunks: impl Into<String>) -> Self {
        Self {
            splunks: Some(splunks.into()),
            ..Self::default()
        }
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            splunks: None,
            queue_capacity: default_queue_capacity(),
            echo: false,
        }
    }
}
