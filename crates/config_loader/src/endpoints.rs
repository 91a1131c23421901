//! Sink list parsing
//!
//! `host:port` entries separated by commas, whitespace around each part
//! ignored. A bad entry only drops itself.

use contracts::{ContractError, SinkEndpoint};
use tracing::warn;

/// Parse the configured sink list
///
/// `None` or a blank string yields no sinks. Malformed entries are logged
/// and skipped; the remaining entries are still returned in order.
pub fn parse_endpoints(raw: Option<&str>) -> Vec<SinkEndpoint> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match parse_endpoint(token) {
            Ok(endpoint) => Some(endpoint),
            Err(e) => {
                warn!(token, error = %e, "Ignoring malformed sink entry");
                None
            }
        })
        .collect()
}

/// Parse one `host:port` entry
pub fn parse_endpoint(token: &str) -> Result<SinkEndpoint, ContractError> {
    let (host, port) = token
        .rsplit_once(':')
        .ok_or_else(|| ContractError::malformed_endpoint(token, "missing ':<port>'"))?;

    let host = host.trim();
    if host.is_empty() {
        return Err(ContractError::malformed_endpoint(token, "empty host"));
    }

    let port = port.trim();
    let port: u16 = port
        .parse()
        .map_err(|e| ContractError::malformed_endpoint(token, format!("invalid port '{port}': {e}")))?;
    if port == 0 {
        return Err(ContractError::malformed_endpoint(token, "port must be 1-65535"));
    }

    Ok(SinkEndpoint::new(host, port))
}
