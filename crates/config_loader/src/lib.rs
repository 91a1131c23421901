//! # Config Loader
//!
//! Turns the host's raw sink list into `SinkEndpoint`s.
//!
//! The host owns where settings come from; this crate only reads the one
//! comma separated value and rejects malformed entries individually.
//!
//! # Example
//!
//! ```
//! use config_loader::parse_endpoints;
//!
//! let endpoints = parse_endpoints(Some("boris.local:10000, hilda:1234"));
//! assert_eq!(endpoints.len(), 2);
//! ```

mod endpoints;

pub use endpoints::{parse_endpoint, parse_endpoints};
