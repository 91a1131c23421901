//! # Contracts
//!
//! Shared interface contracts between the relay crates: event records, host
//! boundary traits, the formatted line type and the sink abstraction.
//! Every other crate depends on this one; it depends on none of them.
//!
//! ## Data flow
//! host event -> `Dispatcher` -> `format_line` -> `Forwarder` -> N `LineSink`s

mod endpoint;
mod error;
mod event;
mod host;
mod line;
mod settings;
mod sink;

pub use endpoint::SinkEndpoint;
pub use error::*;
pub use event::*;
pub use host::{EntityState, Scheduler, Task};
pub use line::{LogLine, RECORD_TERMINATOR};
pub use settings::*;
pub use sink::*;
