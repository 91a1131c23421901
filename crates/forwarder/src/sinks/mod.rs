//! Sink implementations
//!
//! Contains TcpSink (remote collectors) and TraceSink (process log echo).

mod tcp;
mod trace;

pub use self::tcp::TcpSink;
pub use self::trace::TraceSink;
