//! LogLine - formatter output
//!
//! An immutable, already terminated record ready for the wire.

use std::fmt;
use std::sync::Arc;

/// Record boundary appended to every line: CRLF followed by an empty line.
pub const RECORD_TERMINATOR: &str = "\r\n\r\n";

/// One formatted log record
///
/// Always ends with [`RECORD_TERMINATOR`]. Cloning is cheap, so the same line
/// can be queued for every sink without copying the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogLine(Arc<str>);

impl LogLine {
    /// Join a rendered timestamp and an action body into a terminated record
    pub fn compose(timestamp: &str, body: &str) -> Self {
        let mut text =
            String::with_capacity(timestamp.len() + 1 + body.len() + RECORD_TERMINATOR.len());
        text.push_str(timestamp);
        text.push(' ');
        text.push_str(body);
        text.push_str(RECORD_TERMINATOR);
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 wire encoding
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Line text without the record terminator
    pub fn record(&self) -> &str {
        let text: &str = &self.0;
        text.strip_suffix(RECORD_TERMINATOR).unwrap_or(text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.record())
    }
}
