//! DedupFilter - single-slot repeat suppression
//!
//! The host sometimes fires the same occurrence more than once. Only the
//! immediately preceding line is remembered; a repeat separated by any other
//! line goes through.

use contracts::LogLine;

/// Remembers the last accepted line
#[derive(Debug, Default)]
pub struct DedupFilter {
    last: Option<LogLine>,
}

impl DedupFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `line` should be emitted; remembers it when it is
    pub fn should_emit(&mut self, line: &LogLine) -> bool {
        if self.last.as_ref() == Some(line) {
            return false;
        }
        self.last = Some(line.clone());
        true
    }

    /// Last accepted line, if any
    pub fn last(&self) -> Option<&LogLine> {
        self.last.as_ref()
    }
}
