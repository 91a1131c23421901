//! Forwarder - dedup then fan-out
//!
//! Called from host callbacks, possibly from several threads at once. The
//! dedup decision and the enqueue to every sink happen under one lock, so
//! concurrent emissions are totally ordered and never torn.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, instrument};

use contracts::LogLine;

use crate::dedup::DedupFilter;
use crate::pool::SinkPool;

/// Result of one [`Forwarder::emit`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Identical to the previous line; nothing written
    Suppressed,
    /// Queued to `attempts` sinks
    Forwarded { attempts: usize },
}

/// Entry point for formatted lines
pub struct Forwarder {
    dedup: Mutex<DedupFilter>,
    pool: SinkPool,
}

impl Forwarder {
    pub fn new(pool: SinkPool) -> Self {
        Self {
            dedup: Mutex::new(DedupFilter::new()),
            pool,
        }
    }

    /// The sinks this forwarder writes to
    pub fn pool(&self) -> &SinkPool {
        &self.pool
    }

    /// Forward `line` to every active sink unless it repeats the last one
    ///
    /// Never blocks on I/O and never fails: sink problems are handled and
    /// logged by each sink's worker.
    #[instrument(name = "forwarder_emit", skip_all, fields(bytes = line.len()))]
    pub fn emit(&self, line: LogLine) -> Emission {
        let mut dedup = self.dedup.lock().unwrap_or_else(PoisonError::into_inner);

        if !dedup.should_emit(&line) {
            observability::record_line_suppressed();
            debug!("Duplicate line suppressed");
            return Emission::Suppressed;
        }

        let attempts = self.pool.write(&line);
        observability::record_line_emitted();
        Emission::Forwarded { attempts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::SinkHandle;
    use crate::testing::{line, MockSink};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_repeat_is_written_once_per_sink() {
        let (sink1, received1) = MockSink::new("sink1");
        let (sink2, received2) = MockSink::new("sink2");
        let pool = SinkPool::with_handles(vec![
            SinkHandle::spawn(sink1, 10),
            SinkHandle::spawn(sink2, 10),
        ]);
        let forwarder = Forwarder::new(pool);

        assert_eq!(
            forwarder.emit(line("action=a")),
            Emission::Forwarded { attempts: 2 }
        );
        assert_eq!(forwarder.emit(line("action=a")), Emission::Suppressed);

        forwarder.pool().close_all().await;
        assert_eq!(received1.lock().unwrap().len(), 1);
        assert_eq!(received2.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_a_b_a_writes_three_lines() {
        let (sink, received) = MockSink::new("sink");
        let forwarder = Forwarder::new(SinkPool::with_handles(vec![SinkHandle::spawn(sink, 10)]));

        forwarder.emit(line("action=a"));
        forwarder.emit(line("action=b"));
        forwarder.emit(line("action=a"));

        forwarder.pool().close_all().await;
        let received = received.lock().unwrap();
        assert_eq!(
            *received,
            vec![line("action=a"), line("action=b"), line("action=a")]
        );
    }

    #[tokio::test]
    async fn test_failing_sink_does_not_block_others() {
        let failing = SinkHandle::spawn(MockSink::failing("failing"), 10);
        let (healthy, received) = MockSink::new("healthy");
        let healthy = SinkHandle::spawn(healthy, 10);
        let failing_metrics = Arc::clone(failing.metrics());

        let forwarder = Forwarder::new(SinkPool::with_handles(vec![failing, healthy]));
        for i in 0..3 {
            assert_eq!(
                forwarder.emit(line(&format!("action=a n={i}"))),
                Emission::Forwarded { attempts: 2 }
            );
        }

        forwarder.pool().close_all().await;
        assert_eq!(failing_metrics.failures(), 3);
        assert_eq!(received.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_each_accepted_line_is_attempted_once_per_sink() {
        let (first, _) = MockSink::new("first");
        let (second, _) = MockSink::new("second");
        let handles = vec![
            SinkHandle::spawn(first, 10),
            SinkHandle::spawn(second, 10),
            SinkHandle::spawn(MockSink::failing("failing"), 10),
        ];
        let metrics: Vec<_> = handles.iter().map(|h| Arc::clone(h.metrics())).collect();
        let forwarder = Forwarder::new(SinkPool::with_handles(handles));

        let mut accepted = 0;
        for body in ["action=a", "action=a", "action=b", "action=c", "action=c"] {
            if let Emission::Forwarded { attempts } = forwarder.emit(line(body)) {
                assert_eq!(attempts, 3);
                accepted += 1;
            }
        }
        assert_eq!(accepted, 3);

        forwarder.pool().close_all().await;
        for sink in &metrics {
            assert_eq!(sink.attempts(), 3);
            assert_eq!(sink.queue_full_drops(), 0);
        }
        assert_eq!(metrics[2].failures(), 3);
    }

    #[tokio::test]
    async fn test_no_sinks_is_noop() {
        let forwarder = Forwarder::new(SinkPool::new());
        assert_eq!(
            forwarder.emit(line("action=a")),
            Emission::Forwarded { attempts: 0 }
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_emitters_keep_sinks_consistent() {
        let (sink1, received1) = MockSink::new("sink1");
        let (sink2, received2) = MockSink::new("sink2");
        let forwarder = Arc::new(Forwarder::new(SinkPool::with_handles(vec![
            SinkHandle::spawn(sink1, 1000),
            SinkHandle::spawn(sink2, 1000),
        ])));

        let mut threads = Vec::new();
        for t in 0..4 {
            let forwarder = Arc::clone(&forwarder);
            threads.push(std::thread::spawn(move || {
                for i in 0..50 {
                    forwarder.emit(line(&format!("action=t{t} n={i}")));
                }
            }));
        }
        for thread in threads {
            thread.join().unwrap();
        }

        forwarder.pool().close_all().await;
        let received1 = received1.lock().unwrap();
        let received2 = received2.lock().unwrap();
        assert_eq!(received1.len(), 200);
        assert_eq!(*received1, *received2);
    }
}
