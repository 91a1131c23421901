//! TickQueue - a cooperative run-later queue
//!
//! Hosts that already own a scheduler implement [`Scheduler`] themselves.
//! This one suits hosts that drive a loop and can call `run_pending` once
//! per cycle.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use contracts::{Scheduler, Task};

/// FIFO of tasks run on the next drain
#[derive(Default)]
pub struct TickQueue {
    pending: Mutex<VecDeque<Task>>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every task queued before this call, in order
    ///
    /// Tasks scheduled while draining wait for the next call. Returns the
    /// number of tasks run.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.lock());
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Task>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for TickQueue {
    fn schedule(&self, task: Task) {
        self.lock().push_back(task);
    }
}
