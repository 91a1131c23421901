//! Host boundary traits
//!
//! The host application owns event delivery and its cooperative task queue.
//! These traits are the only things the relay needs from it.

use crate::{Actor, Location};

/// A unit of deferred work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Host cooperative queue
///
/// Tasks handed to `schedule` must run after the current event-delivery
/// cycle completes, exactly once, on the host's own schedule.
pub trait Scheduler: Send + Sync {
    /// Enqueue a continuation
    fn schedule(&self, task: Task);
}

/// Live view of an entity that was just damaged
///
/// Queried only from a deferred task, once the host has finalized whether
/// the entity survived.
pub trait EntityState: Send + Sync {
    /// Whether the entity is dead
    fn is_dead(&self) -> bool;

    /// Naming info, or `None` when the entity is not a living actor
    fn actor(&self) -> Option<Actor>;

    /// Current position
    fn location(&self) -> Location;
}
