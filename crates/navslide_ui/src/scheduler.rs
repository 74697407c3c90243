//! One-shot deferred tasks

use std::time::Duration;

/// A task run once after its delay.
pub type Task = Box<dyn FnOnce()>;

/// Cancellation token returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(pub u64);

/// Capability that runs a task once after a delay (`setTimeout`).
///
/// Tasks never run synchronously inside `schedule`.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskToken;

    /// Cancel a pending task. Returns `false` if it already ran or was
    /// cancelled before.
    fn cancel(&self, token: TaskToken) -> bool;
}
