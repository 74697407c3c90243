//! Capability bundle handed to the toggle

use crate::animation::Animator;
use crate::dom::Document;
use crate::scheduler::Scheduler;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Document shared between the toggle, the animator and deferred tasks.
pub type SharedDocument = Rc<RefCell<dyn Document>>;

/// Everything the toggle needs from its environment.
///
/// Cloning is cheap; all three capabilities are shared handles.
#[derive(Clone)]
pub struct Host {
    pub document: SharedDocument,
    pub animator: Rc<dyn Animator>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl Host {
    pub fn new(
        document: SharedDocument,
        animator: Rc<dyn Animator>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            document,
            animator,
            scheduler,
        }
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
