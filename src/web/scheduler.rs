//! [`Scheduler`] over `gloo_timers` one-shot timeouts.

use gloo_timers::callback::Timeout;
use navslide_ui::{Scheduler, Task, TaskToken};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct SchedulerInner {
    next_id: u64,
    pending: HashMap<TaskToken, Timeout>,
}

#[derive(Default)]
pub struct WebScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl WebScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskToken {
        let token = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            TaskToken(inner.next_id)
        };

        let registry = Rc::downgrade(&self.inner);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            // Forget the fired handle; dropping it would clear a finished timer
            if let Some(fired) = registry
                .upgrade()
                .and_then(|r| r.borrow_mut().pending.remove(&token))
            {
                let _ = fired.forget();
            }
            log::trace!("timeout {:?} fired", token);
            task();
        });

        self.inner.borrow_mut().pending.insert(token, timeout);
        token
    }

    fn cancel(&self, token: TaskToken) -> bool {
        let Some(timeout) = self.inner.borrow_mut().pending.remove(&token) else {
            return false;
        };
        timeout.cancel();
        true
    }
}
