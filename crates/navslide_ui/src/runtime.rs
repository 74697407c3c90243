//! Simulated clock implementing [`Animator`] and [`Scheduler`].
//!
//! Time only moves when [`SimulatedRuntime::advance`] is called. Each step
//! first writes tween frames, then fires every timer that is due, in
//! deadline order (ties in scheduling order). Steps are at most
//! [`SIMULATED_FRAME`] apart and always land exactly on timer deadlines.

use crate::animation::{AnimationHandle, Animator, Easing, Tween};
use crate::constants::SIMULATED_FRAME;
use crate::dom::{Height, Selector};
use crate::host::{Host, SharedDocument};
use crate::memory_dom::MemoryDocument;
use crate::scheduler::{Scheduler, Task, TaskToken};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct PendingTimer {
    token: TaskToken,
    due: Duration,
    task: Task,
}

#[derive(Debug, Clone)]
struct ActiveTween {
    handle: AnimationHandle,
    target: Selector,
    tween: Tween,
    started: Duration,
}

#[derive(Default)]
struct RuntimeInner {
    now: Duration,
    next_id: u64,
    timers: Vec<PendingTimer>,
    tweens: Vec<ActiveTween>,
}

impl RuntimeInner {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Remove and return the earliest timer due at or before `now`.
    fn take_due_timer(&mut self) -> Option<PendingTimer> {
        let now = self.now;
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.token))
            .map(|(i, _)| i)?;
        Some(self.timers.remove(index))
    }
}

/// Manual clock driving animations and deferred tasks against a document.
pub struct SimulatedRuntime {
    document: SharedDocument,
    easing: Easing,
    inner: RefCell<RuntimeInner>,
}

impl SimulatedRuntime {
    pub fn new(document: SharedDocument, easing: Easing) -> Self {
        Self {
            document,
            easing,
            inner: RefCell::new(RuntimeInner::default()),
        }
    }

    /// Current simulated time since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of timers scheduled and not yet run or cancelled.
    pub fn pending_tasks(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// The tween behind a running animation.
    pub fn tween(&self, handle: AnimationHandle) -> Option<Tween> {
        self.inner
            .borrow()
            .tweens
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.tween)
    }

    /// The most recently started running tween on `target`.
    pub fn tween_on(&self, target: &Selector) -> Option<Tween> {
        self.inner
            .borrow()
            .tweens
            .iter()
            .rev()
            .find(|t| &t.target == target)
            .map(|t| t.tween)
    }

    /// Move the clock forward, writing frames and firing due timers.
    pub fn advance(&self, dt: Duration) {
        let target = self.now() + dt;

        loop {
            let step = {
                let inner = self.inner.borrow();
                let frame = inner.now + SIMULATED_FRAME;
                let next_due = inner.timers.iter().map(|t| t.due).min();
                let mut step = frame.min(target);
                if let Some(due) = next_due {
                    step = step.min(due.max(inner.now));
                }
                step
            };

            self.inner.borrow_mut().now = step;
            self.write_frames();
            self.run_due_timers();

            if step >= target {
                break;
            }
        }
    }

    /// Advance until no timers remain, returning the time spent.
    pub fn run_until_idle(&self) -> Duration {
        let start = self.now();
        loop {
            let next_due = self.inner.borrow().timers.iter().map(|t| t.due).min();
            let Some(due) = next_due else {
                break;
            };
            self.advance(due.saturating_sub(self.now()));
        }
        // Let any tween that outlives the last timer finish too.
        let longest = {
            let inner = self.inner.borrow();
            inner
                .tweens
                .iter()
                .map(|t| (t.started + t.tween.duration).saturating_sub(inner.now))
                .max()
        };
        if let Some(rest) = longest {
            self.advance(rest);
        }
        self.now() - start
    }

    fn write_frames(&self) {
        let (frames, finished) = {
            let mut inner = self.inner.borrow_mut();
            let now = inner.now;
            let frames: Vec<(Selector, f32)> = inner
                .tweens
                .iter()
                .map(|t| (t.target.clone(), t.tween.value_at(now - t.started)))
                .collect();
            let before = inner.tweens.len();
            inner
                .tweens
                .retain(|t| !t.tween.is_finished(now - t.started));
            (frames, before - inner.tweens.len())
        };

        let mut document = self.document.borrow_mut();
        for (target, height) in frames {
            log::trace!("frame: {} height={:.1}", target, height);
            document.set_height(&target, Height::Px(height));
        }
        if finished > 0 {
            log::trace!("{} animation(s) finished", finished);
        }
    }

    fn run_due_timers(&self) {
        loop {
            let Some(timer) = self.inner.borrow_mut().take_due_timer() else {
                break;
            };
            log::trace!("timer {:?} fired at {:?}", timer.token, timer.due);
            (timer.task)();
        }
    }
}

impl Animator for SimulatedRuntime {
    fn animate(
        &self,
        target: &Selector,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> AnimationHandle {
        let handle = {
            let mut inner = self.inner.borrow_mut();
            let handle = AnimationHandle(inner.next_id());
            let started = inner.now;
            inner.tweens.push(ActiveTween {
                handle,
                target: target.clone(),
                tween: Tween::new(from, to, duration).easing(self.easing),
                started,
            });
            handle
        };
        self.document
            .borrow_mut()
            .set_height(target, Height::Px(from));
        handle
    }

    fn stop(&self, handle: AnimationHandle) {
        self.inner.borrow_mut().tweens.retain(|t| t.handle != handle);
    }

    fn is_running(&self, handle: AnimationHandle) -> bool {
        self.inner.borrow().tweens.iter().any(|t| t.handle == handle)
    }
}

impl Scheduler for SimulatedRuntime {
    fn schedule(&self, delay: Duration, task: Task) -> TaskToken {
        let mut inner = self.inner.borrow_mut();
        let token = TaskToken(inner.next_id());
        let due = inner.now + delay;
        inner.timers.push(PendingTimer { token, due, task });
        token
    }

    fn cancel(&self, token: TaskToken) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.timers.len();
        inner.timers.retain(|t| t.token != token);
        inner.timers.len() != before
    }
}

/// An in-memory document wired to a simulated runtime.
pub struct Simulation {
    pub document: Rc<RefCell<MemoryDocument>>,
    pub runtime: Rc<SimulatedRuntime>,
}

impl Simulation {
    pub fn new(document: MemoryDocument, easing: Easing) -> Self {
        let document = Rc::new(RefCell::new(document));
        let shared: SharedDocument = document.clone();
        let runtime = Rc::new(SimulatedRuntime::new(shared, easing));
        Self { document, runtime }
    }

    /// Host whose capabilities all point at this simulation.
    pub fn host(&self) -> Host {
        let document: SharedDocument = self.document.clone();
        Host::new(document, self.runtime.clone(), self.runtime.clone())
    }

    pub fn advance(&self, dt: Duration) {
        self.runtime.advance(dt);
    }
}

/// Animator whose frames only land when [`LaggingAnimator::late_frame`] is
/// called, like a browser tab whose animation frames are throttled while
/// its timers keep firing.
#[cfg(test)]
pub(crate) struct LaggingAnimator {
    document: SharedDocument,
    running: RefCell<Vec<(AnimationHandle, Selector, f32)>>,
    next_id: std::cell::Cell<u64>,
}

#[cfg(test)]
impl LaggingAnimator {
    pub(crate) fn new(document: SharedDocument) -> Self {
        Self {
            document,
            running: RefCell::new(Vec::new()),
            next_id: std::cell::Cell::new(0),
        }
    }

    /// Write the final frame of every animation still running.
    pub(crate) fn late_frame(&self) {
        let finished: Vec<_> = self.running.borrow_mut().drain(..).collect();
        let mut document = self.document.borrow_mut();
        for (_, target, to) in finished {
            document.set_height(&target, Height::Px(to));
        }
    }
}

#[cfg(test)]
impl Animator for LaggingAnimator {
    fn animate(
        &self,
        target: &Selector,
        from: f32,
        to: f32,
        _duration: Duration,
    ) -> AnimationHandle {
        self.next_id.set(self.next_id.get() + 1);
        let handle = AnimationHandle(self.next_id.get());
        self.document.borrow_mut().set_height(target, Height::Px(from));
        self.running.borrow_mut().push((handle, target.clone(), to));
        handle
    }

    fn stop(&self, handle: AnimationHandle) {
        self.running.borrow_mut().retain(|(h, _, _)| *h != handle);
    }

    fn is_running(&self, handle: AnimationHandle) -> bool {
        self.running.borrow().iter().any(|(h, _, _)| *h == handle)
    }
}
