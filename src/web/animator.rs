//! [`Animator`] over `requestAnimationFrame`.

use navslide_ui::{AnimationHandle, Animator, Easing, Height, Selector, SharedDocument, Tween};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;
use web_time::Instant;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Default)]
struct AnimatorInner {
    next_id: u64,
    running: HashSet<AnimationHandle>,
}

pub struct WebAnimator {
    window: Window,
    document: SharedDocument,
    easing: Easing,
    inner: Rc<RefCell<AnimatorInner>>,
}

impl WebAnimator {
    pub fn new(window: Window, document: SharedDocument, easing: Easing) -> Self {
        Self {
            window,
            document,
            easing,
            inner: Rc::new(RefCell::new(AnimatorInner::default())),
        }
    }
}

fn request_frame(window: &Window, frame: &FrameCallback) {
    if let Some(callback) = frame.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

impl Animator for WebAnimator {
    fn animate(
        &self,
        target: &Selector,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> AnimationHandle {
        let handle = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let handle = AnimationHandle(inner.next_id);
            inner.running.insert(handle);
            handle
        };

        self.document
            .borrow_mut()
            .set_height(target, Height::Px(from));

        let tween = Tween::new(from, to, duration).easing(self.easing);
        let started = Instant::now();
        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let next_frame = frame.clone();
        let window = self.window.clone();
        let document = self.document.clone();
        let registry = Rc::downgrade(&self.inner);
        let target = target.clone();

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let alive = registry
                .upgrade()
                .is_some_and(|r| r.borrow().running.contains(&handle));
            if !alive {
                // stopped: drop our handle so the closure is cleaned up
                let _ = next_frame.borrow_mut().take();
                return;
            }

            let elapsed = started.elapsed();
            document
                .borrow_mut()
                .set_height(&target, Height::Px(tween.value_at(elapsed)));

            if tween.is_finished(elapsed) {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().running.remove(&handle);
                }
                let _ = next_frame.borrow_mut().take();
                return;
            }
            request_frame(&window, &next_frame);
        }) as Box<dyn FnMut()>));

        request_frame(&self.window, &frame);
        handle
    }

    fn stop(&self, handle: AnimationHandle) {
        self.inner.borrow_mut().running.remove(&handle);
    }

    fn is_running(&self, handle: AnimationHandle) -> bool {
        self.inner.borrow().running.contains(&handle)
    }
}
