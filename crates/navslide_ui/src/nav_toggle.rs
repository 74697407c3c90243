//! Navigation toggle component
//!
//! [`NavToggle`] owns the panel's [`PanelState`] and projects it onto the
//! document: the trigger and wrapper marker classes follow the new state
//! immediately on activation, while the panel's own marker class and inline
//! style are normalized by a deferred settle task once the height animation
//! is done.
//!
//! Activating again before the settle has run cancels the pending settle
//! and stops the running animation; the new transition starts from the
//! panel's current rendered height. At most one settle is ever pending.

use crate::animation::AnimationHandle;
use crate::callback::Callback;
use crate::config::ToggleConfig;
use crate::dom::Selector;
use crate::error::ToggleError;
use crate::expand::expand_down;
use crate::host::{Host, SharedDocument};
use crate::scheduler::{Task, TaskToken};
use crate::state::{PanelState, TogglePhase};
use std::cell::Cell;
use std::rc::Rc;

/// Settle bookkeeping shared with the deferred task.
#[derive(Debug, Default)]
struct Settlement {
    phase: Cell<TogglePhase>,
    pending: Cell<Option<TaskToken>>,
}

impl Settlement {
    fn begin(&self, target: PanelState, token: TaskToken) {
        self.phase.set(TogglePhase::toward(target));
        self.pending.set(Some(token));
    }

    fn finish(&self) {
        self.phase.set(TogglePhase::Settled);
        self.pending.set(None);
    }
}

/// A slide-down / slide-up navigation toggle bound to a document.
#[derive(Debug)]
pub struct NavToggle {
    config: ToggleConfig,
    host: Host,
    state: PanelState,
    settlement: Rc<Settlement>,
    animation: Option<AnimationHandle>,
    activations: u64,
    on_toggle: Callback<PanelState>,
    on_settle: Callback<PanelState>,
}

impl NavToggle {
    /// Bind to the trigger and panel named by `config`.
    ///
    /// Fails if either element is missing; callers treat that as "nothing to
    /// bind". The initial state is read from the panel's marker class.
    pub fn bind(config: ToggleConfig, host: Host) -> Result<Self, ToggleError> {
        config.validate()?;

        let state = {
            let document = host.document.borrow();
            for selector in [&config.trigger, &config.panel] {
                if !document.exists(selector) {
                    return Err(ToggleError::element_not_found(selector));
                }
            }
            if !document.exists(&config.wrapper) {
                log::debug!("no wrapper matches {}", config.wrapper);
            }

            if document.has_class(&config.panel, &config.panel_class) {
                PanelState::Expanded
            } else {
                PanelState::Collapsed
            }
        };

        log::debug!(
            "bound toggle {} -> {} ({})",
            config.trigger,
            config.panel,
            state.name()
        );

        Ok(Self {
            config,
            host,
            state,
            settlement: Rc::new(Settlement::default()),
            animation: None,
            activations: 0,
            on_toggle: Callback::none(),
            on_settle: Callback::none(),
        })
    }

    /// Set callback fired on each activation with the new target state.
    pub fn on_toggle<F>(mut self, callback: F) -> Self
    where
        F: Fn(PanelState) + 'static,
    {
        self.on_toggle = Callback::new(callback);
        self
    }

    /// Set callback fired when a transition has settled.
    pub fn on_settle<F>(mut self, callback: F) -> Self
    where
        F: Fn(PanelState) + 'static,
    {
        self.on_settle = Callback::new(callback);
        self
    }

    /// Logical state: the state the panel is in or is moving toward.
    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn phase(&self) -> TogglePhase {
        self.settlement.phase.get()
    }

    pub fn is_settled(&self) -> bool {
        self.phase().is_settled()
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Number of activations since binding.
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// The trigger was clicked: invert the panel state.
    ///
    /// Returns `false` when nothing happened because the panel is gone.
    pub fn activate(&mut self) -> bool {
        if !self.host.document.borrow().exists(&self.config.panel) {
            log::warn!("panel {} missing, ignoring activation", self.config.panel);
            return false;
        }

        self.interrupt();
        self.activations += 1;

        let target = self.state.toggled();
        log::debug!(
            "activation #{}: {} -> {}",
            self.activations,
            self.state.name(),
            target.name()
        );

        match target {
            PanelState::Collapsed => self.slide_up(),
            PanelState::Expanded => self.slide_down(),
        }
    }

    /// Activate only if the panel is not already open or opening.
    pub fn open(&mut self) -> bool {
        if self.state.is_expanded() {
            return false;
        }
        self.activate()
    }

    /// Activate only if the panel is not already closed or closing.
    pub fn close(&mut self) -> bool {
        if !self.state.is_expanded() {
            return false;
        }
        self.activate()
    }

    /// Stop any running transition and release the document.
    ///
    /// The document is left exactly as it is at this moment.
    pub fn unbind(mut self) {
        self.interrupt();
        log::debug!("unbound toggle {}", self.config.trigger);
    }

    /// Cancel a pending settle and stop the running animation.
    fn interrupt(&mut self) {
        if let Some(token) = self.settlement.pending.take() {
            if self.host.scheduler.cancel(token) {
                log::debug!("cancelled pending settle {:?}", token);
            }
        }
        if let Some(animation) = self.animation.take() {
            self.host.animator.stop(animation);
        }
        self.settlement.finish();
    }

    fn slide_up(&mut self) -> bool {
        let panel = &self.config.panel;
        let from = self.host.document.borrow().height(panel).unwrap_or(0.0);
        let duration = self.config.duration();

        log::debug!("collapse {}: {:.1} -> 0 over {:?}", panel, from, duration);
        let animation = self.host.animator.animate(panel, from, 0.0, duration);
        self.animation = Some(animation);

        self.state = PanelState::Collapsed;
        self.project_classes();

        let task = self.settle_task(PanelState::Collapsed, animation);
        let token = self
            .host
            .scheduler
            .schedule(self.config.collapse_settle_delay(), task);
        self.settlement.begin(PanelState::Collapsed, token);

        self.on_toggle.emit(self.state);
        true
    }

    fn slide_down(&mut self) -> bool {
        let settlement = self.settlement.clone();
        let on_settle = self.on_settle.clone();
        let result = expand_down(
            &self.host,
            &self.config.panel,
            &self.config.panel_class,
            self.config.duration(),
            self.config.expand_settle_buffer(),
            move || {
                settlement.finish();
                on_settle.emit(PanelState::Expanded);
            },
        );

        let transition = match result {
            Ok((transition, _)) => transition,
            Err(err) => {
                log::warn!("expand {} failed: {}", self.config.panel, err);
                return false;
            }
        };

        self.animation = Some(transition.animation);
        self.state = PanelState::Expanded;
        self.project_classes();
        self.settlement
            .begin(PanelState::Expanded, transition.settle);

        self.on_toggle.emit(self.state);
        true
    }

    /// Mirror the logical state onto the trigger and wrapper classes.
    fn project_classes(&self) {
        let open = self.state.is_expanded();
        let mut document = self.host.document.borrow_mut();
        document.set_class(&self.config.trigger, &self.config.trigger_class, open);
        document.set_class(&self.config.wrapper, &self.config.wrapper_class, open);
    }

    /// Deferred normalization after a collapse.
    fn settle_task(&self, settled: PanelState, animation: AnimationHandle) -> Task {
        let document: SharedDocument = self.host.document.clone();
        let animator = self.host.animator.clone();
        let panel: Selector = self.config.panel.clone();
        let panel_class = self.config.panel_class.clone();
        let settlement = self.settlement.clone();
        let on_settle = self.on_settle.clone();

        Box::new(move || {
            animator.stop(animation);
            {
                let mut document = document.borrow_mut();
                document.remove_class(&panel, &panel_class);
                document.clear_style(&panel);
            }
            log::trace!("settled {} {}", panel, settled.name());
            settlement.finish();
            on_settle.emit(settled);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Animator, Easing};
    use crate::dom::{Document, Height};
    use crate::memory_dom::{MemoryDocument, MemoryElement};
    use crate::runtime::{LaggingAnimator, Simulation};
    use std::cell::RefCell;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    struct Fixture {
        sim: Simulation,
        toggle: NavToggle,
        config: ToggleConfig,
    }

    impl Fixture {
        fn new(content_height: f32) -> Self {
            let sim = Simulation::new(MemoryDocument::navigation(content_height), Easing::Swing);
            let config = ToggleConfig::default();
            let toggle = NavToggle::bind(config.clone(), sim.host()).unwrap();
            Self {
                sim,
                toggle,
                config,
            }
        }

        fn click(&mut self) -> bool {
            self.toggle.activate()
        }

        fn wait(&self, n: u64) {
            self.sim.advance(ms(n));
        }

        fn panel_open(&self) -> bool {
            self.sim
                .document
                .borrow()
                .has_class(&self.config.panel, &self.config.panel_class)
        }

        fn trigger_open(&self) -> bool {
            self.sim
                .document
                .borrow()
                .has_class(&self.config.trigger, &self.config.trigger_class)
        }

        fn wrapper_open(&self) -> bool {
            self.sim
                .document
                .borrow()
                .has_class(&self.config.wrapper, &self.config.wrapper_class)
        }

        fn inline_style(&self) -> bool {
            self.sim
                .document
                .borrow()
                .has_inline_style(&self.config.panel)
        }

        fn panel_height(&self) -> f32 {
            self.sim
                .document
                .borrow()
                .height(&self.config.panel)
                .unwrap()
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let mut f = Fixture::new(150.0);
        assert_eq!(f.toggle.state(), PanelState::Collapsed);

        // open
        f.click();
        assert!(f.trigger_open());
        assert!(f.wrapper_open());
        assert!(!f.panel_open());
        let tween = f.sim.runtime.tween_on(&f.config.panel).unwrap();
        assert_eq!((tween.from, tween.to), (0.0, 150.0));
        assert_eq!(tween.duration, ms(300));

        f.wait(320);
        assert!(f.panel_open());
        assert!(!f.inline_style());
        assert_eq!(f.panel_height(), 150.0);
        assert!(f.toggle.is_settled());

        // close
        f.click();
        assert!(!f.trigger_open());
        assert!(!f.wrapper_open());
        let tween = f.sim.runtime.tween_on(&f.config.panel).unwrap();
        assert_eq!((tween.from, tween.to), (150.0, 0.0));
        assert_eq!(tween.duration, ms(300));

        f.wait(310);
        assert!(!f.panel_open());
        assert!(!f.inline_style());
        assert_eq!(f.panel_height(), 0.0);
        assert_eq!(f.toggle.state(), PanelState::Collapsed);
    }

    #[test]
    fn test_collapse_settles_at_310_not_before() {
        let mut f = Fixture::new(150.0);
        f.click();
        f.wait(320);

        f.click();
        f.wait(309);
        assert!(f.panel_open());
        assert!(f.inline_style());
        assert_eq!(f.panel_height(), 0.0);
        assert_eq!(f.toggle.phase(), TogglePhase::Collapsing);

        f.wait(1);
        assert!(!f.panel_open());
        assert!(!f.inline_style());
        assert!(f.toggle.is_settled());
    }

    #[test]
    fn test_state_inversion_and_idempotent_settle() {
        let mut f = Fixture::new(90.0);
        for n in 1..=7u64 {
            f.click();
            f.wait(320);

            let expanded = n % 2 == 1;
            assert_eq!(f.toggle.state().is_expanded(), expanded, "after {n} clicks");
            assert!(!f.inline_style(), "inline style left after {n} clicks");
            // settled synchrony: all three markers agree
            assert_eq!(f.panel_open(), expanded);
            assert_eq!(f.trigger_open(), expanded);
            assert_eq!(f.wrapper_open(), expanded);
        }
        assert_eq!(f.toggle.activations(), 7);
    }

    #[test]
    fn test_immediate_class_synchrony() {
        let mut f = Fixture::new(150.0);

        f.click();
        assert_eq!(f.toggle.phase(), TogglePhase::Expanding);
        assert!(f.trigger_open() && f.wrapper_open());
        assert!(!f.panel_open());

        f.wait(320);
        f.click();
        assert_eq!(f.toggle.phase(), TogglePhase::Collapsing);
        assert!(!f.trigger_open() && !f.wrapper_open());
        assert!(f.panel_open());
    }

    #[test]
    fn test_natural_height_follows_content() {
        let mut f = Fixture::new(150.0);
        f.sim
            .document
            .borrow_mut()
            .set_content_height(&f.config.panel, 275.0);

        f.click();
        let tween = f.sim.runtime.tween_on(&f.config.panel).unwrap();
        assert_eq!(tween.to, 275.0);
    }

    #[test]
    fn test_reclick_cancels_pending_settle() {
        let mut f = Fixture::new(150.0);
        f.click();
        f.wait(100);
        assert_eq!(f.sim.runtime.pending_tasks(), 1);
        let mid = f.panel_height();
        assert!(mid > 0.0 && mid < 150.0);

        // close mid-expand
        f.click();
        assert_eq!(f.sim.runtime.pending_tasks(), 1);
        let tween = f.sim.runtime.tween_on(&f.config.panel).unwrap();
        assert_eq!((tween.from, tween.to), (mid, 0.0));

        // the cancelled expand settle (t=320) must not add the open class
        f.wait(250);
        assert!(!f.panel_open());

        f.wait(60);
        assert!(!f.panel_open());
        assert!(!f.trigger_open());
        assert!(!f.wrapper_open());
        assert!(!f.inline_style());
        assert_eq!(f.panel_height(), 0.0);
        assert!(f.toggle.is_settled());
        assert_eq!(f.sim.runtime.pending_tasks(), 0);
    }

    #[test]
    fn test_reopen_mid_collapse() {
        let mut f = Fixture::new(150.0);
        f.click();
        f.wait(320);

        f.click();
        f.wait(150);
        let mid = f.panel_height();

        f.click();
        assert_eq!(f.toggle.state(), PanelState::Expanded);
        let tween = f.sim.runtime.tween_on(&f.config.panel).unwrap();
        assert_eq!((tween.from, tween.to), (mid, 150.0));

        f.wait(320);
        assert!(f.panel_open() && f.trigger_open() && f.wrapper_open());
        assert!(!f.inline_style());
        assert_eq!(f.panel_height(), 150.0);
    }

    #[test]
    fn test_rapid_clicks_leave_one_pending_settle() {
        let mut f = Fixture::new(150.0);
        for _ in 0..5 {
            f.click();
            f.wait(5);
        }
        assert_eq!(f.sim.runtime.pending_tasks(), 1);
        assert_eq!(f.toggle.state(), PanelState::Expanded);

        f.sim.runtime.run_until_idle();
        assert!(f.panel_open() && f.trigger_open() && f.wrapper_open());
        assert!(!f.inline_style());
    }

    #[test]
    fn test_callbacks() {
        let sim = Simulation::new(MemoryDocument::navigation(150.0), Easing::Swing);
        let toggled = Rc::new(RefCell::new(Vec::new()));
        let settled = Rc::new(RefCell::new(Vec::new()));
        let toggled_sink = toggled.clone();
        let settled_sink = settled.clone();

        let mut toggle = NavToggle::bind(ToggleConfig::default(), sim.host())
            .unwrap()
            .on_toggle(move |s| toggled_sink.borrow_mut().push(s))
            .on_settle(move |s| settled_sink.borrow_mut().push(s));

        toggle.activate();
        sim.advance(ms(320));
        toggle.activate();
        sim.advance(ms(10));
        toggle.activate();
        sim.advance(ms(320));

        use PanelState::{Collapsed, Expanded};
        assert_eq!(*toggled.borrow(), [Expanded, Collapsed, Expanded]);
        assert_eq!(*settled.borrow(), [Expanded, Expanded]);
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut f = Fixture::new(150.0);
        assert!(!f.toggle.close());
        assert!(f.toggle.open());
        assert!(!f.toggle.open());
        assert_eq!(f.toggle.activations(), 1);

        f.wait(320);
        assert!(f.toggle.close());
        assert_eq!(f.toggle.activations(), 2);
    }

    #[test]
    fn test_bind_reads_initial_state() {
        let mut doc = MemoryDocument::navigation(150.0);
        doc.add_class(&Selector::id("navigation"), "nav-open");
        let sim = Simulation::new(doc, Easing::Swing);

        let mut toggle = NavToggle::bind(ToggleConfig::default(), sim.host()).unwrap();
        assert_eq!(toggle.state(), PanelState::Expanded);

        toggle.activate();
        let tween = sim.runtime.tween_on(&Selector::id("navigation")).unwrap();
        assert_eq!((tween.from, tween.to), (150.0, 0.0));
    }

    #[test]
    fn test_bind_missing_elements() {
        let mut doc = MemoryDocument::new();
        doc.insert(MemoryElement::with_id("navigation"));
        let sim = Simulation::new(doc, Easing::Swing);

        let err = NavToggle::bind(ToggleConfig::default(), sim.host()).unwrap_err();
        assert!(matches!(err, ToggleError::ElementNotFound { ref selector } if selector == "#nav-open"));

        let mut doc = MemoryDocument::new();
        doc.insert(MemoryElement::with_id("nav-open"));
        let sim = Simulation::new(doc, Easing::Swing);
        let err = NavToggle::bind(ToggleConfig::default(), sim.host()).unwrap_err();
        assert!(matches!(err, ToggleError::ElementNotFound { ref selector } if selector == "#navigation"));
    }

    #[test]
    fn test_missing_wrapper_is_tolerated() {
        let mut doc = MemoryDocument::new();
        doc.insert(MemoryElement::with_id("nav-open"));
        doc.insert(
            MemoryElement::with_id("navigation")
                .content_height(80.0)
                .default_height(Height::Px(0.0)),
        );
        doc.add_rule("nav-open", Height::Auto);
        let sim = Simulation::new(doc, Easing::Swing);

        let mut toggle = NavToggle::bind(ToggleConfig::default(), sim.host()).unwrap();
        toggle.activate();
        sim.advance(ms(320));
        assert!(sim
            .document
            .borrow()
            .has_class(&Selector::id("navigation"), "nav-open"));
    }

    #[test]
    fn test_activation_after_panel_removed_is_noop() {
        let mut f = Fixture::new(150.0);
        f.sim.document.borrow_mut().remove(&f.config.panel);

        assert!(!f.click());
        assert_eq!(f.toggle.state(), PanelState::Collapsed);
        assert_eq!(f.toggle.activations(), 0);
        assert!(!f.trigger_open());
        assert_eq!(f.sim.runtime.pending_tasks(), 0);
    }

    #[test]
    fn test_unbind_stops_transition() {
        let mut f = Fixture::new(150.0);
        f.click();
        f.wait(100);
        let height = f.panel_height();

        let Fixture { sim, toggle, config } = f;
        toggle.unbind();
        assert_eq!(sim.runtime.pending_tasks(), 0);

        sim.advance(ms(500));
        let doc = sim.document.borrow();
        assert_eq!(doc.height(&config.panel), Some(height));
        assert!(!doc.has_class(&config.panel, &config.panel_class));
    }

    #[test]
    fn test_custom_config() {
        let mut doc = MemoryDocument::new();
        doc.insert(MemoryElement::with_id("menu-button"));
        doc.insert(MemoryElement::with_class("page"));
        doc.insert(
            MemoryElement::with_id("side-menu")
                .content_height(64.0)
                .default_height(Height::Px(0.0)),
        );
        doc.add_rule("is-open", Height::Auto);
        let sim = Simulation::new(doc, Easing::Linear);

        let config = ToggleConfig::from_json(
            r##"{
                "trigger": "#menu-button",
                "panel": "#side-menu",
                "wrapper": ".page",
                "panel_class": "is-open",
                "trigger_class": "is-active",
                "wrapper_class": "menu-visible",
                "duration_ms": 100
            }"##,
        )
        .unwrap();
        let mut toggle = NavToggle::bind(config, sim.host()).unwrap();

        toggle.activate();
        assert!(sim
            .document
            .borrow()
            .has_class(&Selector::class("page"), "menu-visible"));
        sim.advance(ms(119));
        assert!(!toggle.is_settled());
        sim.advance(ms(1));
        assert!(toggle.is_settled());

        let doc = sim.document.borrow();
        assert!(doc.has_class(&Selector::id("side-menu"), "is-open"));
        assert!(doc.has_class(&Selector::id("menu-button"), "is-active"));
        assert_eq!(doc.height(&Selector::id("side-menu")), Some(64.0));
    }

    #[test]
    fn test_animation_stopped_on_reclick() {
        let mut f = Fixture::new(150.0);
        f.click();
        let first = f.toggle.animation.unwrap();
        f.wait(50);
        f.click();
        assert!(!f.sim.runtime.is_running(first));
        assert!(f.sim.runtime.is_running(f.toggle.animation.unwrap()));
    }

    #[test]
    fn test_settled_toggle_has_no_running_animation() {
        let mut f = Fixture::new(150.0);
        f.click();
        let opening = f.toggle.animation.unwrap();
        f.wait(320);
        assert!(f.toggle.is_settled());
        assert!(!f.sim.runtime.is_running(opening));

        f.click();
        let closing = f.toggle.animation.unwrap();
        f.wait(310);
        assert!(f.toggle.is_settled());
        assert!(!f.sim.runtime.is_running(closing));
    }

    #[test]
    fn test_late_frame_after_settle_is_dropped() {
        let sim = Simulation::new(MemoryDocument::navigation(150.0), Easing::Swing);
        let document: SharedDocument = sim.document.clone();
        let animator = Rc::new(LaggingAnimator::new(document.clone()));
        let host = Host::new(document, animator.clone(), sim.runtime.clone());
        let panel = Selector::id("navigation");
        let mut toggle = NavToggle::bind(ToggleConfig::default(), host).unwrap();

        // open: the timer fires while the final frame is still outstanding
        toggle.activate();
        let opening = toggle.animation.unwrap();
        sim.advance(ms(320));
        assert!(toggle.is_settled());
        assert!(!animator.is_running(opening));
        animator.late_frame();
        assert!(!sim.document.borrow().has_inline_style(&panel));
        assert_eq!(sim.document.borrow().height(&panel), Some(150.0));

        // close
        toggle.activate();
        let closing = toggle.animation.unwrap();
        sim.advance(ms(310));
        assert!(!animator.is_running(closing));
        animator.late_frame();
        let doc = sim.document.borrow();
        assert!(!doc.has_inline_style(&panel));
        assert!(!doc.has_class(&panel, "nav-open"));
        assert_eq!(doc.height(&panel), Some(0.0));
    }

    #[test]
    fn test_class_selectors_for_trigger_and_panel() {
        let mut doc = MemoryDocument::new();
        let mut header_button = MemoryElement::with_id("header-button");
        header_button.classes.push("menu-button".to_string());
        let mut footer_button = MemoryElement::with_id("footer-button");
        footer_button.classes.push("menu-button".to_string());
        doc.insert(header_button);
        doc.insert(footer_button);
        doc.insert(MemoryElement::with_class("wrapper"));
        doc.insert(
            MemoryElement::with_class("drawer")
                .content_height(120.0)
                .default_height(Height::Px(0.0)),
        );
        doc.add_rule("nav-open", Height::Auto);
        let sim = Simulation::new(doc, Easing::Swing);

        let config = ToggleConfig {
            trigger: Selector::class("menu-button"),
            panel: Selector::class("drawer"),
            ..ToggleConfig::default()
        };
        let mut toggle = NavToggle::bind(config, sim.host()).unwrap();
        let header = Selector::id("header-button");
        let footer = Selector::id("footer-button");
        let drawer = Selector::class("drawer");

        assert!(toggle.activate());
        {
            let doc = sim.document.borrow();
            assert!(doc.has_class(&header, "nav-open-toggle"));
            assert!(doc.has_class(&footer, "nav-open-toggle"));
        }
        let tween = sim.runtime.tween_on(&drawer).unwrap();
        assert_eq!((tween.from, tween.to), (0.0, 120.0));

        sim.advance(ms(320));
        {
            let doc = sim.document.borrow();
            assert!(doc.has_class(&drawer, "nav-open"));
            assert!(!doc.has_inline_style(&drawer));
            assert_eq!(doc.height(&drawer), Some(120.0));
        }

        assert!(toggle.activate());
        sim.advance(ms(310));
        let doc = sim.document.borrow();
        assert!(!doc.has_class(&header, "nav-open-toggle"));
        assert!(!doc.has_class(&footer, "nav-open-toggle"));
        assert!(!doc.has_class(&drawer, "nav-open"));
        assert_eq!(doc.height(&drawer), Some(0.0));
    }

    #[test]
    fn test_open_close_report_removed_panel() {
        let mut f = Fixture::new(150.0);
        f.sim.document.borrow_mut().remove(&f.config.panel);
        assert!(!f.toggle.open());
        assert_eq!(f.toggle.activations(), 0);

        let mut doc = MemoryDocument::navigation(150.0);
        doc.add_class(&Selector::id("navigation"), "nav-open");
        let sim = Simulation::new(doc, Easing::Swing);
        let mut toggle = NavToggle::bind(ToggleConfig::default(), sim.host()).unwrap();
        sim.document.borrow_mut().remove(&Selector::id("navigation"));
        assert!(!toggle.close());
        assert_eq!(toggle.state(), PanelState::Expanded);
    }
}
