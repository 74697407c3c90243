//! Scripted replay of the toggle against the simulated runtime.
//!
//! Used by the native binary to show what the browser would do, and by tests
//! as an end-to-end check of the default configuration.

use navslide_ui::prelude::*;
use navslide_ui::{MemoryDocument, MemoryElement, Simulation};
use std::fmt;
use std::time::Duration;
use web_time::Instant;

/// What the document looks like at one point of the replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Simulated time since the replay started
    pub at: Duration,
    pub label: &'static str,
    pub state: PanelState,
    pub phase: TogglePhase,
    pub panel_height: f32,
    pub inline_style: bool,
    pub panel_open: bool,
    pub trigger_open: bool,
    pub wrapper_open: bool,
}

impl Snapshot {
    /// Whether all three marker classes agree with the logical state.
    pub fn classes_agree(&self) -> bool {
        let open = self.state.is_expanded();
        self.panel_open == open && self.trigger_open == open && self.wrapper_open == open
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool| if on { "+" } else { "-" };
        write!(
            f,
            "t={:>4}ms {:<18} {:<9} {:<10} height={:>6.1} style={} panel{} trigger{} wrapper{}",
            self.at.as_millis(),
            self.label,
            self.state.name(),
            format!("{:?}", self.phase),
            self.panel_height,
            flag(self.inline_style),
            flag(self.panel_open),
            flag(self.trigger_open),
            flag(self.wrapper_open),
        )
    }
}

/// Parse a panel content height: a finite number of pixels above zero.
pub fn parse_content_height(text: &str) -> Result<f32, String> {
    let height: f32 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text))?;
    if !height.is_finite() || height <= 0.0 {
        return Err(format!(
            "content height must be a positive number of pixels, got {}",
            text
        ));
    }
    Ok(height)
}

/// Build a document matching `config` with a panel of `content_height`.
pub fn demo_document(config: &ToggleConfig, content_height: f32) -> MemoryDocument {
    let mut doc = MemoryDocument::new();

    let mut push = |selector: &Selector| {
        let element = match selector {
            Selector::Id(id) => MemoryElement::with_id(id.clone()),
            Selector::Class(class) => MemoryElement::with_class(class.clone()),
        };
        doc.insert(element);
    };
    push(&config.wrapper);
    push(&config.trigger);

    let panel = match &config.panel {
        Selector::Id(id) => MemoryElement::with_id(id.clone()),
        Selector::Class(class) => MemoryElement::with_class(class.clone()),
    };
    doc.insert(
        panel
            .content_height(content_height)
            .default_height(Height::Px(0.0)),
    );
    doc.add_rule(config.panel_class.clone(), Height::Auto);
    doc
}

/// Open, wait for the settle, close, wait for the settle.
pub fn run_demo(
    config: &ToggleConfig,
    content_height: f32,
) -> Result<Vec<Snapshot>, navslide_ui::ToggleError> {
    let started = Instant::now();
    let sim = Simulation::new(demo_document(config, content_height), config.easing);
    let mut toggle = NavToggle::bind(config.clone(), sim.host())?;
    let half = config.duration() / 2;

    let mut snapshots = Vec::new();
    let mut take = |label: &'static str, toggle: &NavToggle| {
        let doc = sim.document.borrow();
        snapshots.push(Snapshot {
            at: sim.runtime.now(),
            label,
            state: toggle.state(),
            phase: toggle.phase(),
            panel_height: doc.height(&config.panel).unwrap_or(0.0),
            inline_style: doc.has_inline_style(&config.panel),
            panel_open: doc.has_class(&config.panel, &config.panel_class),
            trigger_open: doc.has_class(&config.trigger, &config.trigger_class),
            wrapper_open: doc.has_class(&config.wrapper, &config.wrapper_class),
        });
    };

    take("initial", &toggle);

    toggle.activate();
    take("open clicked", &toggle);
    sim.advance(half);
    take("opening", &toggle);
    sim.advance(config.expand_settle_delay() - half);
    take("open settled", &toggle);

    toggle.activate();
    take("close clicked", &toggle);
    sim.advance(half);
    take("closing", &toggle);
    sim.advance(config.collapse_settle_delay() - half);
    take("close settled", &toggle);

    log::debug!(
        "replayed {} activations in {:?} wall time",
        toggle.activations(),
        started.elapsed()
    );
    Ok(snapshots)
}
