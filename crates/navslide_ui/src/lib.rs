//! navslide_ui - headless slide-down navigation toggle
//!
//! The toggle logic is written against three small capabilities: a
//! [`Document`] to query and mutate, an [`Animator`] that tweens heights and
//! a [`Scheduler`] for one-shot deferred tasks. The browser binds them to the
//! DOM; [`Simulation`] binds them to an in-memory document and a manual clock.
//!
//! ```
//! use navslide_ui::{Easing, MemoryDocument, NavToggle, PanelState, Simulation, ToggleConfig};
//! use std::time::Duration;
//!
//! let sim = Simulation::new(MemoryDocument::navigation(150.0), Easing::Swing);
//! let mut toggle = NavToggle::bind(ToggleConfig::default(), sim.host()).unwrap();
//!
//! toggle.activate();
//! sim.advance(Duration::from_millis(320));
//! assert_eq!(toggle.state(), PanelState::Expanded);
//! assert!(toggle.is_settled());
//! ```

pub mod animation;
pub mod callback;
pub mod config;
pub mod constants;
pub mod dom;
pub mod error;
pub mod expand;
pub mod host;
pub mod memory_dom;
pub mod nav_toggle;
pub mod runtime;
pub mod scheduler;
pub mod state;

pub use animation::{AnimationHandle, Animator, Easing, Tween};
pub use callback::Callback;
pub use config::ToggleConfig;
pub use dom::{Document, Height, Selector};
pub use error::ToggleError;
pub use expand::{expand_down, ExpandMeasure, Transition};
pub use host::{Host, SharedDocument};
pub use memory_dom::{MemoryDocument, MemoryElement};
pub use nav_toggle::NavToggle;
pub use runtime::{SimulatedRuntime, Simulation};
pub use scheduler::{Scheduler, Task, TaskToken};
pub use state::{PanelState, TogglePhase};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::animation::{Animator, Easing};
    pub use crate::config::ToggleConfig;
    pub use crate::dom::{Document, Height, Selector};
    pub use crate::host::Host;
    pub use crate::nav_toggle::NavToggle;
    pub use crate::scheduler::Scheduler;
    pub use crate::state::{PanelState, TogglePhase};
}
