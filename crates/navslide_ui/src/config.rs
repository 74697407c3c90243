//! Toggle configuration
//!
//! Every field has a default matching the stock navigation markup, so an
//! empty JSON object is a valid configuration.

use crate::animation::Easing;
use crate::constants::{
    COLLAPSE_SETTLE_BUFFER, DEFAULT_PANEL_SELECTOR, DEFAULT_TRIGGER_SELECTOR,
    DEFAULT_WRAPPER_SELECTOR, EXPAND_SETTLE_BUFFER, PANEL_OPEN_CLASS, SLIDE_DURATION,
    TRIGGER_OPEN_CLASS, WRAPPER_OPEN_CLASS,
};
use crate::dom::Selector;
use crate::error::ToggleError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Selectors, marker classes and timings for one navigation toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Element whose clicks toggle the panel
    pub trigger: Selector,
    /// The collapsible panel
    pub panel: Selector,
    /// Layout wrapper(s) mirroring the panel state
    pub wrapper: Selector,

    /// Marker class on the settled open panel
    pub panel_class: String,
    /// Marker class on the trigger while open
    pub trigger_class: String,
    /// Marker class on the wrapper while open
    pub wrapper_class: String,

    /// Slide animation duration in milliseconds
    pub duration_ms: u64,
    /// Delay after a collapse animation before the panel is normalized
    pub collapse_settle_ms: u64,
    /// Delay after an expand animation before the panel is normalized
    pub expand_settle_ms: u64,

    /// Easing curve for the height animation
    pub easing: Easing,
}

fn default_selector(text: &str) -> Selector {
    match text.strip_prefix('#') {
        Some(id) => Selector::id(id),
        None => Selector::class(text.trim_start_matches('.')),
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            trigger: default_selector(DEFAULT_TRIGGER_SELECTOR),
            panel: default_selector(DEFAULT_PANEL_SELECTOR),
            wrapper: default_selector(DEFAULT_WRAPPER_SELECTOR),
            panel_class: PANEL_OPEN_CLASS.to_string(),
            trigger_class: TRIGGER_OPEN_CLASS.to_string(),
            wrapper_class: WRAPPER_OPEN_CLASS.to_string(),
            duration_ms: SLIDE_DURATION.as_millis() as u64,
            collapse_settle_ms: COLLAPSE_SETTLE_BUFFER.as_millis() as u64,
            expand_settle_ms: EXPAND_SETTLE_BUFFER.as_millis() as u64,
            easing: Easing::default(),
        }
    }
}

impl ToggleConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ToggleError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ToggleError> {
        if self.duration_ms == 0 {
            return Err(ToggleError::InvalidDuration);
        }
        let classes = [
            ("panel_class", &self.panel_class),
            ("trigger_class", &self.trigger_class),
            ("wrapper_class", &self.wrapper_class),
        ];
        for (field, class) in classes {
            if class.is_empty() || class.contains(char::is_whitespace) {
                return Err(ToggleError::InvalidClass {
                    field,
                    class: class.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Total delay before a collapse settles.
    pub fn collapse_settle_delay(&self) -> Duration {
        self.duration() + Duration::from_millis(self.collapse_settle_ms)
    }

    pub fn expand_settle_buffer(&self) -> Duration {
        Duration::from_millis(self.expand_settle_ms)
    }

    /// Total delay before an expand settles.
    pub fn expand_settle_delay(&self) -> Duration {
        self.duration() + self.expand_settle_buffer()
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
