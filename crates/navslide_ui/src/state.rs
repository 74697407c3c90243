//! Toggle state types

use serde::{Deserialize, Serialize};

/// Logical visibility of the navigation panel.
///
/// This is the source of truth; marker classes in the document are a
/// projection of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Zero height, hidden
    #[default]
    Collapsed,
    /// Natural content height, visible
    Expanded,
}

impl PanelState {
    pub fn is_expanded(self) -> bool {
        self == PanelState::Expanded
    }

    /// The state a single activation moves to.
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Collapsed => PanelState::Expanded,
            PanelState::Expanded => PanelState::Collapsed,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PanelState::Collapsed => "collapsed",
            PanelState::Expanded => "expanded",
        }
    }
}

/// Whether a transition is still waiting for its settle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TogglePhase {
    /// No settle pending; classes and inline style are in steady state
    #[default]
    Settled,
    /// Height animating toward the natural height
    Expanding,
    /// Height animating toward zero
    Collapsing,
}

impl TogglePhase {
    /// Phase entered when transitioning toward `target`.
    pub fn toward(target: PanelState) -> Self {
        match target {
            PanelState::Expanded => TogglePhase::Expanding,
            PanelState::Collapsed => TogglePhase::Collapsing,
        }
    }

    pub fn is_settled(self) -> bool {
        self == TogglePhase::Settled
    }
}
