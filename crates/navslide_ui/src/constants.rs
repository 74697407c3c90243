//! Centralized constants for navslide_ui
//!
//! Default selectors, marker classes and timings for the navigation toggle.
//! They match the markup and stylesheet the toggle was written against.

use std::time::Duration;

// =============================================================================
// Selectors
// =============================================================================

/// Element the user clicks to open or close the navigation
pub const DEFAULT_TRIGGER_SELECTOR: &str = "#nav-open";

/// The collapsible navigation panel
pub const DEFAULT_PANEL_SELECTOR: &str = "#navigation";

/// Layout wrapper(s) mirroring the panel state
pub const DEFAULT_WRAPPER_SELECTOR: &str = ".wrapper";

// =============================================================================
// Marker classes
// =============================================================================

/// Set on the panel once it has settled open
pub const PANEL_OPEN_CLASS: &str = "nav-open";

/// Set on the trigger while the navigation is (becoming) open
pub const TRIGGER_OPEN_CLASS: &str = "nav-open-toggle";

/// Set on the wrapper while the navigation is (becoming) open
pub const WRAPPER_OPEN_CLASS: &str = "nav-open-wrapper";

// =============================================================================
// Timing
// =============================================================================

/// Height animation duration for both directions
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Extra delay after a collapse animation before the panel is normalized
pub const COLLAPSE_SETTLE_BUFFER: Duration = Duration::from_millis(10);

/// Extra delay after an expand animation before the panel is normalized
pub const EXPAND_SETTLE_BUFFER: Duration = Duration::from_millis(20);

/// Frame interval used by the simulated runtime when stepping tweens
pub const SIMULATED_FRAME: Duration = Duration::from_millis(16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_delays() {
        assert_eq!(
            SLIDE_DURATION + COLLAPSE_SETTLE_BUFFER,
            Duration::from_millis(310)
        );
        assert_eq!(
            SLIDE_DURATION + EXPAND_SETTLE_BUFFER,
            Duration::from_millis(320)
        );
    }

    #[test]
    fn test_constants_are_positive() {
        assert!(!SLIDE_DURATION.is_zero());
        assert!(!SIMULATED_FRAME.is_zero());
    }
}
