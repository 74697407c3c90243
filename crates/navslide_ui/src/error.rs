//! Error types for binding and configuring the navigation toggle.

use thiserror::Error;

/// Errors that can occur while setting up a toggle.
///
/// Activating a bound toggle never fails; these only surface from binding,
/// the expand procedure's preconditions, and configuration loading.
#[derive(Error, Debug)]
pub enum ToggleError {
    /// A required element is not present in the document
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Selector that matched nothing
        selector: String,
    },

    /// Selector string is neither `#id` nor `.class`
    #[error("Invalid selector '{selector}': expected '#id' or '.class'")]
    InvalidSelector {
        /// The rejected selector text
        selector: String,
    },

    /// Marker class names must be a single non-empty class token
    #[error("Invalid {field} '{class}': expected a single class name")]
    InvalidClass {
        /// Config field holding the class
        field: &'static str,
        /// The rejected class text
        class: String,
    },

    /// Animation duration must be greater than zero
    #[error("Invalid duration: animation duration must be greater than zero")]
    InvalidDuration,

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ToggleError {
    /// Create an element-not-found error.
    pub fn element_not_found(selector: impl ToString) -> Self {
        Self::ElementNotFound {
            selector: selector.to_string(),
        }
    }

    /// Create an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
        }
    }
}
