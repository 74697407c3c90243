//! Document surface abstraction
//!
//! The toggle never touches a real DOM directly. It talks to a [`Document`],
//! which the browser build implements over `web-sys` and tests implement
//! with [`MemoryDocument`](crate::MemoryDocument).
//!
//! Operations follow query-set semantics: mutators apply to every element a
//! selector matches, and a selector that matches nothing is a silent no-op.

use crate::error::ToggleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Element selector: `#id` for one element, `.class` for a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selector {
    /// Element with this id
    Id(String),
    /// Every element carrying this class
    Class(String),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    /// CSS text for `querySelectorAll`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Class(class) => write!(f, ".{}", class),
        }
    }
}

impl FromStr for Selector {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let valid = |name: &str| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        if let Some(id) = s.strip_prefix('#') {
            if valid(id) {
                return Ok(Selector::Id(id.to_string()));
            }
        } else if let Some(class) = s.strip_prefix('.') {
            if valid(class) {
                return Ok(Selector::Class(class.to_string()));
            }
        }
        Err(ToggleError::invalid_selector(s))
    }
}

impl TryFrom<String> for Selector {
    type Error = ToggleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

/// A height value as written to an inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    /// Fixed pixel height
    Px(f32),
    /// Content-driven height
    Auto,
}

impl Height {
    /// CSS text for the `height` property.
    pub fn to_css(self) -> String {
        match self {
            Height::Px(px) => format!("{}px", px),
            Height::Auto => "auto".to_string(),
        }
    }
}

/// The document operations the toggle needs.
pub trait Document {
    /// Whether the selector matches at least one element.
    fn exists(&self, selector: &Selector) -> bool;

    /// Whether the first matching element has `class`.
    fn has_class(&self, selector: &Selector, class: &str) -> bool;

    fn add_class(&mut self, selector: &Selector, class: &str);

    fn remove_class(&mut self, selector: &Selector, class: &str);

    /// Rendered height of the first matching element, `None` if absent.
    fn height(&self, selector: &Selector) -> Option<f32>;

    /// Write an inline height on every matching element.
    fn set_height(&mut self, selector: &Selector, height: Height);

    /// Remove the whole inline style attribute.
    fn clear_style(&mut self, selector: &Selector);

    /// Whether the first matching element carries any inline style.
    fn has_inline_style(&self, selector: &Selector) -> bool;

    /// Add or remove `class` depending on `on`.
    fn set_class(&mut self, selector: &Selector, class: &str, on: bool) {
        if on {
            self.add_class(selector, class);
        } else {
            self.remove_class(selector, class);
        }
    }
}
