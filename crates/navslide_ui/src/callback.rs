//! Observer callbacks for toggle events
//!
//! A [`Callback`] wraps an optional `Fn(T)` handler. Unlike a boxed closure it
//! is cheap to clone, so a handler can be captured by a deferred task and
//! still stay registered on the toggle.
//!
//! # Examples
//!
//! ```
//! use navslide_ui::{Callback, PanelState};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(None));
//! let sink = seen.clone();
//! let on_toggle = Callback::new(move |state: PanelState| sink.set(Some(state)));
//!
//! on_toggle.emit(PanelState::Expanded);
//! assert_eq!(seen.get(), Some(PanelState::Expanded));
//! ```

use std::fmt;
use std::rc::Rc;

/// An optional, shareable event handler.
pub struct Callback<T> {
    f: Option<Rc<dyn Fn(T)>>,
}

impl<T> Callback<T> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Rc::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the handler, if one is set.
    pub fn emit(&self, value: T) {
        if let Some(ref f) = self.f {
            f(value);
        }
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
