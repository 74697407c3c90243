//! navslide - slide-down navigation toggle for the browser
//!
//! The toggle logic lives in `navslide_ui`. This crate adds the application
//! config, a native replay demo, and the wasm entry point that binds the
//! toggle to the page's DOM.

pub mod box_model;
pub mod config;
pub mod demo;

/// Panel content height used by the native demo when none is given.
pub const DEMO_CONTENT_HEIGHT: f32 = 150.0;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
