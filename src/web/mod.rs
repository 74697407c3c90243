//! Browser implementations of the toggle capabilities.

mod animator;
mod document;
mod scheduler;

pub use animator::WebAnimator;
pub use document::WebDocument;
pub use scheduler::WebScheduler;
