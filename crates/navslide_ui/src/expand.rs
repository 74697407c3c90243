//! Slide-down to natural height
//!
//! Animating toward `height: auto` is not possible directly, so the natural
//! height is sampled once by briefly forcing `auto`, then the element is
//! pinned back to its current height and animated to the sampled value.
//! After the animation (plus a buffer) the open class is added and the
//! inline style removed, so class-based styling governs from then on.

use crate::animation::AnimationHandle;
use crate::dom::{Height, Selector};
use crate::error::ToggleError;
use crate::host::Host;
use crate::scheduler::TaskToken;
use std::time::Duration;

/// Handles for one in-flight height transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub animation: AnimationHandle,
    pub settle: TaskToken,
}

/// Heights measured by [`expand_down`] before animating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandMeasure {
    /// Rendered height when the procedure started
    pub collapsed_height: f32,
    /// Height the content takes with `height: auto`
    pub natural_height: f32,
}

/// Animate `target` from its current height to its natural height.
///
/// `on_settled` runs inside the settle task, after the animation has been
/// stopped and the class and style have been normalized. If the element has
/// been removed by then, the normalization is a no-op.
pub fn expand_down(
    host: &Host,
    target: &Selector,
    open_class: &str,
    duration: Duration,
    settle_buffer: Duration,
    on_settled: impl FnOnce() + 'static,
) -> Result<(Transition, ExpandMeasure), ToggleError> {
    if duration.is_zero() {
        return Err(ToggleError::InvalidDuration);
    }

    let measure = {
        let mut document = host.document.borrow_mut();
        let collapsed_height = document
            .height(target)
            .ok_or_else(|| ToggleError::element_not_found(target))?;

        document.set_height(target, Height::Auto);
        let natural_height = document.height(target).unwrap_or(collapsed_height);
        document.set_height(target, Height::Px(collapsed_height));

        ExpandMeasure {
            collapsed_height,
            natural_height,
        }
    };

    log::debug!(
        "expand {}: {:.1} -> {:.1} over {:?}",
        target,
        measure.collapsed_height,
        measure.natural_height,
        duration
    );

    let animation = host.animator.animate(
        target,
        measure.collapsed_height,
        measure.natural_height,
        duration,
    );

    let document = host.document.clone();
    let animator = host.animator.clone();
    let settle_target = target.clone();
    let open_class = open_class.to_string();
    let settle = host.scheduler.schedule(
        duration + settle_buffer,
        Box::new(move || {
            // A frame arriving after this point must not restore the height
            animator.stop(animation);
            {
                let mut document = document.borrow_mut();
                if !document.exists(&settle_target) {
                    log::debug!("expand {}: element gone before settle", settle_target);
                }
                document.add_class(&settle_target, &open_class);
                document.clear_style(&settle_target);
            }
            on_settled();
        }),
    );

    Ok((Transition { animation, settle }, measure))
}
