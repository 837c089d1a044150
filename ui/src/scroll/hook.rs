use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::logging;

use super::source::{ScrollSourceHandle, ScrollSubscription};
use super::threshold::ScrollThreshold;

/// Reactive "has the page scrolled past `threshold` pixels" flag.
///
/// The listener is registered once, when the calling component mounts, on
/// the [`ScrollSourceHandle`] found in context (or the platform source if
/// none was provided). It is removed when the component unmounts. If the
/// source cannot take listeners the flag stays `false`.
pub fn use_scroll_threshold(threshold: u32) -> ReadOnlySignal<bool> {
    let source = try_use_context::<ScrollSourceHandle>();
    let past = use_signal(|| false);

    let subscription: Rc<RefCell<Option<ScrollSubscription>>> = use_hook(move || {
        let source = source.unwrap_or_else(ScrollSourceHandle::platform);
        let mut tracker = ScrollThreshold::new(threshold);
        let mut past = past;

        let registered = source.subscribe(Box::new(move |offset| {
            if tracker.observe(offset) {
                logging::log_threshold_crossed(threshold, offset, tracker.is_past());
                past.set(tracker.is_past());
            }
        }));

        let slot = match registered {
            Ok(subscription) => {
                logging::log_listener_attached(threshold);
                Some(subscription)
            }
            Err(err) => {
                logging::log_listener_failed(threshold, &err);
                None
            }
        };
        Rc::new(RefCell::new(slot))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    past.into()
}
