//! Scroll-position sources.
//!
//! Components never read `window.scrollY` directly. They ask a
//! [`ScrollSource`] (provided through Dioxus context, see
//! [`ScrollSourceHandle`]) so the same navbar works in the browser, under
//! SSR, and in tests driven by [`ManualScrollSource`].

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::errors::{SiteError, SiteResult};
use crate::core::logging;

/// Callback invoked with the current vertical offset on every scroll event.
pub type ScrollHandler = Box<dyn FnMut(f64)>;

pub trait ScrollSource {
    /// Current vertical offset in CSS pixels, if there is a document to ask.
    ///
    /// `use_scroll_threshold` never reads this: the flag starts `false` and
    /// only scroll events move it. It is here for callers that need the
    /// position on demand.
    fn offset(&self) -> Option<f64>;

    /// Register `handler` for scroll events. The listener stays attached for
    /// exactly as long as the returned subscription is alive.
    fn subscribe(&self, handler: ScrollHandler) -> SiteResult<ScrollSubscription>;
}

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

fn next_listener_id() -> u64 {
    NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed)
}

/// Guard for a registered scroll listener. Dropping it detaches the listener.
pub struct ScrollSubscription {
    id: u64,
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(id: u64, detach: impl FnOnce() + 'static) -> Self {
        Self {
            id,
            detach: Some(Box::new(detach)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
            logging::log_listener_removed(self.id);
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("id", &self.id)
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Source for contexts without a document (SSR, native test runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScrollSource;

impl ScrollSource for NullScrollSource {
    fn offset(&self) -> Option<f64> {
        None
    }

    fn subscribe(&self, _handler: ScrollHandler) -> SiteResult<ScrollSubscription> {
        Err(SiteError::ScrollSourceUnavailable(
            "no document in this render target".to_string(),
        ))
    }
}

#[derive(Default)]
struct ManualState {
    offset: f64,
    handlers: Vec<(u64, ScrollHandler)>,
    dispatching: bool,
    // Listeners detached by a handler while a dispatch was running.
    orphaned: Vec<u64>,
}

/// In-memory source: offsets are pushed with [`ManualScrollSource::scroll_to`].
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `offset` and dispatch one scroll event to every listener.
    pub fn scroll_to(&self, offset: f64) {
        let mut handlers = {
            let mut state = self.state.borrow_mut();
            state.offset = offset;
            state.dispatching = true;
            std::mem::take(&mut state.handlers)
        };

        for (_, handler) in handlers.iter_mut() {
            handler(offset);
        }

        let mut state = self.state.borrow_mut();
        state.dispatching = false;
        let orphaned = std::mem::take(&mut state.orphaned);
        handlers.retain(|(id, _)| !orphaned.contains(id));
        // Listeners added during dispatch were pushed onto the emptied vec.
        handlers.append(&mut state.handlers);
        state.handlers = handlers;
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().handlers.len()
    }
}

impl ScrollSource for ManualScrollSource {
    fn offset(&self) -> Option<f64> {
        Some(self.state.borrow().offset)
    }

    fn subscribe(&self, handler: ScrollHandler) -> SiteResult<ScrollSubscription> {
        let id = next_listener_id();
        self.state.borrow_mut().handlers.push((id, handler));

        let state = Rc::downgrade(&self.state);
        Ok(ScrollSubscription::new(id, move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            state.handlers.retain(|(existing, _)| *existing != id);
            if state.dispatching {
                state.orphaned.push(id);
            }
        }))
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::{next_listener_id, ScrollHandler, ScrollSource, ScrollSubscription};
    use crate::core::errors::{SiteError, SiteResult};

    const SCROLL_EVENT: &str = "scroll";

    /// Reads `window.scrollY` and listens on the window's `scroll` event.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowScrollSource;

    impl ScrollSource for WindowScrollSource {
        fn offset(&self) -> Option<f64> {
            web_sys::window()?.scroll_y().ok()
        }

        fn subscribe(&self, mut handler: ScrollHandler) -> SiteResult<ScrollSubscription> {
            let window = web_sys::window().ok_or_else(|| {
                SiteError::ScrollSourceUnavailable("no global window".to_string())
            })?;

            let reader = window.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                if let Ok(offset) = reader.scroll_y() {
                    handler(offset);
                }
            });

            window
                .add_event_listener_with_callback(SCROLL_EVENT, callback.as_ref().unchecked_ref())
                .map_err(|err| SiteError::ListenerRegistration(format!("{err:?}")))?;

            Ok(ScrollSubscription::new(next_listener_id(), move || {
                let _ = window.remove_event_listener_with_callback(
                    SCROLL_EVENT,
                    callback.as_ref().unchecked_ref(),
                );
            }))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::WindowScrollSource;

/// Cloneable, context-friendly wrapper around a scroll source.
#[derive(Clone)]
pub struct ScrollSourceHandle(Rc<dyn ScrollSource>);

impl ScrollSourceHandle {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// The window on WASM builds; nothing elsewhere.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(WindowScrollSource)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(NullScrollSource)
        }
    }
}

impl Deref for ScrollSourceHandle {
    type Target = dyn ScrollSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for ScrollSourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollSourceHandle")
    }
}
