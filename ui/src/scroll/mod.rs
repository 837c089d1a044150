//! Scroll-threshold signal: pure tracker, injectable sources, Dioxus hook.

mod hook;
pub mod source;
pub mod threshold;

pub use hook::use_scroll_threshold;
pub use source::{ManualScrollSource, NullScrollSource, ScrollSource, ScrollSourceHandle};
pub use threshold::ScrollThreshold;
