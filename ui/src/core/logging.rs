//! Structured logging helpers for the site components.
//!
//! Every helper tags its event with an `operation` field so browser-console
//! output can be filtered by concern.

use crate::core::errors::SiteError;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ScrollListener,
    StickyToggle,
    Config,
    Language,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ScrollListener => "scroll_listener",
            LogOperation::StickyToggle => "sticky_toggle",
            LogOperation::Config => "config",
            LogOperation::Language => "language",
        }
    }
}

pub fn log_listener_attached(threshold: u32) {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        threshold,
        "Scroll listener attached"
    );
}

/// Registration failures are not fatal; the signal simply never flips.
/// A missing document (SSR) is expected and only logged at debug level.
pub fn log_listener_failed(threshold: u32, err: &SiteError) {
    match err {
        SiteError::ScrollSourceUnavailable(_) => tracing::debug!(
            operation = LogOperation::ScrollListener.as_str(),
            threshold,
            error = %err,
            "No scroll source, navbar stays in its resting state"
        ),
        _ => tracing::warn!(
            operation = LogOperation::ScrollListener.as_str(),
            threshold,
            error = %err,
            "Scroll listener registration failed, navbar stays in its resting state"
        ),
    }
}

pub fn log_listener_removed(id: u64) {
    tracing::trace!(
        operation = LogOperation::ScrollListener.as_str(),
        listener_id = id,
        "Scroll listener removed"
    );
}

pub fn log_threshold_crossed(threshold: u32, offset: f64, past: bool) {
    tracing::debug!(
        operation = LogOperation::StickyToggle.as_str(),
        threshold,
        offset,
        past,
        "Scroll threshold crossed"
    );
}

pub fn log_config_loaded(source: &str) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        source,
        "Navbar configuration loaded"
    );
}

pub fn log_config_fallback(source: &str, err: &SiteError) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        source,
        error = %err,
        "Navbar configuration rejected, using defaults"
    );
}

pub fn log_language_switch(tag: &str, result: Result<(), &SiteError>) {
    match result {
        Ok(()) => tracing::info!(
            operation = LogOperation::Language.as_str(),
            language = tag,
            "Language switched"
        ),
        Err(err) => tracing::warn!(
            operation = LogOperation::Language.as_str(),
            language = tag,
            error = %err,
            "Language switch failed"
        ),
    }
}
