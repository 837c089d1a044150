//! Error types shared by the site components.
//!
//! Nothing here is ever shown to a visitor: every failure path degrades to a
//! disabled feature and a log line (see `core::logging`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// No scroll-position source exists (SSR, tests, non-browser targets).
    #[error("scroll position source unavailable: {0}")]
    ScrollSourceUnavailable(String),

    /// The browser rejected `addEventListener`.
    #[error("failed to register scroll listener: {0}")]
    ListenerRegistration(String),

    #[error("invalid navbar configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("language switch failed: {0}")]
    Language(#[from] i18n_embed::I18nEmbedError),
}

pub type SiteResult<T> = Result<T, SiteError>;
