//! Internationalization (i18n) for the site components.
//!
//! Stack:
//! - `i18n-embed` (language selection + bundle loading)
//! - `rust-embed` (compile-time embedding of the `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro, compile-time checked against en-US)
//!
//! Layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/serpens-ui.ftl   (fallback/reference)
//!   es-ES/serpens-ui.ftl
//!   fr-FR/serpens-ui.ftl
//! ```
//!
//! Literal lookups go through `t!("nav-services")`. Data-driven labels
//! (nav entries, service titles) carry their message id and resolve through
//! [`tr`], which cannot be checked at compile time; the `i18n_completeness`
//! suite covers those ids instead.
use std::sync::Once;

use dioxus::prelude::{try_use_context, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::errors::SiteResult;
use crate::core::logging;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared [`LOADER`].
///
/// ```
/// # use ui::t;
/// # let _: String =
/// t!("nav-services");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "serpens-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the visitor's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "Failed selecting languages, continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> SiteResult<()> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    let result: SiteResult<()> = i18n_embed::select(&*LOADER, &Localizations, &[lang])
        .map(|_| ())
        .map_err(Into::into);
    logging::log_language_switch(tag, result.as_ref().map(|_| ()));
    result
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Most preferred language currently loaded.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Language code for the current render.
///
/// Reads the global `Signal<String>` language code when the app provides
/// one, which subscribes the calling component: a switch from the language
/// picker re-renders it with the new bundle.
pub fn use_language_code() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code
        .map(|code| code())
        .unwrap_or_else(current_language)
}

/// Dynamic lookup for message ids carried by data. An unknown id renders the
/// loader's "no localization" placeholder instead of failing.
pub fn tr(id: &str) -> String {
    LOADER.get(id)
}

/// Two-letter label for a language tag (`fr-FR` -> `fr`).
pub fn short_label(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
