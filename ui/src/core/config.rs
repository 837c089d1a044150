//! Navbar configuration with named defaults.
//!
//! Sites describe their navbar as a (possibly partial) JSON document; any
//! field left out takes the default listed on its constant below.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::errors::SiteResult;
use crate::core::logging;

/// Resting navbar class (transparent over the hero).
pub const DEFAULT_ROOT_CLASS: &str = "navbar navbar-expand-lg center-nav transparent navbar-light";

/// Class of the right-hand region that holds the optional toggles.
pub const DEFAULT_OTHER_REGION_CLASS: &str = "navbar-other w-100 d-flex ms-auto";

/// Class applied once the page has scrolled past the threshold. Caller
/// overrides of the root class never apply in this state.
pub const FIXED_ROOT_CLASS: &str =
    "navbar navbar-expand-lg center-nav transparent navbar-light navbar-clone fixed";

/// Pixel offset at which the navbar switches to its fixed presentation.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 350;

/// Which logo artwork to show. Maps to `/img/{name}.png`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoVariant {
    #[default]
    Dark,
    Light,
    /// Any other file stem under `/img/`.
    Custom(String),
}

impl LogoVariant {
    pub fn file_stem(&self) -> &str {
        match self {
            LogoVariant::Dark => "logo-dark",
            LogoVariant::Light => "logo-light",
            LogoVariant::Custom(stem) => stem,
        }
    }

    pub fn src(&self) -> String {
        format!("/img/{}.png", self.file_stem())
    }

    pub fn srcset(&self) -> String {
        format!("/img/{}@2x.png 2x", self.file_stem())
    }
}

impl fmt::Display for LogoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfiguration {
    pub show_info: bool,
    pub show_cart: bool,
    pub show_search: bool,
    pub show_social: bool,
    pub show_language: bool,
    pub fancy_layout: bool,
    pub sticky_placeholder: bool,
    /// `None` falls back to [`LogoVariant::Dark`].
    pub logo_variant: Option<LogoVariant>,
    pub root_class_name: String,
    pub other_region_class_name: String,
    pub scroll_threshold: u32,
}

impl Default for NavConfiguration {
    fn default() -> Self {
        Self {
            show_info: false,
            show_cart: false,
            show_search: false,
            show_social: false,
            show_language: false,
            fancy_layout: false,
            sticky_placeholder: true,
            logo_variant: None,
            root_class_name: DEFAULT_ROOT_CLASS.to_string(),
            other_region_class_name: DEFAULT_OTHER_REGION_CLASS.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl NavConfiguration {
    pub fn from_json(src: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Parse `src`, falling back to defaults (with a warning) when it is
    /// malformed. `origin` only labels the log line.
    pub fn from_json_or_default(src: &str, origin: &str) -> Self {
        match Self::from_json(src) {
            Ok(config) => {
                logging::log_config_loaded(origin);
                config
            }
            Err(err) => {
                logging::log_config_fallback(origin, &err);
                Self::default()
            }
        }
    }

    /// Logo used while the navbar rests at the top of the page.
    pub fn resting_logo(&self) -> LogoVariant {
        self.logo_variant.clone().unwrap_or_default()
    }
}
