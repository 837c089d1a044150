use dioxus::prelude::*;

use crate::blocks::Services;
use crate::i18n;

#[component]
pub fn Home() -> Element {
    // Re-render when the navbar switches language.
    let lang_marker = i18n::use_language_code();
    tracing::trace!(lang = %lang_marker, "Home render");

    rsx! {
        section { class: "wrapper bg-light",
            div { class: "container pt-10 pb-8 text-center",
                h1 { class: "display-1 mb-5", {crate::t!("home-title")} }
                p { class: "lead fs-lg mb-0", {crate::t!("home-lead")} }
            }
        }
        section { class: "wrapper", Services {} }
    }
}
