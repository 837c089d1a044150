//! Self-contained toolbar regions.

use dioxus::prelude::*;

use crate::components::SocialLinks;
use crate::i18n;
use crate::t;

/// Language dropdown. Switches the shared Fluent loader and, when the
/// platform provides one, the global `Signal<String>` language code so the
/// rest of the page re-renders.
#[component]
pub fn LanguageSelect() -> Element {
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current = use_signal(i18n::current_language);
    let languages = use_hook(i18n::available_languages);

    let shown = lang_code_ctx.map(|code| code()).unwrap_or_else(|| current());

    let options: Vec<(String, String)> = languages
        .iter()
        .map(|code| {
            let class = if *code == shown {
                "dropdown-item active"
            } else {
                "dropdown-item"
            };
            (code.clone(), class.to_string())
        })
        .collect();

    let mut choose = move |code: String| {
        if i18n::set_language(&code).is_ok() {
            current.set(code.clone());
            if let Some(mut global) = lang_code_ctx {
                global.set(code);
            }
        }
    };

    rsx! {
        li { class: "nav-item dropdown language-select text-uppercase",
            a {
                class: "nav-link dropdown-item dropdown-toggle",
                role: "button",
                aria_label: t!("nav-language-label"),
                aria_expanded: "false",
                "data-bs-toggle": "dropdown",
                {i18n::short_label(&shown).to_string()}
            }
            ul { class: "dropdown-menu",
                for (code, class) in options {
                    li { key: "{code}", class: "nav-item",
                        button {
                            r#type: "button",
                            class: "{class}",
                            onclick: {
                                let code = code.clone();
                                move |_| choose(code.clone())
                            },
                            {i18n::short_label(&code).to_string()}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SocialRegion() -> Element {
    rsx! {
        li { class: "nav-item d-none d-md-block",
            SocialLinks { class: "nav social social-muted justify-content-end text-end" }
        }
    }
}
