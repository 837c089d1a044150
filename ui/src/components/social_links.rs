use dioxus::prelude::*;

use crate::data::social::SOCIAL_LINKS;

/// Row of social network icons.
#[component]
pub fn SocialLinks(
    #[props(default = "nav social social-white mt-4".to_string())] class: String,
) -> Element {
    rsx! {
        nav { class: "{class}",
            for link in SOCIAL_LINKS.iter() {
                a {
                    key: "{link.id}",
                    href: link.url,
                    target: "_blank",
                    rel: "noreferrer",
                    aria_label: link.name,
                    i { class: link.icon }
                }
            }
        }
    }
}
