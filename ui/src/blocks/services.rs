use dioxus::prelude::*;

use crate::data::services::{ServiceItem, SERVICES};
use crate::i18n;
use crate::t;

/// "Solutions that we offer" section: heading plus one card per service.
#[component]
pub fn Services(#[props(default = SERVICES.to_vec())] services: Vec<ServiceItem>) -> Element {
    let _lang = i18n::use_language_code();

    rsx! {
        div { class: "container pt-6",
            div { class: "row",
                div { class: "col-md-11 col-lg-8 col-xl-7 col-xxl-6 mx-auto text-center",
                    h2 { class: "display-2 mb-4", {t!("services-title")} }
                    p { class: "lead fs-lg mb-11", {t!("services-lead")} }
                }
            }

            div { class: "row gx-md-8 gy-8 text-center mb-14 mb-md-17",
                for service in services.iter() {
                    ServiceCard { key: "{service.id}", service: service.clone() }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(service: ServiceItem) -> Element {
    let _lang = i18n::use_language_code();
    let title = i18n::tr(service.title);

    rsx! {
        div { class: "col-md-6 col-lg-3",
            div { class: "svg-bg svg-bg-lg bg-white rounded-xl shadow-xl mb-6",
                i { class: "{service.icon} solid-duo text-grape-fuchsia" }
            }
            h3 { "{title}" }
            p { class: "mb-3", {t!("service-card-body")} }
            a { class: "more hover", href: "#", {t!("service-learn-more")} }
        }
    }
}
