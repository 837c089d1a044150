use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::SocialLinks;
use crate::core::config::NavConfiguration;
use crate::data::contact::{self, BRAND, EMAIL, PHONE_DISPLAY};
use crate::data::navigation::{self, NavItem};
use crate::i18n;
use crate::scroll::use_scroll_threshold;
use crate::t;

use super::partials::{LanguageSelect, SocialRegion};
use super::plan::{
    NavLayout, NavPlan, RegionKind, CART_BADGE_COUNT, FANCY_PANEL_CLASS, OFFCANVAS_NAV,
};

/// Site navbar wired to the page scroll.
///
/// Reads the scroll source from context (see `scroll::ScrollSourceHandle`),
/// measures its own `nav` element for the sticky placeholder, and hands
/// everything else to [`NavigationComposite`].
#[component]
pub fn Navbar(
    #[props(default)] config: NavConfiguration,
    #[props(default = navigation::primary_items())] items: Vec<NavItem>,
    button: Option<Element>,
) -> Element {
    let scrolled = use_scroll_threshold(config.scroll_threshold);
    let mut nav_node = use_signal(|| None::<Rc<MountedData>>);
    let mut bar_height = use_signal(|| 0.0_f64);

    // Re-measure whenever the bar changes presentation or remounts.
    use_effect(move || {
        let _presentation = scrolled();
        let Some(node) = nav_node() else {
            return;
        };
        spawn(async move {
            if let Ok(rect) = node.get_client_rect().await {
                bar_height.set(rect.height());
            }
        });
    });

    rsx! {
        NavigationComposite {
            config,
            scrolled: scrolled(),
            items,
            button,
            bar_height: bar_height(),
            onmeasure: move |evt: MountedEvent| nav_node.set(Some(evt.data())),
        }
    }
}

/// Markup for one scroll state. Pure: the same props always render the same
/// tree.
#[component]
pub fn NavigationComposite(
    config: NavConfiguration,
    scrolled: bool,
    #[props(default = navigation::primary_items())] items: Vec<NavItem>,
    button: Option<Element>,
    // Last measured height of the `nav` element, in pixels.
    #[props(default)]
    bar_height: f64,
    onmeasure: Option<EventHandler<MountedEvent>>,
) -> Element {
    let _lang = i18n::use_language_code();
    let plan = NavPlan::build(&config, scrolled, button.is_some(), bar_height);

    let regions = plan
        .enabled_regions()
        .map(|kind| region_item(kind, button.as_ref()));

    let header = rsx! {
        div { class: "navbar-brand w-100",
            a { href: "/",
                img {
                    alt: t!("nav-logo-alt"),
                    src: plan.logo.src(),
                    srcset: plan.logo.srcset(),
                }
            }
        }

        div {
            id: OFFCANVAS_NAV,
            class: "navbar-collapse offcanvas offcanvas-nav offcanvas-start",
            "data-bs-scroll": "true",
            div { class: "offcanvas-header d-lg-none",
                h3 { class: "text-white fs-30 mb-0", "{BRAND}" }
                button {
                    r#type: "button",
                    class: "btn-close btn-close-white",
                    aria_label: t!("nav-close"),
                    "data-bs-dismiss": "offcanvas",
                }
            }

            div { class: "offcanvas-body ms-lg-auto d-flex flex-column h-100",
                ul { class: "navbar-nav",
                    for item in items.iter() {
                        NavEntry { key: "{item.id}", item: item.clone() }
                    }
                }

                // Small screens only; the breakpoint class does the hiding.
                div { class: "offcanvas-footer d-lg-none",
                    div {
                        a { class: "link-inverse", href: contact::mailto(), "{EMAIL}" }
                        br {}
                        a { href: contact::tel(), "{PHONE_DISPLAY}" }
                        br {}
                        SocialLinks {}
                    }
                }
            }
        }

        div { class: "{plan.other_region_class}",
            ul { class: "navbar-nav flex-row align-items-center ms-auto",
                {regions}

                li { class: "nav-item d-lg-none",
                    button {
                        class: "hamburger offcanvas-nav-btn",
                        aria_label: t!("nav-menu"),
                        "data-bs-toggle": "offcanvas",
                        "data-bs-target": "#{OFFCANVAS_NAV}",
                        span {}
                    }
                }
            }
        }
    };

    let body = match plan.layout {
        NavLayout::Fancy => rsx! {
            div { class: plan.layout.container_class(),
                div { class: FANCY_PANEL_CLASS, {header} }
            }
        },
        NavLayout::Standard => rsx! {
            div { class: plan.layout.container_class(), {header} }
        },
    };

    rsx! {
        if let Some(height) = plan.spacer_height {
            div { class: "navbar-placeholder", style: "padding-top: {height}px" }
        }

        nav {
            class: "{plan.root_class}",
            onmounted: move |evt| {
                if let Some(handler) = onmeasure {
                    handler.call(evt);
                }
            },
            {body}
        }
    }
}

/// Primary nav entry. Entries without a link degrade to plain text.
#[component]
fn NavEntry(item: NavItem) -> Element {
    let _lang = i18n::use_language_code();
    let label = i18n::tr(item.label);

    if item.has_link() {
        rsx! {
            li { class: "nav-item",
                a { class: "nav-link", href: item.link, "{label}" }
            }
        }
    } else {
        rsx! {
            li { class: "nav-item nav-link", "{label}" }
        }
    }
}

fn region_item(kind: RegionKind, button: Option<&Element>) -> Element {
    match kind {
        RegionKind::Language => rsx! { LanguageSelect {} },
        RegionKind::Social => rsx! { SocialRegion {} },
        RegionKind::CallToAction => match button.cloned() {
            Some(button) => rsx! {
                li { class: "nav-item d-none d-md-block", {button} }
            },
            None => rsx! {},
        },
        RegionKind::Info | RegionKind::Search => offcanvas_trigger(kind, "nav-link", None),
        RegionKind::Cart => offcanvas_trigger(
            kind,
            "nav-link position-relative d-flex flex-row align-items-center",
            Some(CART_BADGE_COUNT),
        ),
    }
}

fn offcanvas_trigger(kind: RegionKind, link_class: &str, badge: Option<u32>) -> Element {
    let panel = kind.offcanvas_panel().unwrap_or_default();
    let icon = kind.icon_class().unwrap_or_default();
    let label = match kind {
        RegionKind::Info => t!("nav-info"),
        RegionKind::Search => t!("nav-search"),
        _ => t!("nav-cart"),
    };

    rsx! {
        li { class: "nav-item",
            a {
                class: "{link_class}",
                aria_label: label,
                "data-bs-toggle": "offcanvas",
                "data-bs-target": "#{panel}",
                i { class: icon }
                if let Some(count) = badge {
                    span { class: "badge badge-cart bg-primary", "{count}" }
                }
            }
        }
    }
}
