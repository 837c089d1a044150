use dioxus::prelude::*;

use ui::core::config::NavConfiguration;
use ui::i18n;
use ui::views::Home;
use ui::Navbar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Navbar settings for this site; missing fields take the library defaults.
const SITE_CONFIG: &str = include_str!("../site.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global language code; the navbar's language picker writes it, pages
    // read it to re-render.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(|| {
        let config = NavConfiguration::from_json_or_default(SITE_CONFIG, "site.json");
        tracing::info!(
            language = %i18n::current_language(),
            threshold = config.scroll_threshold,
            fancy = config.fancy_layout,
            "Site configuration ready"
        );
        config
    });

    // Localized components subscribe to `lang_code` themselves.
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Layout route: the shared navbar above every page.
#[component]
fn SiteNavbar() -> Element {
    let config = use_context::<NavConfiguration>();
    let _lang = i18n::use_language_code();

    rsx! {
        Navbar {
            config,
            button: rsx! {
                a { class: "btn btn-sm btn-primary rounded-pill", href: "#contact",
                    {i18n::tr("nav-cta")}
                }
            },
        }
        Outlet::<Route> {}
    }
}
