//! Language switches inside a running `VirtualDom`: components that are
//! already mounted must pick up the new bundle. Own test binary because the
//! Fluent loader is process-global.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use ui::blocks::Services;
use ui::core::config::NavConfiguration;
use ui::i18n;
use ui::Navbar;

#[derive(Clone, Default)]
struct LangSlot(Rc<RefCell<Option<Signal<String>>>>);

fn site(slot: LangSlot) -> Element {
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    use_hook(|| slot.0.replace(Some(lang_code)));

    rsx! {
        Navbar { config: NavConfiguration { show_language: true, ..Default::default() } }
        Services {}
    }
}

#[test]
fn mounted_navbar_and_services_follow_the_language_signal() {
    i18n::set_language("en-US").expect("fallback bundle loads");
    let slot = LangSlot::default();
    let mut dom = VirtualDom::new_with_props(site, slot.clone());
    dom.rebuild_in_place();

    let english = dioxus_ssr::render(&dom);
    assert!(english.contains("Careers"));
    assert!(!english.contains("Carrières"));

    // Same steps as picking "fr" in the language dropdown.
    i18n::set_language("fr-FR").expect("french bundle loads");
    dom.in_runtime(|| {
        if let Some(mut lang_code) = *slot.0.borrow() {
            lang_code.set("fr-FR".to_string());
        }
    });
    dom.render_immediate(&mut NoOpMutations);

    let french = dioxus_ssr::render(&dom);
    assert!(french.contains("Carrières"));
    assert!(french.contains("Les solutions que nous proposons"));
    assert!(french.contains("Conception web"));
    assert!(!french.contains("Careers"));

    drop(dom);
    i18n::set_language("en-US").expect("fallback bundle loads");
}
