//! Mount/teardown behaviour of the scroll-threshold hook inside a live
//! `VirtualDom`, driven by an in-memory scroll source.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use ui::core::config::{NavConfiguration, FIXED_ROOT_CLASS};
use ui::scroll::{use_scroll_threshold, ManualScrollSource, ScrollSource, ScrollSourceHandle};
use ui::Navbar;

#[derive(Clone, Default)]
struct ProbeSlot(Rc<RefCell<Option<ReadOnlySignal<bool>>>>);

#[derive(Clone)]
struct Harness {
    source: Option<ManualScrollSource>,
    slot: ProbeSlot,
}

fn harness(props: Harness) -> Element {
    let source = props.source.clone();
    use_hook(move || {
        if let Some(source) = source {
            provide_context(ScrollSourceHandle::new(source));
        }
    });
    use_context_provider(|| props.slot.clone());
    rsx! { Probe { threshold: 350 } }
}

#[component]
fn Probe(threshold: u32) -> Element {
    let past = use_scroll_threshold(threshold);
    let slot = use_context::<ProbeSlot>();
    slot.0.replace(Some(past));
    rsx! { span { "{past}" } }
}

fn read(dom: &VirtualDom, slot: &ProbeSlot) -> Option<bool> {
    dom.in_runtime(|| slot.0.borrow().as_ref().map(|past| *past.peek()))
}

#[test]
fn signal_follows_offsets_and_detaches_on_unmount() {
    let source = ManualScrollSource::new();
    let slot = ProbeSlot::default();
    let mut dom = VirtualDom::new_with_props(
        harness,
        Harness {
            source: Some(source.clone()),
            slot: slot.clone(),
        },
    );
    dom.rebuild_in_place();

    assert_eq!(source.listener_count(), 1);
    assert_eq!(read(&dom, &slot), Some(false));

    dom.in_runtime(|| source.scroll_to(349.0));
    assert_eq!(read(&dom, &slot), Some(false));

    dom.in_runtime(|| source.scroll_to(350.0));
    assert_eq!(read(&dom, &slot), Some(true));

    dom.in_runtime(|| source.scroll_to(80.0));
    assert_eq!(read(&dom, &slot), Some(false));

    drop(dom);
    assert_eq!(source.listener_count(), 0);
    // Nothing is listening any more; this must not touch the dropped signal.
    source.scroll_to(900.0);
}

#[test]
fn signal_starts_false_even_when_already_scrolled() {
    let source = ManualScrollSource::new();
    source.scroll_to(900.0);
    let slot = ProbeSlot::default();
    let mut dom = VirtualDom::new_with_props(
        harness,
        Harness {
            source: Some(source.clone()),
            slot: slot.clone(),
        },
    );
    dom.rebuild_in_place();

    assert_eq!(source.offset(), Some(900.0));
    assert_eq!(read(&dom, &slot), Some(false));

    dom.in_runtime(|| source.scroll_to(901.0));
    assert_eq!(read(&dom, &slot), Some(true));
}

#[test]
fn missing_source_leaves_signal_false() {
    let slot = ProbeSlot::default();
    let mut dom = VirtualDom::new_with_props(
        harness,
        Harness {
            source: None,
            slot: slot.clone(),
        },
    );
    dom.rebuild_in_place();

    assert_eq!(read(&dom, &slot), Some(false));
}

#[derive(Clone)]
struct PageProps {
    source: ManualScrollSource,
}

fn page(props: PageProps) -> Element {
    let source = props.source.clone();
    use_context_provider(move || ScrollSourceHandle::new(source));
    rsx! { Navbar { config: NavConfiguration::default() } }
}

#[test]
fn navbar_rerenders_fixed_after_crossing_threshold() {
    ui::i18n::set_language("en-US").expect("fallback bundle loads");
    let source = ManualScrollSource::new();
    let mut dom = VirtualDom::new_with_props(
        page,
        PageProps {
            source: source.clone(),
        },
    );
    dom.rebuild_in_place();

    let resting = dioxus_ssr::render(&dom);
    assert!(!resting.contains(FIXED_ROOT_CLASS));
    assert!(resting.contains("padding-top: 0px"));

    dom.in_runtime(|| source.scroll_to(600.0));
    dom.render_immediate(&mut NoOpMutations);

    let fixed = dioxus_ssr::render(&dom);
    assert!(fixed.contains(FIXED_ROOT_CLASS));

    drop(dom);
    assert_eq!(source.listener_count(), 0);
}
