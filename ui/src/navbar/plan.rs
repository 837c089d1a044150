//! What the navbar shows for a given configuration and scroll state.
//!
//! [`NavPlan::build`] is the whole decision layer: the component in
//! `view.rs` only turns a plan into markup.

use crate::core::config::{LogoVariant, NavConfiguration, FIXED_ROOT_CLASS};

/// Off-canvas panel ids shared with the external toggle script. The navbar
/// only renders the triggers; the panels live elsewhere on the page.
pub const OFFCANVAS_NAV: &str = "offcanvas-nav";
pub const OFFCANVAS_INFO: &str = "offcanvas-info";
pub const OFFCANVAS_SEARCH: &str = "offcanvas-search";
pub const OFFCANVAS_CART: &str = "offcanvas-cart";

/// Demonstration item count shown on the cart trigger.
pub const CART_BADGE_COUNT: u32 = 3;

/// Optional regions of the right-hand toolbar, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Language,
    Info,
    Search,
    CallToAction,
    Cart,
    Social,
}

impl RegionKind {
    pub const ALL: [RegionKind; 6] = [
        RegionKind::Language,
        RegionKind::Info,
        RegionKind::Search,
        RegionKind::CallToAction,
        RegionKind::Cart,
        RegionKind::Social,
    ];

    /// Id of the off-canvas panel this region's trigger opens, if any.
    pub fn offcanvas_panel(self) -> Option<&'static str> {
        match self {
            RegionKind::Info => Some(OFFCANVAS_INFO),
            RegionKind::Search => Some(OFFCANVAS_SEARCH),
            RegionKind::Cart => Some(OFFCANVAS_CART),
            RegionKind::Language | RegionKind::CallToAction | RegionKind::Social => None,
        }
    }

    pub fn icon_class(self) -> Option<&'static str> {
        match self {
            RegionKind::Info => Some("uil uil-info-circle"),
            RegionKind::Search => Some("uil uil-search"),
            RegionKind::Cart => Some("uil uil-shopping-cart"),
            RegionKind::Language | RegionKind::CallToAction | RegionKind::Social => None,
        }
    }

    fn enabled_in(self, config: &NavConfiguration, has_call_to_action: bool) -> bool {
        match self {
            RegionKind::Language => config.show_language,
            RegionKind::Info => config.show_info,
            RegionKind::Search => config.show_search,
            RegionKind::CallToAction => has_call_to_action,
            RegionKind::Cart => config.show_cart,
            RegionKind::Social => config.show_social,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDescriptor {
    pub kind: RegionKind,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    /// Content inside an extra white, bordered panel.
    Fancy,
    Standard,
}

impl NavLayout {
    pub fn container_class(self) -> &'static str {
        match self {
            NavLayout::Fancy => "container",
            NavLayout::Standard => "container flex-lg-row flex-nowrap align-items-center",
        }
    }
}

pub const FANCY_PANEL_CLASS: &str = "navbar-collapse-wrapper bg-white d-flex flex-row flex-nowrap w-100 justify-content-between align-items-center";

#[derive(Debug, Clone, PartialEq)]
pub struct NavPlan {
    pub root_class: String,
    pub logo: LogoVariant,
    /// `Some(height)` when the sticky placeholder is rendered.
    pub spacer_height: Option<f64>,
    pub layout: NavLayout,
    pub other_region_class: String,
    pub regions: Vec<RegionDescriptor>,
}

impl NavPlan {
    /// `bar_height` is the last measured height of the `nav` element; it is
    /// only read, and only while the bar is fixed.
    pub fn build(
        config: &NavConfiguration,
        scrolled: bool,
        has_call_to_action: bool,
        bar_height: f64,
    ) -> Self {
        let root_class = if scrolled {
            FIXED_ROOT_CLASS.to_string()
        } else {
            config.root_class_name.clone()
        };

        let logo = if scrolled {
            LogoVariant::Dark
        } else {
            config.resting_logo()
        };

        let spacer_height = config
            .sticky_placeholder
            .then(|| if scrolled { bar_height.max(0.0) } else { 0.0 });

        let layout = if config.fancy_layout {
            NavLayout::Fancy
        } else {
            NavLayout::Standard
        };

        let regions = RegionKind::ALL
            .iter()
            .map(|&kind| RegionDescriptor {
                kind,
                enabled: kind.enabled_in(config, has_call_to_action),
            })
            .collect();

        Self {
            root_class,
            logo,
            spacer_height,
            layout,
            other_region_class: config.other_region_class_name.clone(),
            regions,
        }
    }

    pub fn enabled_regions(&self) -> impl Iterator<Item = RegionKind> + '_ {
        self.regions
            .iter()
            .filter(|region| region.enabled)
            .map(|region| region.kind)
    }

    pub fn shows(&self, kind: RegionKind) -> bool {
        self.enabled_regions().any(|enabled| enabled == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_ROOT_CLASS;
    use crate::scroll::{ManualScrollSource, ScrollSource, ScrollThreshold};

    fn with_flag(kind: RegionKind) -> (NavConfiguration, bool) {
        let mut config = NavConfiguration::default();
        let mut cta = false;
        match kind {
            RegionKind::Language => config.show_language = true,
            RegionKind::Info => config.show_info = true,
            RegionKind::Search => config.show_search = true,
            RegionKind::CallToAction => cta = true,
            RegionKind::Cart => config.show_cart = true,
            RegionKind::Social => config.show_social = true,
        }
        (config, cta)
    }

    #[test]
    fn resting_bar_uses_caller_class_and_logo() {
        let config = NavConfiguration {
            root_class_name: "navbar custom".into(),
            logo_variant: Some(LogoVariant::Light),
            ..Default::default()
        };
        let plan = NavPlan::build(&config, false, false, 80.0);
        assert_eq!(plan.root_class, "navbar custom");
        assert_eq!(plan.logo, LogoVariant::Light);
    }

    #[test]
    fn scrolled_bar_forces_fixed_class_and_dark_logo() {
        let config = NavConfiguration {
            root_class_name: "navbar custom".into(),
            logo_variant: Some(LogoVariant::Light),
            ..Default::default()
        };
        let plan = NavPlan::build(&config, true, false, 80.0);
        assert_eq!(plan.root_class, FIXED_ROOT_CLASS);
        assert_eq!(plan.logo, LogoVariant::Dark);
    }

    #[test]
    fn defaults_rest_transparent() {
        let plan = NavPlan::build(&NavConfiguration::default(), false, false, 0.0);
        assert_eq!(plan.root_class, DEFAULT_ROOT_CLASS);
        assert_eq!(plan.layout, NavLayout::Standard);
        assert_eq!(plan.enabled_regions().count(), 0);
        assert_eq!(plan.spacer_height, Some(0.0));
    }

    #[test]
    fn disabled_placeholder_is_omitted() {
        let config = NavConfiguration {
            sticky_placeholder: false,
            ..Default::default()
        };
        assert_eq!(NavPlan::build(&config, true, false, 90.0).spacer_height, None);
    }

    #[test]
    fn each_flag_enables_exactly_its_region() {
        for kind in RegionKind::ALL {
            let (config, cta) = with_flag(kind);
            let plan = NavPlan::build(&config, false, cta, 0.0);
            let enabled: Vec<RegionKind> = plan.enabled_regions().collect();
            assert_eq!(enabled, vec![kind], "toggling {kind:?}");
        }
    }

    #[test]
    fn regions_follow_render_order_when_all_enabled() {
        let config = NavConfiguration {
            show_info: true,
            show_cart: true,
            show_search: true,
            show_social: true,
            show_language: true,
            ..Default::default()
        };
        let plan = NavPlan::build(&config, false, true, 0.0);
        let enabled: Vec<RegionKind> = plan.enabled_regions().collect();
        assert_eq!(enabled, RegionKind::ALL.to_vec());
    }

    #[test]
    fn only_toggle_regions_target_offcanvas_panels() {
        assert_eq!(RegionKind::Cart.offcanvas_panel(), Some("offcanvas-cart"));
        assert_eq!(RegionKind::Info.offcanvas_panel(), Some("offcanvas-info"));
        assert_eq!(RegionKind::Search.offcanvas_panel(), Some("offcanvas-search"));
        assert_eq!(RegionKind::Social.offcanvas_panel(), None);
    }

    #[test]
    fn spacer_follows_the_bar_across_the_threshold() {
        let config = NavConfiguration::default();
        let source = ManualScrollSource::new();
        let tracker = std::rc::Rc::new(std::cell::Cell::new(ScrollThreshold::new(
            config.scroll_threshold,
        )));
        let observer = tracker.clone();
        let _sub = source
            .subscribe(Box::new(move |offset| {
                let mut state = observer.get();
                state.observe(offset);
                observer.set(state);
            }))
            .unwrap();
        let measured = 92.0;

        source.scroll_to(120.0);
        let plan = NavPlan::build(&config, tracker.get().is_past(), false, measured);
        assert_eq!(plan.spacer_height, Some(0.0));

        source.scroll_to(350.0);
        let plan = NavPlan::build(&config, tracker.get().is_past(), false, measured);
        assert_eq!(plan.spacer_height, Some(92.0));

        source.scroll_to(20.0);
        let plan = NavPlan::build(&config, tracker.get().is_past(), false, measured);
        assert_eq!(plan.spacer_height, Some(0.0));
    }

    #[test]
    fn identical_inputs_build_identical_plans() {
        let config = NavConfiguration {
            show_cart: true,
            fancy_layout: true,
            ..Default::default()
        };
        assert_eq!(
            NavPlan::build(&config, true, true, 64.0),
            NavPlan::build(&config, true, true, 64.0)
        );
    }
}
