/// A card in the services block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub id: u32,
    /// Icon font class list (Unicons).
    pub icon: &'static str,
    /// Fluent message id of the card title.
    pub title: &'static str,
}

pub const SERVICES: [ServiceItem; 4] = [
    ServiceItem {
        id: 1,
        icon: "uil uil-desktop",
        title: "service-web-design",
    },
    ServiceItem {
        id: 2,
        icon: "uil uil-brackets-curly",
        title: "service-full-stack",
    },
    ServiceItem {
        id: 3,
        icon: "uil uil-mobile-android",
        title: "service-mobile-apps",
    },
    ServiceItem {
        id: 4,
        icon: "uil uil-chart-line",
        title: "service-growth",
    },
];
