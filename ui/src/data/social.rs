#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub id: u32,
    /// Icon font class list (Unicons).
    pub icon: &'static str,
    pub url: &'static str,
    /// Network name, used as the anchor's accessible label.
    pub name: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        id: 1,
        icon: "uil uil-twitter",
        url: "https://twitter.com/",
        name: "Twitter",
    },
    SocialLink {
        id: 2,
        icon: "uil uil-facebook-f",
        url: "https://facebook.com/",
        name: "Facebook",
    },
    SocialLink {
        id: 3,
        icon: "uil uil-dribbble",
        url: "https://dribbble.com/",
        name: "Dribbble",
    },
    SocialLink {
        id: 4,
        icon: "uil uil-instagram",
        url: "https://instagram.com/",
        name: "Instagram",
    },
    SocialLink {
        id: 5,
        icon: "uil uil-youtube",
        url: "https://youtube.com/",
        name: "YouTube",
    },
];
