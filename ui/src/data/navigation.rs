/// One entry of the primary navigation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: u32,
    /// Fluent message id of the visible label.
    pub label: &'static str,
    /// Target URL. Empty means "not routed yet": the entry renders as text.
    pub link: &'static str,
}

impl NavItem {
    pub const fn new(id: u32, label: &'static str, link: &'static str) -> Self {
        Self { id, label, link }
    }

    pub fn has_link(&self) -> bool {
        !self.link.trim().is_empty()
    }
}

const PRIMARY: [NavItem; 5] = [
    NavItem::new(1, "nav-services", ""),
    NavItem::new(2, "nav-our-work", ""),
    NavItem::new(3, "nav-careers", ""),
    NavItem::new(4, "nav-blog", ""),
    NavItem::new(5, "nav-about", ""),
];

pub fn primary_items() -> Vec<NavItem> {
    PRIMARY.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_items_keep_their_order_and_ids() {
        let ids: Vec<u32> = primary_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn blank_links_count_as_missing() {
        assert!(!NavItem::new(9, "nav-blog", "  ").has_link());
        assert!(NavItem::new(9, "nav-blog", "/blog").has_link());
    }
}
