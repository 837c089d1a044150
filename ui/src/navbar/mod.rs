//! Sticky site navbar: the decision layer (`plan`), the toolbar regions
//! (`partials`), and the components (`view`).

mod partials;
pub mod plan;
mod view;

pub use partials::{LanguageSelect, SocialRegion};
pub use plan::{NavLayout, NavPlan, RegionDescriptor, RegionKind};
pub use view::{NavigationComposite, Navbar};
