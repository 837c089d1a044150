//! Shared UI crate for the Serpens marketing site: the sticky navbar, page
//! sections, and the plumbing they share.

pub mod blocks;
pub mod components;
pub mod core;
pub mod data;
pub mod i18n;
pub mod navbar;
pub mod scroll;
pub mod views;

pub use navbar::{NavigationComposite, Navbar};
