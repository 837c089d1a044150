mod social_links;
pub use social_links::SocialLinks;
