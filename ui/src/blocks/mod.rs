//! Marketing page sections.

mod services;
pub use services::Services;
