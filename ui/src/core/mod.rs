//! Cross-cutting plumbing: configuration, errors, logging.

pub mod config;
pub mod errors;
pub mod logging;
