//! Static site content. Labels are Fluent message ids, resolved at render
//! time through `i18n::tr`.

pub mod contact;
pub mod navigation;
pub mod services;
pub mod social;
