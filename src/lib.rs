//! fasterplop-site
//!
//! Host-agnostic logic of the Fasterplop portfolio page: the bilingual content
//! catalog and active locale, one-shot scroll reveals, pointer accents, the
//! contact form with EmailJS delivery, and the page model that composes them.

pub mod config;
pub mod contact;
pub mod content;
pub mod locale;
pub mod logging;
pub mod page;
pub mod pointer;
pub mod reveal;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use contact::ContactController;
pub use content::LocaleCatalog;
pub use locale::{
    ContentResolver,
    SiteContext,
};
pub use page::Page;
