//! Active locale and its document side effects.
/// Document head metadata sink
pub mod document;
/// Locale state owner and reader context
pub mod resolver;

pub use document::{
    DocumentMetadata,
    HeadlessDocument,
    MetaKey,
    MetaTag,
    meta_tags,
};
pub use resolver::{
    ContentResolver,
    SiteContext,
    toggle_locale,
};
