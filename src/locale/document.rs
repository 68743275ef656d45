//! Document head metadata.
//!
//! The page declares its language, title and social meta tags as a function of
//! the active locale. Hosts implement [`DocumentMetadata`] against the real
//! document; [`HeadlessDocument`] records the writes in memory.

use std::collections::BTreeMap;

use crate::content::MetaContent;
use crate::types::Locale;

/// Image shared by every locale's Open Graph card.
pub const OG_IMAGE_URL: &str = "https://fasterplop.com/og-image-main.jpg";

/// Attribute a meta tag is looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(&'static str),
    /// `<meta property="...">`
    Property(&'static str),
}

impl MetaKey {
    /// CSS selector locating the tag in the document head.
    #[must_use]
    pub fn selector(self) -> String {
        match self {
            Self::Name(name) => format!("meta[name=\"{name}\"]"),
            Self::Property(property) => format!("meta[property=\"{property}\"]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self { key: MetaKey::Name(name), content: content.into() }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self { key: MetaKey::Property(property), content: content.into() }
    }
}

/// Meta tags for a locale's document head.
#[must_use]
pub fn meta_tags(meta: &MetaContent) -> Vec<MetaTag> {
    vec![
        MetaTag::name("description", meta.description.as_str()),
        MetaTag::property("og:title", meta.og_title.as_str()),
        MetaTag::property("og:description", meta.og_description.as_str()),
        MetaTag::property("og:image", OG_IMAGE_URL),
        MetaTag::property("og:type", "website"),
        MetaTag::name("twitter:card", "summary_large_image"),
        MetaTag::name("robots", "index, follow"),
    ]
}

/// Writable document head.
pub trait DocumentMetadata {
    /// Sets the page title.
    fn set_title(&mut self, title: &str);

    /// Sets the root element's `lang` attribute.
    fn set_language(&mut self, locale: Locale);

    /// Creates the tag if absent, then sets its content.
    fn upsert_meta(&mut self, tag: &MetaTag);
}

/// Writes every locale-dependent piece of the document head.
pub fn apply_locale<D: DocumentMetadata + ?Sized>(
    document: &mut D,
    locale: Locale,
    meta: &MetaContent,
) {
    document.set_language(locale);
    document.set_title(&meta.title);
    for tag in meta_tags(meta) {
        document.upsert_meta(&tag);
    }
}

/// In-memory document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessDocument {
    /// Current `<title>`.
    pub title: String,
    /// Current `lang` attribute, unset until the first write.
    pub language: Option<Locale>,
    /// Meta tag content by selector.
    pub meta: BTreeMap<String, String>,
}

impl HeadlessDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a meta tag, if present.
    #[must_use]
    pub fn meta_content(&self, key: MetaKey) -> Option<&str> {
        self.meta.get(&key.selector()).map(String::as_str)
    }
}

impl DocumentMetadata for HeadlessDocument {
    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn set_language(&mut self, locale: Locale) {
        self.language = Some(locale);
    }

    fn upsert_meta(&mut self, tag: &MetaTag) {
        self.meta.insert(tag.key.selector(), tag.content.clone());
    }
}
