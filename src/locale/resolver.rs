//! Locale state and content resolution.
//!
//! [`ContentResolver`] is the single writer of the active locale. Sections
//! read through a [`SiteContext`], a cheap clone holding the shared catalog and
//! a `watch` receiver, so they see every switch without owning the state.

use std::sync::Arc;

use tokio::sync::watch;

use super::document::{
    DocumentMetadata,
    apply_locale,
};
use crate::content::{
    ContentTree,
    LocaleCatalog,
};
use crate::types::Locale;

/// Two-state flip between the supported locales.
///
/// # Examples
/// ```
/// use fasterplop_site::locale::toggle_locale;
/// use fasterplop_site::types::Locale;
///
/// assert_eq!(toggle_locale(Locale::Es), Locale::En);
/// assert_eq!(toggle_locale(toggle_locale(Locale::Es)), Locale::Es);
/// ```
#[must_use]
pub const fn toggle_locale(current: Locale) -> Locale {
    current.toggled()
}

/// Owner of the active locale.
///
/// Writes the document head whenever the locale changes, and once on creation.
pub struct ContentResolver<D: DocumentMetadata> {
    /// Shared catalog.
    catalog: Arc<LocaleCatalog>,
    /// Active locale; receivers live in [`SiteContext`]s.
    state: watch::Sender<Locale>,
    /// Document head the locale is mirrored into.
    document: D,
}

impl<D: DocumentMetadata> ContentResolver<D> {
    /// Creates a resolver and writes the initial locale's metadata.
    pub fn new(catalog: Arc<LocaleCatalog>, initial: Locale, mut document: D) -> Self {
        apply_locale(&mut document, initial, &catalog.get(initial).meta);
        let (state, _) = watch::channel(initial);
        tracing::debug!("Content resolver started with locale '{}'", initial);
        Self { catalog, state, document }
    }

    /// Currently active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        *self.state.borrow()
    }

    /// Content of the active locale.
    #[must_use]
    pub fn content(&self) -> &ContentTree {
        self.catalog.get(self.locale())
    }

    /// Content of any locale, falling back to the catalog default.
    #[must_use]
    pub fn get_catalog(&self, locale: Locale) -> &ContentTree {
        self.catalog.get(locale)
    }

    /// Switches to the other locale and returns it.
    pub fn toggle(&mut self) -> Locale {
        let next = toggle_locale(self.locale());
        self.set_locale(next);
        next
    }

    /// Activates `locale`. Returns `false` if it was already active.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        let changed = self.state.send_if_modified(|current| {
            if *current == locale {
                false
            } else {
                *current = locale;
                true
            }
        });

        if changed {
            tracing::debug!("Locale changed to '{}'", locale);
            apply_locale(&mut self.document, locale, &self.catalog.get(locale).meta);
        }
        changed
    }

    /// Read-only handle for sections.
    #[must_use]
    pub fn context(&self) -> SiteContext {
        SiteContext { catalog: Arc::clone(&self.catalog), locale: self.state.subscribe() }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<LocaleCatalog> {
        &self.catalog
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }
}

impl<D: DocumentMetadata> std::fmt::Debug for ContentResolver<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentResolver")
            .field("locale", &self.locale())
            .field("catalog", &"<LocaleCatalog>")
            .field("readers", &self.state.receiver_count())
            .finish_non_exhaustive()
    }
}

/// Read side of the locale state, passed to every section.
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Shared catalog.
    catalog: Arc<LocaleCatalog>,
    /// Active locale as published by the resolver.
    locale: watch::Receiver<Locale>,
}

impl SiteContext {
    /// Context with a fixed locale, for rendering without a resolver.
    #[must_use]
    pub fn fixed(catalog: Arc<LocaleCatalog>, locale: Locale) -> Self {
        let (_, receiver) = watch::channel(locale);
        Self { catalog, locale: receiver }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        *self.locale.borrow()
    }

    /// Content of the active locale.
    #[must_use]
    pub fn content(&self) -> &ContentTree {
        self.catalog.get(self.locale())
    }

    /// Returns `true` if the locale changed since the last [`Self::mark_seen`].
    ///
    /// A context whose resolver is gone never reports a change.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.locale.has_changed().unwrap_or(false)
    }

    /// Marks the current locale as seen and returns it.
    pub fn mark_seen(&mut self) -> Locale {
        *self.locale.borrow_and_update()
    }
}
