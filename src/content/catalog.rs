//! Locale catalog: every locale's content tree behind a fallback lookup.

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::path::{
    Path,
    PathBuf,
};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::shape::{
    ShapeMismatch,
    compare_shapes,
    section_keys,
};
use super::tree::ContentTree;
use crate::types::Locale;

/// Built-in Spanish copy.
pub(crate) const BUILTIN_ES: &str = include_str!("../../locales/es.json");
/// Built-in English copy.
pub(crate) const BUILTIN_EN: &str = include_str!("../../locales/en.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog for '{locale}': {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog has no entry for the default locale '{0}'")]
    MissingDefault(Locale),

    #[error("Catalog locales differ in shape:\n{}", format_mismatches(.0))]
    ShapeMismatch(Vec<ShapeMismatch>),
}

fn format_mismatches(mismatches: &[ShapeMismatch]) -> String {
    mismatches
        .iter()
        .enumerate()
        .map(|(i, mismatch)| format!("  {}. {mismatch}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A parsed locale entry with its raw JSON kept for shape checks.
#[derive(Debug, Clone)]
struct CatalogEntry {
    /// Typed content.
    tree: ContentTree,
    /// Source JSON.
    raw: Value,
}

impl CatalogEntry {
    /// Parses a raw entry into a typed tree.
    fn parse(locale: Locale, raw: Value) -> Result<Self, CatalogError> {
        let tree = ContentTree::deserialize(&raw)
            .map_err(|source| CatalogError::Parse { locale, source })?;
        Ok(Self { tree, raw })
    }
}

/// Immutable mapping from locale to content tree.
///
/// The default locale's entry always exists, so lookups never fail: a locale
/// without an entry resolves to the default one.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    /// Locale used when a lookup misses.
    default_locale: Locale,
    /// Entry of the default locale.
    default_entry: CatalogEntry,
    /// Entries of every other locale.
    others: BTreeMap<Locale, CatalogEntry>,
}

impl LocaleCatalog {
    /// Builds the catalog from the copy shipped with the crate.
    ///
    /// # Errors
    /// Only when the embedded files are malformed or disagree in shape.
    pub fn builtin() -> Result<Self, CatalogError> {
        let es = parse_json(Locale::Es, BUILTIN_ES)?;
        let en = parse_json(Locale::En, BUILTIN_EN)?;
        Self::from_sources(Locale::Es, [(Locale::Es, es), (Locale::En, en)])
    }

    /// Builds a catalog from raw JSON entries.
    ///
    /// Every entry is checked against the default entry's key paths.
    ///
    /// # Errors
    /// - No entry for `default_locale`
    /// - An entry does not match the content tree layout
    /// - Entries disagree in shape
    pub fn from_sources(
        default_locale: Locale,
        sources: impl IntoIterator<Item = (Locale, Value)>,
    ) -> Result<Self, CatalogError> {
        let mut raw_entries: BTreeMap<Locale, Value> = sources.into_iter().collect();
        let default_raw =
            raw_entries.remove(&default_locale).ok_or(CatalogError::MissingDefault(default_locale))?;

        let mismatches: Vec<ShapeMismatch> = raw_entries
            .iter()
            .flat_map(|(locale, raw)| compare_shapes(&default_raw, *locale, raw))
            .collect();
        if !mismatches.is_empty() {
            return Err(CatalogError::ShapeMismatch(mismatches));
        }

        let default_entry = CatalogEntry::parse(default_locale, default_raw)?;
        let mut entries = BTreeMap::new();
        for (locale, raw) in raw_entries {
            entries.insert(locale, CatalogEntry::parse(locale, raw)?);
        }

        tracing::debug!(
            "Catalog ready: default '{}', {} additional locale(s)",
            default_locale,
            entries.len()
        );

        Ok(Self { default_locale, default_entry, others: entries })
    }

    /// Loads `<code>.json` for every supported locale from a directory.
    ///
    /// Files for non-default locales are optional.
    ///
    /// # Errors
    /// - The default locale's file is missing or unreadable
    /// - A file is not valid JSON or does not match the tree layout
    /// - Files disagree in shape
    pub fn load_from_dir(dir: &Path, default_locale: Locale) -> Result<Self, CatalogError> {
        let mut sources = Vec::new();
        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.code()));
            if !path.exists() {
                tracing::debug!("Catalog file not found: {:?}", path);
                continue;
            }

            tracing::debug!("Loading catalog from: {:?}", path);
            let content = std::fs::read_to_string(&path)
                .map_err(|source| CatalogError::Io { path: path.clone(), source })?;
            sources.push((locale, parse_json(locale, &content)?));
        }

        Self::from_sources(default_locale, sources)
    }

    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Returns `true` if the locale has its own entry.
    #[must_use]
    pub fn contains(&self, locale: Locale) -> bool {
        locale == self.default_locale || self.others.contains_key(&locale)
    }

    /// Locales with their own entry, default first.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        std::iter::once(self.default_locale).chain(self.others.keys().copied()).collect()
    }

    /// Content tree of a locale, or the default locale's tree if it has none.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &ContentTree {
        self.entry(locale).map_or(&self.default_entry.tree, |entry| &entry.tree)
    }

    /// Content tree for a raw language code; unknown codes resolve to the default.
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> &ContentTree {
        Locale::parse(code).map_or_else(
            || {
                tracing::debug!("Unknown locale code '{}', using default", code);
                &self.default_entry.tree
            },
            |locale| self.get(locale),
        )
    }

    /// Top-level section names of a locale's entry.
    #[must_use]
    pub fn section_keys(&self, locale: Locale) -> BTreeSet<String> {
        let raw = self.entry(locale).map_or(&self.default_entry.raw, |entry| &entry.raw);
        section_keys(raw)
    }

    /// Entry stored for a locale, if any.
    fn entry(&self, locale: Locale) -> Option<&CatalogEntry> {
        if locale == self.default_locale {
            Some(&self.default_entry)
        } else {
            self.others.get(&locale)
        }
    }
}

/// Parses catalog text into JSON.
fn parse_json(locale: Locale, text: &str) -> Result<Value, CatalogError> {
    serde_json::from_str(text).map_err(|source| CatalogError::Parse { locale, source })
}
