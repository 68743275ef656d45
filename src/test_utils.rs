//! Shared helpers for unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::Value;

use crate::content::LocaleCatalog;
use crate::content::catalog::{
    BUILTIN_EN,
    BUILTIN_ES,
};
use crate::types::Locale;

/// Raw JSON of a built-in locale file, for tests that tamper with its shape.
pub(crate) fn builtin_json(locale: Locale) -> Value {
    let text = match locale {
        Locale::Es => BUILTIN_ES,
        Locale::En => BUILTIN_EN,
    };
    serde_json::from_str(text).unwrap()
}

/// The built-in catalog.
pub(crate) fn catalog() -> LocaleCatalog {
    LocaleCatalog::builtin().unwrap()
}

pub(crate) fn shared_catalog() -> Arc<LocaleCatalog> {
    Arc::new(catalog())
}
