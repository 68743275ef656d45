//! Catalog shape checks.
//!
//! Every locale must carry exactly the same key paths as the default locale.
//! Paths are produced by flattening the raw JSON, so array lengths count as
//! part of the shape (`projects.caseStudies[3].title`).

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use serde_json::Value;

use crate::types::Locale;

/// Separator between object keys in a flattened path.
pub const KEY_SEPARATOR: &str = ".";

/// Flatten nested JSON object into dot-separated key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use fasterplop_site::content::flatten_json;
///
/// let json = json!({
///     "hero": {
///         "title1": "WEB",
///         "title2": "DEV"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("hero.title1"), Some(&"WEB".to_string()));
/// assert_eq!(flattened.get("hero.title2"), Some(&"DEV".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Top-level section names of a raw catalog entry.
#[must_use]
pub fn section_keys(json: &Value) -> BTreeSet<String> {
    json.as_object().map(|map| map.keys().cloned().collect()).unwrap_or_default()
}

/// How a locale deviates from the reference shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MismatchKind {
    /// The reference has the key, the locale does not.
    Missing,
    /// The locale has a key the reference does not.
    Extra,
}

/// One key path that differs between a locale and the reference locale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShapeMismatch {
    pub locale: Locale,
    pub key: String,
    pub kind: MismatchKind,
}

impl std::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MismatchKind::Missing => write!(f, "[{}] missing key '{}'", self.locale, self.key),
            MismatchKind::Extra => write!(f, "[{}] unexpected key '{}'", self.locale, self.key),
        }
    }
}

/// Compares the key paths of `other` against `reference`.
///
/// Returns an empty list when both entries have the same shape.
#[must_use]
pub fn compare_shapes(reference: &Value, locale: Locale, other: &Value) -> Vec<ShapeMismatch> {
    let expected: BTreeSet<String> =
        flatten_json(reference, KEY_SEPARATOR, None).into_keys().collect();
    let actual: BTreeSet<String> = flatten_json(other, KEY_SEPARATOR, None).into_keys().collect();

    let missing = expected.difference(&actual).map(|key| ShapeMismatch {
        locale,
        key: key.clone(),
        kind: MismatchKind::Missing,
    });
    let extra = actual.difference(&expected).map(|key| ShapeMismatch {
        locale,
        key: key.clone(),
        kind: MismatchKind::Extra,
    });

    missing.chain(extra).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn test_flatten_json_nested() {
        let json = json!({
            "nav": {
                "home": "INICIO",
                "contact": "CONTACTO"
            },
            "hero": {
                "cta": "VER CASOS DE ESTUDIO"
            }
        });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("nav.home"), some(eq(&"INICIO".to_string())));
        expect_that!(result.get("nav.contact"), some(eq(&"CONTACTO".to_string())));
        expect_that!(result.get("hero.cta"), some(eq(&"VER CASOS DE ESTUDIO".to_string())));
        expect_that!(result.len(), eq(3));
    }

    #[googletest::test]
    fn test_flatten_json_with_array_of_objects() {
        let json = json!({
            "skills": [
                {"title": "SEO", "desc": "Ranking"},
                {"title": "A11y", "desc": "WCAG"}
            ]
        });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("skills[0].title"), some(eq(&"SEO".to_string())));
        expect_that!(result.get("skills[1].desc"), some(eq(&"WCAG".to_string())));
        expect_that!(result.len(), eq(4));
    }

    #[googletest::test]
    fn test_flatten_json_non_string_values() {
        let json = json!({
            "count": 4,
            "enabled": true
        });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("count"), some(eq(&"4".to_string())));
        expect_that!(result.get("enabled"), some(eq(&"true".to_string())));
    }

    #[googletest::test]
    fn test_section_keys() {
        let json = json!({"nav": {}, "hero": {}, "contact": {}});

        expect_that!(
            section_keys(&json).into_iter().collect::<Vec<_>>(),
            elements_are![eq("contact"), eq("hero"), eq("nav")]
        );
        expect_that!(section_keys(&json!("text")).is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_compare_shapes_identical() {
        let es = json!({"hero": {"title1": "DESARROLLO", "title2": "WEB"}});
        let en = json!({"hero": {"title1": "WEB", "title2": "DEV"}});

        expect_that!(compare_shapes(&es, Locale::En, &en), is_empty());
    }

    #[googletest::test]
    fn test_compare_shapes_reports_missing_and_extra() {
        let es = json!({"hero": {"title1": "DESARROLLO", "title2": "WEB"}});
        let en = json!({"hero": {"title1": "WEB", "subtitle": "DEV"}});

        let mismatches = compare_shapes(&es, Locale::En, &en);

        expect_that!(
            mismatches,
            elements_are![
                all![
                    field!(ShapeMismatch.key, eq("hero.title2")),
                    field!(ShapeMismatch.kind, eq(&MismatchKind::Missing))
                ],
                all![
                    field!(ShapeMismatch.key, eq("hero.subtitle")),
                    field!(ShapeMismatch.kind, eq(&MismatchKind::Extra))
                ]
            ]
        );
    }

    #[googletest::test]
    fn test_compare_shapes_detects_array_length() {
        let es = json!({"steps": [{"title": "a"}, {"title": "b"}]});
        let en = json!({"steps": [{"title": "a"}]});

        let mismatches = compare_shapes(&es, Locale::En, &en);

        expect_that!(mismatches, len(eq(1)));
        expect_that!(mismatches.first().unwrap().key.as_str(), eq("steps[1].title"));
    }

    #[googletest::test]
    fn test_shape_mismatch_display() {
        let mismatch =
            ShapeMismatch { locale: Locale::En, key: "nav.home".to_string(), kind: MismatchKind::Missing };

        expect_that!(mismatch.to_string(), eq("[en] missing key 'nav.home'"));
    }
}
