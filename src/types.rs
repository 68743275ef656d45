//! Core types used throughout the project.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

/// A display language of the site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish, the default.
    #[default]
    Es,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    /// Short code used in catalog file names and the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// The other locale of the pair.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    /// Parses a language code, ignoring case and any region subtag.
    ///
    /// # Examples
    /// ```
    /// use fasterplop_site::types::Locale;
    ///
    /// assert_eq!(Locale::parse("es"), Some(Locale::Es));
    /// assert_eq!(Locale::parse("en-US"), Some(Locale::En));
    /// assert_eq!(Locale::parse("ja"), None);
    /// ```
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase().replace('-', "_");
        match normalized.split('_').next() {
            Some("es") => Some(Self::Es),
            Some("en") => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code is not one of the supported locales.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale code '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// In-page anchor targets, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    /// Hero section.
    Home,
    /// Case studies grid.
    Projects,
    /// Skills and process.
    Expertise,
    /// Contact form and footer.
    Contact,
}

impl SectionId {
    /// Sections in the order they appear on the page.
    pub const ALL: [Self; 4] = [Self::Home, Self::Projects, Self::Expertise, Self::Contact];

    /// Element id of the section.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Expertise => "expertise",
            Self::Contact => "contact",
        }
    }

    /// Fragment link to the section (e.g., `#projects`).
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// 1-based position on the page.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Home => 1,
            Self::Projects => 2,
            Self::Expertise => 3,
            Self::Contact => 4,
        }
    }

    /// Resolves a fragment such as `#contact` or `contact`.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let anchor = fragment.strip_prefix('#').unwrap_or(fragment);
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }
}

/// A point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in CSS pixels, as returned by a bounding box query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[allow(clippy::float_arithmetic)]
impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Checks if a point lies within this rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Converts a viewport point into this rectangle's local coordinates.
    #[must_use]
    pub fn to_local(&self, point: Point) -> Point {
        Point { x: point.x - self.left, y: point.y - self.top }
    }

    /// Overlapping area with another rectangle, zero when disjoint.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> f64 {
        let width = self.right().min(other.right()) - self.left.max(other.left);
        let height = self.bottom().min(other.bottom()) - self.top.max(other.top);
        if width <= 0.0 || height <= 0.0 { 0.0 } else { width * height }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_arithmetic)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("es", Some(Locale::Es))]
    #[case("en", Some(Locale::En))]
    #[case("ES", Some(Locale::Es))]
    #[case("es-MX", Some(Locale::Es))]
    #[case("en_US", Some(Locale::En))]
    #[case(" en ", Some(Locale::En))]
    #[case("ja", None)]
    #[case("", None)]
    #[case("english", None)]
    fn test_locale_parse(#[case] code: &str, #[case] expected: Option<Locale>) {
        assert_that!(Locale::parse(code), eq(expected));
    }

    #[rstest]
    fn locale_from_str_reports_code() {
        let err = "fr".parse::<Locale>().unwrap_err();

        assert_that!(err.to_string(), contains_substring("'fr'"));
    }

    #[rstest]
    fn locale_toggle_flips_pair() {
        assert_that!(Locale::Es.toggled(), eq(Locale::En));
        assert_that!(Locale::En.toggled(), eq(Locale::Es));
        assert_that!(Locale::default(), eq(Locale::Es));
    }

    #[rstest]
    fn locale_serde_uses_code() {
        let json = serde_json::to_string(&Locale::En).unwrap();
        assert_that!(json, eq("\"en\""));

        let parsed: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_that!(parsed, eq(Locale::Es));
    }

    #[rstest]
    #[case("#home", Some(SectionId::Home))]
    #[case("projects", Some(SectionId::Projects))]
    #[case("#contact", Some(SectionId::Contact))]
    #[case("#about", None)]
    fn test_section_from_fragment(#[case] fragment: &str, #[case] expected: Option<SectionId>) {
        assert_that!(SectionId::from_fragment(fragment), eq(expected));
    }

    #[rstest]
    fn sections_order_by_page_position() {
        let mut sections = vec![SectionId::Contact, SectionId::Home, SectionId::Expertise, SectionId::Projects];
        sections.sort();

        assert_that!(sections, eq(&SectionId::ALL.to_vec()));
    }

    #[rstest]
    fn section_href_and_ordinal() {
        assert_that!(SectionId::Expertise.href(), eq("#expertise"));
        assert_that!(SectionId::Contact.ordinal(), eq(4));
    }

    #[rstest]
    #[case::inside(Point::new(15.0, 25.0), true)]
    #[case::top_left_edge(Point::new(10.0, 20.0), true)]
    #[case::bottom_right_edge(Point::new(110.0, 70.0), true)]
    #[case::left_of(Point::new(9.0, 25.0), false)]
    #[case::below(Point::new(15.0, 71.0), false)]
    fn test_rect_contains(#[case] point: Point, #[case] expected: bool) {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert_that!(rect.contains(point), eq(expected));
    }

    #[rstest]
    fn rect_to_local_offsets_by_origin() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert_that!(rect.to_local(Point::new(30.0, 45.0)), eq(Point::new(20.0, 25.0)));
    }

    #[rstest]
    fn rect_intersection_area() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let far = Rect::new(500.0, 500.0, 10.0, 10.0);

        assert_that!(a.intersection_area(&b), eq(2500.0));
        assert_that!(a.intersection_area(&far), eq(0.0));
    }
}
