//! Intersection math.
//!
//! Computes the entry a native observer would report, for hosts that poll
//! bounding boxes on scroll instead.

use super::source::{
    ElementId,
    IntersectionEntry,
    ObserverOptions,
};
use crate::types::{
    Point,
    Rect,
};

/// Viewport with its bottom edge pulled up by the root margin.
#[must_use]
#[allow(clippy::float_arithmetic)]
pub fn effective_root(viewport: &Rect, options: &ObserverOptions) -> Rect {
    let margin = f64::from(options.root_margin_bottom_px);
    Rect { height: (viewport.height - margin).max(0.0), ..*viewport }
}

/// Visible fraction of `element` inside the margin-adjusted viewport.
///
/// Zero-area elements count as fully visible when their origin lies inside
/// the root.
#[must_use]
#[allow(clippy::float_arithmetic)]
pub fn intersection_ratio(element: &Rect, viewport: &Rect, options: &ObserverOptions) -> f64 {
    let root = effective_root(viewport, options);
    let area = element.area();
    if area <= 0.0 {
        let origin = Point::new(element.left, element.top);
        return if root.contains(origin) { 1.0 } else { 0.0 };
    }
    (element.intersection_area(&root) / area).clamp(0.0, 1.0)
}

/// Builds the entry for an element's current bounding box.
#[must_use]
pub fn entry_for(
    element: ElementId,
    bounds: &Rect,
    viewport: &Rect,
    options: &ObserverOptions,
) -> IntersectionEntry {
    let ratio = intersection_ratio(bounds, viewport, options);
    IntersectionEntry { element, ratio, is_intersecting: ratio > 0.0 }
}

#[cfg(test)]
#[allow(clippy::float_arithmetic)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[rstest]
    fn effective_root_shrinks_bottom() {
        let root = effective_root(&VIEWPORT, &ObserverOptions::default());

        assert_that!(root.bottom(), eq(750.0));
        assert_that!(root.width, eq(1000.0));
    }

    #[rstest]
    #[case::fully_inside(Rect::new(0.0, 100.0, 100.0, 100.0), 1.0)]
    #[case::below_viewport(Rect::new(0.0, 900.0, 100.0, 100.0), 0.0)]
    #[case::inside_margin_only(Rect::new(0.0, 760.0, 100.0, 30.0), 0.0)]
    #[case::half_past_margin(Rect::new(0.0, 700.0, 100.0, 100.0), 0.5)]
    #[case::zero_area_inside(Rect::new(10.0, 10.0, 0.0, 0.0), 1.0)]
    #[case::zero_area_outside(Rect::new(10.0, 790.0, 0.0, 0.0), 0.0)]
    fn test_intersection_ratio(#[case] element: Rect, #[case] expected: f64) {
        let ratio = intersection_ratio(&element, &VIEWPORT, &ObserverOptions::default());

        assert_that!(ratio, near(expected, 1e-9));
    }

    #[rstest]
    fn entry_just_under_threshold_does_not_meet() {
        // 8px of a 100px card above the margin line.
        let bounds = Rect::new(0.0, 742.0, 100.0, 100.0);
        let options = ObserverOptions::default();

        let entry = entry_for(ElementId(3), &bounds, &VIEWPORT, &options);

        assert_that!(entry.is_intersecting, eq(true));
        assert_that!(entry.meets(&options), eq(false));
    }

    #[rstest]
    fn entry_past_threshold_meets() {
        let bounds = Rect::new(0.0, 730.0, 100.0, 100.0);
        let options = ObserverOptions::default();

        let entry = entry_for(ElementId(3), &bounds, &VIEWPORT, &options);

        assert_that!(entry.meets(&options), eq(true));
    }
}
