//! Pointer- and scroll-driven presentation.
//!
//! Every type here is a pure mapping from the latest pointer or scroll event
//! to the inline style the stylesheet expects. Hosts feed events in and read
//! styles out.

use crate::types::{
    Point,
    Rect,
};

/// Default highlight colour of a spotlight card.
pub const SPOTLIGHT_COLOR: &str = "rgba(16, 185, 129, 0.15)";

/// Radius of the spotlight gradient circle.
pub const SPOTLIGHT_RADIUS_PX: u32 = 600;

/// Gradient stop at which the highlight fades out.
pub const SPOTLIGHT_FADE_PERCENT: u32 = 40;

/// Peak parallax offset range in pixels (offsets span `-10..=10`).
pub const PARALLAX_RANGE_PX: f64 = 20.0;

/// Scroll offset past which the navigation bar is drawn as scrolled.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Pointer-following highlight of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Spotlight {
    /// Pointer position relative to the card's top-left corner.
    position: Point,
    /// Whether the pointer is over the card.
    hovered: bool,
    /// Gradient colour.
    color: String,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new(SPOTLIGHT_COLOR)
    }
}

impl Spotlight {
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self { position: Point::default(), hovered: false, color: color.into() }
    }

    pub const fn on_enter(&mut self) {
        self.hovered = true;
    }

    /// Hides the highlight. The last position is kept.
    pub const fn on_leave(&mut self) {
        self.hovered = false;
    }

    /// Records a pointer move in viewport coordinates against the card's
    /// current bounding box.
    pub fn on_move(&mut self, pointer: Point, bounds: &Rect) {
        self.position = bounds.to_local(pointer);
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// 1 while hovered, 0 otherwise.
    #[must_use]
    pub const fn opacity(&self) -> u8 {
        if self.hovered { 1 } else { 0 }
    }

    /// CSS background of the highlight layer.
    ///
    /// # Examples
    /// ```
    /// use fasterplop_site::pointer::Spotlight;
    /// use fasterplop_site::types::{Point, Rect};
    ///
    /// let mut spotlight = Spotlight::default();
    /// spotlight.on_move(Point::new(130.0, 245.0), &Rect::new(100.0, 200.0, 300.0, 200.0));
    ///
    /// assert_eq!(
    ///     spotlight.gradient(),
    ///     "radial-gradient(600px circle at 30px 45px, rgba(16, 185, 129, 0.15), transparent 40%)"
    /// );
    /// ```
    #[must_use]
    pub fn gradient(&self) -> String {
        format!(
            "radial-gradient({SPOTLIGHT_RADIUS_PX}px circle at {}px {}px, {}, transparent {SPOTLIGHT_FADE_PERCENT}%)",
            self.position.x, self.position.y, self.color
        )
    }

    /// Inline style of the highlight layer.
    #[must_use]
    pub fn inline_style(&self) -> String {
        format!("opacity: {}; background: {}", self.opacity(), self.gradient())
    }
}

/// Offset of the hero background layers from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parallax {
    /// Pointer offset from the viewport centre, scaled to the parallax range.
    offset: Point,
}

impl Parallax {
    #[must_use]
    pub const fn new() -> Self {
        Self { offset: Point::new(0.0, 0.0) }
    }

    /// Records a pointer move. A degenerate viewport leaves the offset
    /// unchanged.
    #[allow(clippy::float_arithmetic)]
    pub fn on_move(&mut self, pointer: Point, viewport_width: f64, viewport_height: f64) {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return;
        }
        self.offset = Point::new(
            (pointer.x / viewport_width - 0.5) * PARALLAX_RANGE_PX,
            (pointer.y / viewport_height - 0.5) * PARALLAX_RANGE_PX,
        );
    }

    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    /// Grid layer translation, opposite to the pointer.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn background_translate(&self) -> Point {
        Point::new(-self.offset.x, -self.offset.y)
    }

    /// Glow translation, with the pointer at twice the distance.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn glow_translate(&self) -> Point {
        Point::new(self.offset.x * 2.0, self.offset.y * 2.0)
    }

    #[must_use]
    pub fn background_transform(&self) -> String {
        let Point { x, y } = self.background_translate();
        format!("translate({x}px, {y}px)")
    }

    #[must_use]
    pub fn glow_transform(&self) -> String {
        let Point { x, y } = self.glow_translate();
        format!("translate({x}px, {y}px) translate(-50%, -50%)")
    }
}

/// Custom cursor that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorFollower {
    /// Last pointer position in viewport coordinates.
    position: Point,
    /// Whether the pointer is inside the document.
    visible: bool,
}

impl CursorFollower {
    #[must_use]
    pub const fn new() -> Self {
        Self { position: Point::new(0.0, 0.0), visible: false }
    }

    pub const fn on_move(&mut self, pointer: Point) {
        self.position = pointer;
        self.visible = true;
    }

    pub const fn on_leave(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.position.x, self.position.y)
    }
}

/// Whether the navigation bar is in its scrolled style.
#[must_use]
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}
