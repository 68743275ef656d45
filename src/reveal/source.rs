//! Visibility observation seam.
//!
//! In a browser this is an `IntersectionObserver`; tests drive a fake.

use thiserror::Error;

use crate::config::RevealSettings;

/// Opaque handle of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Observer configuration shared by every registered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction at which an element counts as seen.
    pub threshold: f64,
    /// The viewport's bottom edge is pulled up by this many pixels.
    pub root_margin_bottom_px: u32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { threshold: 0.1, root_margin_bottom_px: 50 }
    }
}

impl ObserverOptions {
    /// CSS margin string in observer `rootMargin` syntax.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.root_margin_bottom_px)
    }
}

impl From<&RevealSettings> for ObserverOptions {
    fn from(settings: &RevealSettings) -> Self {
        Self {
            threshold: settings.threshold,
            root_margin_bottom_px: settings.root_margin_bottom_px,
        }
    }
}

/// One visibility notification for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    /// Visible fraction of the element within the margin-adjusted viewport.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Whether this entry counts as seen under `options`.
    #[must_use]
    pub fn meets(&self, options: &ObserverOptions) -> bool {
        self.is_intersecting && self.ratio >= options.threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("Visibility observation unavailable: {0}")]
    Unavailable(String),
}

/// Platform capability that reports when elements intersect the viewport.
///
/// Notifications are delivered to [`crate::reveal::RevealScheduler::on_intersect`]
/// by the host's event loop.
pub trait VisibilitySource {
    /// Whether the platform can observe visibility at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Starts observing an element.
    fn observe(&mut self, element: ElementId, options: &ObserverOptions)
    -> Result<(), ObserveError>;

    /// Stops observing an element. Unknown elements are ignored.
    fn unobserve(&mut self, element: ElementId);
}

/// Source for platforms without visibility observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl VisibilitySource for Unsupported {
    fn is_supported(&self) -> bool {
        false
    }

    fn observe(&mut self, _element: ElementId, _options: &ObserverOptions) -> Result<(), ObserveError> {
        Err(ObserveError::Unavailable("no intersection observer".to_string()))
    }

    fn unobserve(&mut self, _element: ElementId) {}
}
