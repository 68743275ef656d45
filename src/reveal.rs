//! Scroll-triggered, one-shot reveal of page elements.
/// Intersection math for hosts without a native observer
pub mod geometry;
/// Registration and one-shot transitions
pub mod scheduler;
/// Platform visibility observation seam
pub mod source;
/// Hidden/revealed presentation mapping
pub mod style;

pub use scheduler::{
    RevealCell,
    RevealScheduler,
    RevealState,
    RevealTarget,
};
pub use source::{
    ElementId,
    IntersectionEntry,
    ObserveError,
    ObserverOptions,
    Unsupported,
    VisibilitySource,
};
pub use style::{
    RevealStyle,
    stagger_delay,
};
