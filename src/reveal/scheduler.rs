//! Reveal scheduler.
//!
//! Each registered element starts `Pending` and becomes `Revealed` the first
//! time an intersection entry meets the threshold. The transition is terminal:
//! observation is released at that moment and later entries are ignored.
//!
//! # Lifecycle
//! 1. `register` on section mount starts observation (or reveals immediately
//!    when the platform cannot observe).
//! 2. `on_intersect` applies host notifications.
//! 3. `unregister` on unmount releases observation if still active. Dropping
//!    the scheduler releases every remaining observation.

use std::collections::HashMap;

use super::source::{
    ElementId,
    IntersectionEntry,
    ObserverOptions,
    VisibilitySource,
};
use super::style::{
    REVEAL_DURATION_MS,
    RevealStyle,
};

/// Visibility state of a registered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Waiting for the first qualifying intersection.
    #[default]
    Pending,
    /// Shown; terminal.
    Revealed,
}

/// One-shot `Pending -> Revealed` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealCell {
    /// Current state.
    state: RevealState,
}

impl RevealCell {
    #[must_use]
    pub const fn new() -> Self {
        Self { state: RevealState::Pending }
    }

    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.state, RevealState::Revealed)
    }

    /// Moves to `Revealed`. Returns `true` only for the transition itself.
    pub const fn reveal(&mut self) -> bool {
        if self.is_visible() {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}

/// Handle to a registered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealTarget {
    pub element: ElementId,
    pub delay_ms: u32,
}

/// Scheduler-side record of a registered element.
#[derive(Debug, Clone, Copy)]
struct Tracked {
    /// Visibility cell.
    cell: RevealCell,
    /// Start delay applied by the presentation.
    delay_ms: u32,
    /// Whether the source is currently observing the element.
    observing: bool,
}

/// Tracks registered elements and flips each to visible exactly once.
pub struct RevealScheduler<S: VisibilitySource> {
    /// Platform visibility observation.
    source: S,
    /// Options every element is observed with.
    options: ObserverOptions,
    /// Transition length handed to styles.
    duration_ms: u32,
    /// Registered elements.
    targets: HashMap<ElementId, Tracked>,
}

impl<S: VisibilitySource> RevealScheduler<S> {
    #[must_use]
    pub fn new(source: S, options: ObserverOptions) -> Self {
        Self { source, options, duration_ms: REVEAL_DURATION_MS, targets: HashMap::new() }
    }

    /// Sets the transition length reported by [`Self::style`].
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Starts tracking an element.
    ///
    /// Registering an element twice returns the first handle unchanged and
    /// does not observe it again. When the platform cannot observe, the
    /// element is revealed immediately.
    pub fn register(&mut self, element: ElementId, delay_ms: u32) -> RevealTarget {
        if let Some(existing) = self.targets.get(&element) {
            tracing::trace!("Element {:?} already registered", element);
            return RevealTarget { element, delay_ms: existing.delay_ms };
        }

        let mut tracked = Tracked { cell: RevealCell::new(), delay_ms, observing: false };

        if self.source.is_supported() {
            match self.source.observe(element, &self.options) {
                Ok(()) => tracked.observing = true,
                Err(e) => {
                    tracing::warn!("Observing {:?} failed, showing it immediately: {}", element, e);
                    tracked.cell.reveal();
                }
            }
        } else {
            tracing::debug!("Visibility observation unsupported, showing {:?} immediately", element);
            tracked.cell.reveal();
        }

        self.targets.insert(element, tracked);
        RevealTarget { element, delay_ms }
    }

    /// Stops tracking an element, releasing its observation if still active.
    pub fn unregister(&mut self, target: RevealTarget) {
        if let Some(tracked) = self.targets.remove(&target.element)
            && tracked.observing
        {
            self.source.unobserve(target.element);
            tracing::trace!("Released observation of {:?} before reveal", target.element);
        }
    }

    /// Applies a visibility notification.
    ///
    /// Returns `true` if this entry revealed the element.
    pub fn on_intersect(&mut self, entry: IntersectionEntry) -> bool {
        let Some(tracked) = self.targets.get_mut(&entry.element) else {
            tracing::trace!("Ignoring entry for unregistered {:?}", entry.element);
            return false;
        };

        if !entry.meets(&self.options) || !tracked.cell.reveal() {
            return false;
        }

        if tracked.observing {
            tracked.observing = false;
            self.source.unobserve(entry.element);
        }
        tracing::trace!("Revealed {:?} at ratio {}", entry.element, entry.ratio);
        true
    }

    /// State of an element, `None` if not registered.
    #[must_use]
    pub fn state(&self, element: ElementId) -> Option<RevealState> {
        self.targets.get(&element).map(|tracked| tracked.cell.state())
    }

    /// Whether a registered element has been revealed.
    #[must_use]
    pub fn is_visible(&self, target: RevealTarget) -> bool {
        self.targets.get(&target.element).is_some_and(|tracked| tracked.cell.is_visible())
    }

    /// Presentation of a registered element; unknown elements render hidden.
    #[must_use]
    pub fn style(&self, target: RevealTarget) -> RevealStyle {
        RevealStyle::new(self.is_visible(target), target.delay_ms).with_duration(self.duration_ms)
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of elements the source is still observing.
    #[must_use]
    pub fn observing_count(&self) -> usize {
        self.targets.values().filter(|tracked| tracked.observing).count()
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: VisibilitySource> Drop for RevealScheduler<S> {
    fn drop(&mut self) {
        for (element, tracked) in &mut self.targets {
            if tracked.observing {
                tracked.observing = false;
                self.source.unobserve(*element);
            }
        }
    }
}

impl<S: VisibilitySource> std::fmt::Debug for RevealScheduler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealScheduler")
            .field("options", &self.options)
            .field("duration_ms", &self.duration_ms)
            .field("targets", &self.targets.len())
            .field("observing", &self.observing_count())
            .finish_non_exhaustive()
    }
}
