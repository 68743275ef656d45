//! Presentation of the reveal transition.

/// Transition length of a reveal.
pub const REVEAL_DURATION_MS: u32 = 1000;

/// Downward offset of a hidden element (`translate-y-10`).
pub const HIDDEN_OFFSET_PX: u32 = 40;

/// Style of a revealable element, a pure function of its visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub visible: bool,
    pub duration_ms: u32,
    /// Extra wait before the transition starts.
    pub delay_ms: u32,
}

impl RevealStyle {
    #[must_use]
    pub const fn new(visible: bool, delay_ms: u32) -> Self {
        Self { visible, duration_ms: REVEAL_DURATION_MS, delay_ms }
    }

    #[must_use]
    pub const fn with_duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    /// Opacity in percent.
    #[must_use]
    pub const fn opacity(&self) -> u8 {
        if self.visible { 100 } else { 0 }
    }

    #[must_use]
    pub const fn translate_y_px(&self) -> u32 {
        if self.visible { 0 } else { HIDDEN_OFFSET_PX }
    }

    /// Utility classes the stylesheet keys on.
    #[must_use]
    pub fn class_list(&self) -> String {
        let state = if self.visible {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!("transition-all duration-{} transform {state}", self.duration_ms)
    }

    /// Inline style carrying the start delay.
    #[must_use]
    pub fn inline_style(&self) -> String {
        format!("transition-delay: {}ms", self.delay_ms)
    }
}

/// Start delay of the `index`-th sibling in a staggered grid.
///
/// # Examples
/// ```
/// use fasterplop_site::reveal::stagger_delay;
///
/// assert_eq!(stagger_delay(0, 100), 0);
/// assert_eq!(stagger_delay(3, 150), 450);
/// ```
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |index| index.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn hidden_style() {
        let style = RevealStyle::new(false, 200);

        assert_that!(style.opacity(), eq(0));
        assert_that!(style.translate_y_px(), eq(40));
        assert_that!(
            style.class_list(),
            eq("transition-all duration-1000 transform opacity-0 translate-y-10")
        );
        assert_that!(style.inline_style(), eq("transition-delay: 200ms"));
    }

    #[rstest]
    fn visible_style() {
        let style = RevealStyle::new(true, 0);

        assert_that!(style.opacity(), eq(100));
        assert_that!(style.translate_y_px(), eq(0));
        assert_that!(style.class_list(), contains_substring("opacity-100 translate-y-0"));
    }

    #[rstest]
    fn custom_duration_in_class() {
        let style = RevealStyle::new(true, 0).with_duration(600);

        assert_that!(style.class_list(), contains_substring("duration-600"));
    }

    #[rstest]
    #[case(0, 100, 0)]
    #[case(1, 100, 100)]
    #[case(3, 150, 450)]
    #[case(usize::MAX, 100, u32::MAX)]
    fn test_stagger_delay(#[case] index: usize, #[case] step: u32, #[case] expected: u32) {
        assert_that!(stagger_delay(index, step), eq(expected));
    }
}
