//! Navigation bar and mobile menu.

use crate::content::ContentTree;
use crate::pointer::nav_scrolled;
use crate::types::SectionId;

/// One anchor link of the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    /// Fragment link, e.g. `#projects`.
    pub href: String,
    pub label: String,
}

impl NavItem {
    /// Label used in the full-screen mobile menu, e.g. `02 / CASE STUDIES`.
    #[must_use]
    pub fn mobile_label(&self) -> String {
        format!("{:02} / {}", self.section.ordinal(), self.label)
    }
}

/// Navigation links in page order, labelled for the content's locale.
#[must_use]
pub fn nav_items(content: &ContentTree) -> Vec<NavItem> {
    SectionId::ALL
        .into_iter()
        .map(|section| NavItem {
            section,
            href: section.href(),
            label: content.nav_label(section).to_string(),
        })
        .collect()
}

/// Fixed navigation bar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavBar {
    /// Whether the page has scrolled past the threshold.
    scrolled: bool,
    /// Whether the mobile overlay is open.
    menu_open: bool,
}

impl NavBar {
    #[must_use]
    pub const fn new() -> Self {
        Self { scrolled: false, menu_open: false }
    }

    /// Records the window scroll offset. Returns `true` if the style flips.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = nav_scrolled(scroll_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Classes of the `<nav>` element.
    #[must_use]
    pub const fn class_list(&self) -> &'static str {
        if self.scrolled {
            "fixed w-full z-50 transition-all duration-500 bg-black/95 backdrop-blur-lg py-4 border-b border-white/10"
        } else {
            "fixed w-full z-50 transition-all duration-500 bg-transparent py-8"
        }
    }

    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Selecting a mobile link closes the overlay.
    pub const fn select_item(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// `aria-label` of the menu button for the current overlay state.
    #[must_use]
    pub fn menu_button_label<'a>(&self, content: &'a ContentTree) -> &'a str {
        if self.menu_open { &content.nav.close_menu } else { &content.nav.open_menu }
    }
}
