//! Page composition.
//!
//! [`Page`] ties the locale context, navigation state and reveal scheduler
//! together. Hosts mount sections as they are inserted in the document, feed
//! visibility entries back, and read the style of every revealable slot.

/// Navigation bar and mobile menu
pub mod nav;
/// Section headers, reveal slots and footer
pub mod sections;

use std::collections::BTreeMap;

pub use nav::{
    NavBar,
    NavItem,
    nav_items,
};
pub use sections::{
    RevealSlot,
    SOCIAL_LINKS,
    SectionHeader,
    SocialLink,
    footer_text,
    index_label,
    section_number,
    section_slots,
};

use crate::config::RevealSettings;
use crate::locale::SiteContext;
use crate::reveal::{
    ElementId,
    IntersectionEntry,
    ObserverOptions,
    RevealScheduler,
    RevealStyle,
    RevealTarget,
    VisibilitySource,
};
use crate::types::SectionId;

/// The single page: context, navigation and reveal bookkeeping.
pub struct Page<S: VisibilitySource> {
    /// Locale-aware read access to the catalog.
    context: SiteContext,
    /// Timing of reveals.
    settings: RevealSettings,
    /// Reveal scheduler over the host's visibility source.
    scheduler: RevealScheduler<S>,
    /// Registered slot of every mounted section.
    mounted: BTreeMap<RevealSlot, RevealTarget>,
    /// Next element handle to hand out.
    next_element: u64,
    /// Navigation bar and mobile menu state.
    pub nav: NavBar,
}

impl<S: VisibilitySource> Page<S> {
    #[must_use]
    pub fn new(context: SiteContext, source: S, settings: RevealSettings) -> Self {
        let scheduler = RevealScheduler::new(source, ObserverOptions::from(&settings))
            .with_duration(settings.duration_ms);
        Self {
            context,
            settings,
            scheduler,
            mounted: BTreeMap::new(),
            next_element: 0,
            nav: NavBar::new(),
        }
    }

    #[must_use]
    pub const fn context(&self) -> &SiteContext {
        &self.context
    }

    /// Registers every revealable slot of a section.
    ///
    /// Mounting an already mounted section keeps its existing registrations.
    /// Returns the element handles the host must attach observation to.
    pub fn mount(&mut self, section: SectionId) -> Vec<(RevealSlot, ElementId)> {
        let slots = section_slots(section, self.context.content());
        let mut handles = Vec::with_capacity(slots.len());

        for slot in slots {
            let target = match self.mounted.get(&slot) {
                Some(target) => *target,
                None => {
                    let element = ElementId(self.next_element);
                    self.next_element = self.next_element.saturating_add(1);
                    let target = self.scheduler.register(element, slot.delay_ms(&self.settings));
                    self.mounted.insert(slot, target);
                    target
                }
            };
            handles.push((slot, target.element));
        }

        tracing::debug!("Mounted section '{}' with {} reveal slots", section.anchor(), handles.len());
        handles
    }

    /// Releases every registration of a section.
    pub fn unmount(&mut self, section: SectionId) {
        let slots: Vec<RevealSlot> = self
            .mounted
            .keys()
            .copied()
            .filter(|slot| slot_section(*slot) == section)
            .collect();

        for slot in slots {
            if let Some(target) = self.mounted.remove(&slot) {
                self.scheduler.unregister(target);
            }
        }
        tracing::debug!("Unmounted section '{}'", section.anchor());
    }

    /// Forwards a visibility notification. Returns `true` if it revealed a slot.
    pub fn on_intersect(&mut self, entry: IntersectionEntry) -> bool {
        self.scheduler.on_intersect(entry)
    }

    /// Style of a slot; slots that are not mounted render hidden.
    #[must_use]
    pub fn style(&self, slot: RevealSlot) -> RevealStyle {
        match self.mounted.get(&slot) {
            Some(target) => self.scheduler.style(*target),
            None => RevealStyle::new(false, slot.delay_ms(&self.settings))
                .with_duration(self.settings.duration_ms),
        }
    }

    #[must_use]
    pub fn is_revealed(&self, slot: RevealSlot) -> bool {
        self.mounted.get(&slot).is_some_and(|target| self.scheduler.is_visible(*target))
    }

    /// Navigation links for the active locale.
    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(self.context.content())
    }

    /// Footer line for the given year.
    #[must_use]
    pub fn footer(&self, year: i32) -> String {
        footer_text(self.context.content(), year)
    }

    #[must_use]
    pub const fn scheduler(&self) -> &RevealScheduler<S> {
        &self.scheduler
    }
}

impl<S: VisibilitySource> std::fmt::Debug for Page<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("locale", &self.context.locale())
            .field("mounted", &self.mounted.len())
            .field("nav", &self.nav)
            .finish_non_exhaustive()
    }
}

/// Section a slot belongs to.
const fn slot_section(slot: RevealSlot) -> SectionId {
    match slot {
        RevealSlot::Hero => SectionId::Home,
        RevealSlot::Header(section) => section,
        RevealSlot::CaseStudy(_) => SectionId::Projects,
        RevealSlot::Skill(_) | RevealSlot::ProcessHeader | RevealSlot::ProcessStep(_) => {
            SectionId::Expertise
        }
        RevealSlot::ContactPanel | RevealSlot::SocialLinks => SectionId::Contact,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::{
        fixture,
        rstest,
    };

    use super::*;
    use crate::reveal::{
        ObserveError,
        Unsupported,
    };
    use crate::test_utils::shared_catalog;
    use crate::types::Locale;

    /// Accepts every observation without recording it.
    #[derive(Debug, Default)]
    struct AcceptAll;

    impl VisibilitySource for AcceptAll {
        fn observe(
            &mut self,
            _element: ElementId,
            _options: &ObserverOptions,
        ) -> std::result::Result<(), ObserveError> {
            Ok(())
        }

        fn unobserve(&mut self, _element: ElementId) {}
    }

    #[fixture]
    fn page() -> Page<AcceptAll> {
        let context = SiteContext::fixed(shared_catalog(), Locale::En);
        Page::new(context, AcceptAll, RevealSettings::default())
    }

    fn seen(element: ElementId) -> IntersectionEntry {
        IntersectionEntry { element, ratio: 1.0, is_intersecting: true }
    }

    #[rstest]
    fn mount_registers_staggered_cards(mut page: Page<AcceptAll>) {
        let handles = page.mount(SectionId::Projects);

        assert_that!(handles.len(), eq(5));
        assert_that!(page.style(RevealSlot::CaseStudy(2)).delay_ms, eq(200));
        assert_that!(page.is_revealed(RevealSlot::CaseStudy(2)), eq(false));
    }

    #[rstest]
    fn mount_twice_keeps_handles(mut page: Page<AcceptAll>) {
        let first = page.mount(SectionId::Expertise);
        let second = page.mount(SectionId::Expertise);

        assert_that!(second, eq(&first));
        assert_that!(page.scheduler().len(), eq(9));
    }

    #[rstest]
    fn entries_reveal_individual_slots(mut page: Page<AcceptAll>) {
        let handles = page.mount(SectionId::Projects);
        let (_, header) = handles.first().copied().unwrap();

        assert_that!(page.on_intersect(seen(header)), eq(true));
        assert_that!(page.is_revealed(RevealSlot::Header(SectionId::Projects)), eq(true));
        assert_that!(page.is_revealed(RevealSlot::CaseStudy(0)), eq(false));
        assert_that!(
            page.style(RevealSlot::Header(SectionId::Projects)).class_list(),
            contains_substring("opacity-100")
        );
    }

    #[rstest]
    fn unmount_only_touches_one_section(mut page: Page<AcceptAll>) {
        page.mount(SectionId::Home);
        page.mount(SectionId::Contact);

        page.unmount(SectionId::Contact);

        assert_that!(page.scheduler().len(), eq(1));
        assert_that!(page.style(RevealSlot::ContactPanel).visible, eq(false));
    }

    #[rstest]
    fn process_steps_use_their_own_step(mut page: Page<AcceptAll>) {
        page.mount(SectionId::Expertise);

        assert_that!(page.style(RevealSlot::Skill(1)).delay_ms, eq(100));
        assert_that!(page.style(RevealSlot::ProcessStep(1)).delay_ms, eq(150));
    }

    #[rstest]
    fn unsupported_platform_shows_everything() {
        let context = SiteContext::fixed(shared_catalog(), Locale::Es);
        let mut page = Page::new(context, Unsupported, RevealSettings::default());

        page.mount(SectionId::Home);

        assert_that!(page.is_revealed(RevealSlot::Hero), eq(true));
    }

    #[rstest]
    fn footer_and_nav_follow_context(page: Page<AcceptAll>) {
        assert_that!(page.footer(2026), starts_with("© 2026 FASTERPLOP"));
        assert_that!(page.nav_items().first().map(|item| item.label.clone()), some(eq("HOME")));
    }

    #[rstest]
    fn every_slot_maps_back_to_its_section() {
        let catalog = shared_catalog();
        let content = catalog.get(Locale::Es);

        for section in SectionId::ALL {
            for slot in section_slots(section, content) {
                assert_that!(slot_section(slot), eq(section));
            }
        }
    }
}
