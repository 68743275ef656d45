//! Section layout: headers, revealable slots, footer.

use crate::config::RevealSettings;
use crate::content::ContentTree;
use crate::reveal::stagger_delay;
use crate::types::SectionId;

/// Outbound profile links shown above the footer.
pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", href: "#" },
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "Email", href: "#" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Zero-padded 1-based position, e.g. `02`.
#[must_use]
pub fn index_label(index: usize) -> String {
    format!("{:02}", index.saturating_add(1))
}

/// Decorative number above a section title, e.g. `// 02`.
#[must_use]
pub fn section_number(section: SectionId) -> String {
    format!("// {:02}", section.ordinal())
}

/// Title block at the top of the projects, expertise and contact sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader<'a> {
    pub number: String,
    pub title: &'a str,
    pub subtitle: &'a str,
}

impl<'a> SectionHeader<'a> {
    /// Header of a section; the hero has none.
    #[must_use]
    pub fn for_section(section: SectionId, content: &'a ContentTree) -> Option<Self> {
        let (title, subtitle) = match section {
            SectionId::Home => return None,
            SectionId::Projects => (&content.projects.section_title, &content.projects.subtitle),
            SectionId::Expertise => {
                (&content.expertise.section_title, &content.expertise.subtitle)
            }
            SectionId::Contact => (&content.contact.section_title, &content.contact.subtitle),
        };
        Some(Self { number: section_number(section), title, subtitle })
    }
}

/// A block of a section that fades in on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RevealSlot {
    /// Hero title, description and call to action.
    Hero,
    /// Section header of a section.
    Header(SectionId),
    CaseStudy(usize),
    Skill(usize),
    /// "My process" heading.
    ProcessHeader,
    ProcessStep(usize),
    /// Form card or confirmation panel.
    ContactPanel,
    SocialLinks,
}

impl RevealSlot {
    /// Start delay of the slot under `settings`.
    #[must_use]
    pub fn delay_ms(self, settings: &RevealSettings) -> u32 {
        match self {
            Self::CaseStudy(index) | Self::Skill(index) => {
                stagger_delay(index, settings.stagger_step_ms)
            }
            Self::ProcessStep(index) => stagger_delay(index, settings.process_stagger_step_ms),
            _ => 0,
        }
    }
}

/// Revealable slots of a section in document order.
#[must_use]
pub fn section_slots(section: SectionId, content: &ContentTree) -> Vec<RevealSlot> {
    match section {
        SectionId::Home => vec![RevealSlot::Hero],
        SectionId::Projects => std::iter::once(RevealSlot::Header(section))
            .chain((0..content.projects.case_studies.len()).map(RevealSlot::CaseStudy))
            .collect(),
        SectionId::Expertise => std::iter::once(RevealSlot::Header(section))
            .chain((0..content.expertise.skills.len()).map(RevealSlot::Skill))
            .chain(std::iter::once(RevealSlot::ProcessHeader))
            .chain((0..content.expertise.process_steps.len()).map(RevealSlot::ProcessStep))
            .collect(),
        SectionId::Contact => {
            vec![RevealSlot::Header(section), RevealSlot::ContactPanel, RevealSlot::SocialLinks]
        }
    }
}

/// Copyright line, e.g. `© 2026 FASTERPLOP // WEB DEVELOPMENT & SEO`.
#[must_use]
pub fn footer_text(content: &ContentTree, year: i32) -> String {
    format!("© {year} {}", content.meta.footer)
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::catalog;
    use crate::types::Locale;

    #[rstest]
    #[case(0, "01")]
    #[case(3, "04")]
    #[case(11, "12")]
    fn test_index_label(#[case] index: usize, #[case] expected: &str) {
        assert_that!(index_label(index), eq(expected));
    }

    #[rstest]
    fn headers_are_numbered_by_position() {
        let catalog = catalog();
        let content = catalog.get(Locale::Es);

        let header = SectionHeader::for_section(SectionId::Contact, content);

        assert_that!(SectionHeader::for_section(SectionId::Home, content), none());
        assert_that!(
            header,
            some(all![
                field!(SectionHeader.number, eq("// 04")),
                field!(SectionHeader.title, eq(&"CONTACTO"))
            ])
        );
    }

    #[rstest]
    fn projects_slots_cover_every_case_study() {
        let catalog = catalog();

        let slots = section_slots(SectionId::Projects, catalog.get(Locale::En));

        assert_that!(
            slots,
            elements_are![
                eq(&RevealSlot::Header(SectionId::Projects)),
                eq(&RevealSlot::CaseStudy(0)),
                eq(&RevealSlot::CaseStudy(1)),
                eq(&RevealSlot::CaseStudy(2)),
                eq(&RevealSlot::CaseStudy(3))
            ]
        );
    }

    #[rstest]
    fn expertise_slots_in_document_order() {
        let catalog = catalog();

        let slots = section_slots(SectionId::Expertise, catalog.get(Locale::Es));

        assert_that!(slots.len(), eq(1 + 3 + 1 + 4));
        assert_that!(slots.get(4), some(eq(&RevealSlot::ProcessHeader)));
        assert_that!(slots.last(), some(eq(&RevealSlot::ProcessStep(3))));
    }

    #[rstest]
    #[case::header(RevealSlot::Header(SectionId::Projects), 0)]
    #[case::second_card(RevealSlot::CaseStudy(1), 100)]
    #[case::third_skill(RevealSlot::Skill(2), 200)]
    #[case::fourth_step(RevealSlot::ProcessStep(3), 450)]
    fn slot_delays(#[case] slot: RevealSlot, #[case] expected: u32) {
        assert_that!(slot.delay_ms(&RevealSettings::default()), eq(expected));
    }

    #[rstest]
    fn footer_carries_year_and_locale_text() {
        let catalog = catalog();

        let text = footer_text(catalog.get(Locale::Es), 2026);

        assert_that!(text, eq("© 2026 FASTERPLOP // DESARROLLO WEB & SEO"));
    }
}
