//! Typed content tree
//!
//! Mirrors the JSON layout of `locales/*.json`. Field names follow the JSON keys
//! through `camelCase` renaming so the same files can be edited by hand.

use serde::{
    Deserialize,
    Serialize,
};

/// All display text of one locale, keyed by section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTree {
    pub meta: MetaContent,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub projects: ProjectsContent,
    pub expertise: ExpertiseContent,
    pub contact: ContactContent,
}

/// Document head text and page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaContent {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub skip_link: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavContent {
    pub home: String,
    pub projects: String,
    pub expertise: String,
    pub contact: String,
    pub open_menu: String,
    pub close_menu: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title1: String,
    pub title2: String,
    pub description: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsContent {
    pub section_title: String,
    pub subtitle: String,
    pub labels: CaseStudyLabels,
    pub case_studies: Vec<CaseStudy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyLabels {
    pub problem: String,
    pub solution: String,
    pub result: String,
}

/// One case study card. `title` and `category` are brand names and stay untranslated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub title: String,
    pub category: String,
    pub problem: String,
    pub solution: String,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseContent {
    pub section_title: String,
    pub subtitle: String,
    pub skills: Vec<TitledEntry>,
    pub process_title: String,
    pub process_subtitle: String,
    pub process_steps: Vec<TitledEntry>,
}

/// A skill card or process step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitledEntry {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub section_title: String,
    pub subtitle: String,
    pub form_title: String,
    pub form_subtitle: String,
    pub labels: FieldText,
    pub placeholders: FieldText,
    pub buttons: ContactButtons,
}

/// Per-field text for the three contact inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldText {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactButtons {
    pub send: String,
    pub sending: String,
    pub sent: String,
    pub sent_desc: String,
    pub send_another: String,
    pub error: String,
}

impl ContentTree {
    /// Navigation label for a section anchor.
    #[must_use]
    pub fn nav_label(&self, section: crate::types::SectionId) -> &str {
        use crate::types::SectionId;
        match section {
            SectionId::Home => &self.nav.home,
            SectionId::Projects => &self.nav.projects,
            SectionId::Expertise => &self.nav.expertise,
            SectionId::Contact => &self.nav.contact,
        }
    }
}

impl FieldText {
    /// Text for one contact field.
    #[must_use]
    pub fn get(&self, field: crate::contact::Field) -> &str {
        use crate::contact::Field;
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}
