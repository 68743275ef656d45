//! Bilingual display text.
/// Locale catalog loading and lookup
pub mod catalog;
/// Key path flattening and catalog shape comparison
pub mod shape;
/// Typed content tree sections
pub mod tree;

pub use catalog::{
    CatalogError,
    LocaleCatalog,
};
pub use shape::{
    MismatchKind,
    ShapeMismatch,
    flatten_json,
};
pub use tree::{
    CaseStudy,
    CaseStudyLabels,
    ContactButtons,
    ContactContent,
    ContentTree,
    ExpertiseContent,
    FieldText,
    HeroContent,
    MetaContent,
    NavContent,
    ProjectsContent,
    TitledEntry,
};
