//! Site configuration loaded from `.fasterplop.json`.
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use types::{
    ConfigError,
    EmailSettings,
    RevealSettings,
    SiteSettings,
    ValidationError,
};
