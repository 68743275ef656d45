use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "email.serviceId")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Locale active on first render and used for missing catalog entries.
    pub default_locale: String,

    /// Directory holding `<code>.json` catalogs.
    /// If unset, the catalogs embedded in the crate are used.
    pub catalog_dir: Option<String>,

    pub reveal: RevealSettings,

    /// Contact delivery. If unset, submissions fail as not configured.
    pub email: Option<EmailSettings>,

    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl SiteSettings {
    /// The configured default locale, or Spanish when the code is unknown.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::parse(&self.default_locale).unwrap_or_default()
    }

    /// # Errors
    /// - Unsupported default locale
    /// - Reveal threshold outside `[0, 1]` or zero duration
    /// - Empty or malformed email settings
    /// - Empty log filter
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if Locale::parse(&self.default_locale).is_none() {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!(
                    "Unsupported locale '{}'. Supported locales: \"es\", \"en\"",
                    self.default_locale
                ),
            ));
        }

        if let Some(dir) = &self.catalog_dir
            && dir.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "catalogDir",
                "The directory cannot be empty. Please specify a path, or remove this field",
            ));
        }

        self.reveal.validate(&mut errors);

        if let Some(email) = &self.email {
            email.validate(&mut errors);
        }

        if self.log_filter.trim().is_empty() {
            errors.push(ValidationError::new(
                "logFilter",
                "The filter cannot be empty. Example: \"info\" or \"fasterplop_site=debug\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::default().code().to_string(),
            catalog_dir: None,
            reveal: RevealSettings::default(),
            email: None,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealSettings {
    /// Visible fraction at which an element is revealed.
    pub threshold: f64,
    pub root_margin_bottom_px: u32,
    pub duration_ms: u32,
    /// Stagger step for case-study cards and skills.
    pub stagger_step_ms: u32,
    /// Stagger step for the process steps.
    pub process_stagger_step_ms: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom_px: 50,
            duration_ms: 1000,
            stagger_step_ms: 100,
            process_stagger_step_ms: 150,
        }
    }
}

impl RevealSettings {
    /// Pushes every problem found onto `errors`.
    fn validate(&self, errors: &mut Vec<ValidationError>) {
        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(ValidationError::new(
                "reveal.threshold",
                format!("The threshold must be between 0 and 1, got {}", self.threshold),
            ));
        }

        if self.duration_ms == 0 {
            errors.push(ValidationError::new(
                "reveal.durationMs",
                "The duration must be greater than 0",
            ));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailSettings {
    /// Base URL of the EmailJS REST API.
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Public key, sent as `user_id`.
    pub public_key: String,
    pub timeout_ms: u64,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_ms: 10_000,
        }
    }
}

impl EmailSettings {
    /// Pushes every problem found onto `errors`.
    fn validate(&self, errors: &mut Vec<ValidationError>) {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            errors.push(ValidationError::new(
                "email.endpoint",
                format!(
                    "Invalid endpoint '{}'. It must start with \"http://\" or \"https://\"",
                    self.endpoint
                ),
            ));
        }

        for (field, value) in [
            ("email.serviceId", &self.service_id),
            ("email.templateId", &self.template_id),
            ("email.publicKey", &self.public_key),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    field,
                    "The value cannot be empty. Copy it from the EmailJS dashboard",
                ));
            }
        }

        if self.timeout_ms == 0 {
            errors.push(ValidationError::new("email.timeoutMs", "The timeout must be greater than 0"));
        }
    }
}
