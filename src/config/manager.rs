//! Holds the validated site settings.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    SiteSettings,
};

/// Name of the configuration file looked up in a site root.
pub const CONFIG_FILE_NAME: &str = ".fasterplop.json";

/// Owns the current settings and the site root they were loaded from.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings, always valid.
    current_settings: SiteSettings,

    /// Site root the settings were loaded from.
    site_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SiteSettings::default(), site_root: None }
    }

    /// Loads and validates the settings of a site root.
    ///
    /// Without a root, or without a configuration file, defaults are used.
    /// On error the previous settings stay in place.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, site_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for site root: {:?}", site_root);

        let settings = if let Some(root) = &site_root {
            read_config_file(root)?.unwrap_or_default()
        } else {
            SiteSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.site_root = site_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the settings after validating them.
    ///
    /// # Errors
    /// - Validation error
    pub fn update_settings(&mut self, new_settings: SiteSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// Finds the nearest directory at or above `start` holding a config file
    /// and loads it. Falls back to defaults rooted at `start` when no
    /// ancestor has one.
    ///
    /// # Errors
    /// Same as [`Self::load_settings`].
    pub fn discover(&mut self, start: &Path) -> Result<(), ConfigError> {
        let root = start
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
            .unwrap_or(start)
            .to_path_buf();
        self.load_settings(Some(root))
    }

    #[must_use]
    pub const fn get_settings(&self) -> &SiteSettings {
        &self.current_settings
    }

    #[must_use]
    pub fn site_root(&self) -> Option<&Path> {
        self.site_root.as_deref()
    }

    /// Catalog directory resolved against the site root.
    ///
    /// Relative directories are joined onto the root; `None` means the
    /// built-in catalogs.
    #[must_use]
    pub fn catalog_dir(&self) -> Option<PathBuf> {
        let dir = Path::new(self.current_settings.catalog_dir.as_deref()?);
        match &self.site_root {
            Some(root) if dir.is_relative() => Some(root.join(dir)),
            _ => Some(dir.to_path_buf()),
        }
    }
}

/// Reads `<site_root>/.fasterplop.json`; `Ok(None)` when the site has none.
fn read_config_file(site_root: &Path) -> Result<Option<SiteSettings>, ConfigError> {
    let path = site_root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        tracing::debug!("No site configuration at {:?}, using defaults", path);
        return Ok(None);
    }

    let settings: SiteSettings = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    tracing::debug!("Read site settings from {:?}: {:?}", path, settings);
    Ok(Some(settings))
}
