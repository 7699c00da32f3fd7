//! Settings File Loading
//!
//! Locates and loads the shell's TOML settings file with fallback to the
//! built-in defaults.

use super::ShellSettings;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up inside the per-user configuration directory
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// File name looked up in the working directory
pub const LOCAL_SETTINGS_FILE_NAME: &str = "texshell.toml";

/// Settings file loader
pub struct SettingsLoader {
    /// Candidate files, most preferred first
    search_paths: Vec<PathBuf>,
    /// File the settings were loaded from (if any)
    current_path: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self::with_search_paths(Self::default_search_paths())
    }

    /// Create a loader over explicit search paths
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            current_path: None,
        }
    }

    /// Load settings from the first readable candidate, or defaults
    pub fn load() -> Result<ShellSettings> {
        Self::new().find_and_load()
    }

    /// Load settings from an explicit file; a missing file is an error
    pub fn load_from_path(path: &Path) -> Result<ShellSettings> {
        let settings = Self::load_file(path)?;
        settings.validate()?;
        info!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Walk the search paths and load the first file that parses
    pub fn find_and_load(&mut self) -> Result<ShellSettings> {
        for path in &self.search_paths {
            if !path.is_file() {
                continue;
            }
            match Self::load_file(path) {
                Ok(settings) => {
                    settings.validate()?;
                    info!("Settings loaded from {}", path.display());
                    self.current_path = Some(path.clone());
                    return Ok(settings);
                }
                Err(e) => {
                    warn!("Failed to load settings from {}: {}", path.display(), e);
                    continue;
                }
            }
        }

        debug!("No settings file found, using defaults");
        Ok(ShellSettings::default())
    }

    /// File the settings came from, `None` when defaults are in use
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn load_file(path: &Path) -> Result<ShellSettings> {
        let content = fs::read_to_string(path).map_err(|e| Error::SettingsLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::SettingsLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Default candidates: the per-user config directory, then the
    /// working directory
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Use XDG_CONFIG_HOME if set, otherwise the platform config dir
        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("texshell").join(SETTINGS_FILE_NAME));
        } else if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("texshell").join(SETTINGS_FILE_NAME));
        }

        paths.push(PathBuf::from(LOCAL_SETTINGS_FILE_NAME));
        paths
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
