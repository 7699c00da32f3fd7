//! Configuration management for texshell
//!
//! Two unrelated kinds of configuration live here:
//!
//! - [`ShellSettings`] - how the shell itself starts (root directory,
//!   initial compiler, prompt), loaded from TOML by [`loader::SettingsLoader`]
//! - [`store::ConfigStore`] - the per-project INI file edited with the
//!   `config` command, using the [`ini`] document format

pub mod ini;
pub mod loader;
pub mod store;

use crate::error::{Error, Result};
use crate::session::{Compiler, PromptStyle};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use ini::{ConfigDocument, IniError, Section};
pub use loader::SettingsLoader;
pub use store::{ConfigStore, DEFAULT_CONFIG_FILE, MAIN_SECTION};

/// Shell startup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Root directory override; the home directory is used when unset
    pub root: Option<PathBuf>,

    /// Compiler selected at startup
    pub compiler: String,

    /// Leading tag of the prompt
    pub prompt_prefix: String,

    /// Trailing marker of the prompt
    pub ps1: String,

    /// File name of the per-project configuration
    pub config_file_name: String,

    /// Print the welcome banner on start
    pub show_intro: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            root: None,
            compiler: Compiler::default().to_string(),
            prompt_prefix: PromptStyle::DEFAULT_PREFIX.to_string(),
            ps1: PromptStyle::DEFAULT_PS1.to_string(),
            config_file_name: DEFAULT_CONFIG_FILE.to_string(),
            show_intro: true,
        }
    }
}

impl ShellSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Validate every field
    pub fn validate(&self) -> Result<()> {
        self.compiler().map_err(|e| Error::SettingsValidationFailed {
            field: "compiler".to_string(),
            reason: e.to_string(),
        })?;

        for (field, value) in [("prompt_prefix", &self.prompt_prefix), ("ps1", &self.ps1)] {
            if value.contains(['\n', '\r']) {
                return Err(Error::SettingsValidationFailed {
                    field: field.to_string(),
                    reason: "must be a single line".to_string(),
                });
            }
        }

        let name = &self.config_file_name;
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(Error::SettingsValidationFailed {
                field: "config_file_name".to_string(),
                reason: format!("'{}' is not a plain file name", name),
            });
        }

        Ok(())
    }

    /// Initial compiler
    pub fn compiler(&self) -> Result<Compiler> {
        self.compiler.parse()
    }

    /// Prompt decoration
    pub fn prompt_style(&self) -> PromptStyle {
        PromptStyle::new(self.prompt_prefix.clone(), self.ps1.clone())
    }
}
