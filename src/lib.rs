//! texshell - an interactive shell for TeX projects
//!
//! This library provides the core of texshell, a line-oriented shell that
//! keeps TeX projects in separate directories beneath one root and runs the
//! TeX compiler on them.
//!
//! ## Features
//!
//! - **Project navigation:** `im <project>` enters (or creates) a project
//!   directly beneath the root, `im` alone returns to the root
//! - **Listings:** `ls`, `lspdfs` and `lstex` with hidden files filtered out
//! - **Compiler selection:** `getCC` / `setCC` over a fixed allow-list
//! - **Compilation:** `compile <file>` runs the selected compiler
//! - **Project configuration:** `config` reads and writes a small INI file
//!   in the current project
//!
//! ## Module Organization
//!
//! - [`shell`] - The read-resolve-execute loop
//! - [`commands`] - Command registry, arity policies and built-in commands
//! - [`session`] - Session state, compilers and prompt derivation
//! - [`config`] - Shell settings (TOML) and the per-project INI store
//! - [`validation`] - Project name validation
//! - [`platform`] - Filesystem, process and confirmation capabilities
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use texshell::{SessionState, Shell};
//! use std::io;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionState::with_root("/home/user".into());
//! let mut shell = Shell::native(session);
//! shell.run(io::stdin().lock(), io::stdout())?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod config;
pub mod error;
pub mod platform;
pub mod session;
pub mod shell;
pub mod validation;

// Re-exports for core functionality
pub use commands::{ArgumentPolicy, CommandRegistry, Flow};
pub use config::{ConfigDocument, ConfigStore, SettingsLoader, ShellSettings};
pub use error::{Error, Result};
pub use session::{derive_prompt, Compiler, PromptStyle, SessionState};
pub use shell::Shell;

// Version information
/// The current version of texshell from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build a native shell from loaded settings
///
/// `root` wins over the `root` setting; without either the home directory
/// is used, and the process working directory as a last resort.
pub fn init(settings: &ShellSettings, root: Option<std::path::PathBuf>) -> Result<Shell> {
    info!("Initializing {} v{}", NAME, VERSION);
    settings.validate()?;

    let fs = platform::Platform::filesystem();
    let root = match root.or_else(|| settings.root.clone()).or_else(dirs::home_dir) {
        Some(root) => root,
        None => {
            warn!("No home directory found, anchoring at the working directory");
            fs.current_dir()?
        }
    };

    if !fs.is_dir(&root) {
        return Err(Error::SettingsValidationFailed {
            field: "root".to_string(),
            reason: format!("{} is not a directory", root.display()),
        });
    }
    fs.change_dir(&root)?;
    info!("Session root is {}", root.display());

    let session = SessionState::new(root, settings.compiler()?, settings.prompt_style());
    let intro = settings.show_intro.then(shell::intro_banner);

    Ok(Shell::new(
        session,
        fs,
        platform::Platform::process(),
        platform::Platform::confirm(),
    )
    .with_config_file_name(settings.config_file_name.clone())
    .with_intro(intro))
}
