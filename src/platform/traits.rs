//! Platform operation traits
//!
//! The command layer reaches the filesystem, the compiler process and the
//! interactive yes/no prompt only through these traits, which keeps every
//! command testable against in-memory fakes.

use crate::error::Result;
use crate::session::Compiler;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Filesystem operations used by the navigation and listing commands
pub trait FilesystemOps {
    /// Check if anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if `path` is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Create a single directory
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// List entry names (not paths) inside `dir`, sorted by name
    fn list_entries(&self, dir: &Path) -> Result<Vec<String>>;

    /// List entry names inside `dir` whose extension is `extension`
    ///
    /// Mirrors a `*.ext` glob: hidden entries never match.
    fn list_by_extension(&self, dir: &Path, extension: &str) -> Result<Vec<String>> {
        Ok(self
            .list_entries(dir)?
            .into_iter()
            .filter(|name| !name.starts_with('.'))
            .filter(|name| {
                Path::new(name)
                    .extension()
                    .map_or(false, |ext| ext == extension)
            })
            .collect())
    }

    /// Change the process working directory
    fn change_dir(&self, path: &Path) -> Result<()>;

    /// Get the process working directory
    fn current_dir(&self) -> Result<PathBuf>;
}

/// Exit status reported by an external compiler run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileStatus {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CompileStatus {
    /// Create a status from an exit code
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Check if the compiler reported success
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// External process invocation
pub trait ProcessOps {
    /// Run `compiler` on `file` with `working_dir` as the working directory,
    /// blocking until the process exits
    fn run_compiler(&self, compiler: Compiler, file: &Path, working_dir: &Path)
        -> Result<CompileStatus>;
}

/// Interactive yes/no confirmation
///
/// The question is asked on the shell's own streams so the answer is read
/// from the same input as the command lines.
pub trait ConfirmOps {
    /// Ask the user to confirm `description`; an empty answer accepts
    fn confirm(
        &mut self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
        description: &str,
    ) -> Result<bool>;
}
