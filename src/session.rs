//! Session State
//!
//! Mutable state of one interactive session: the fixed root directory, the
//! project directory the user is working in, the rendered prompt and the
//! selected TeX compiler.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// TeX compilers the shell is allowed to invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compiler {
    #[default]
    PdfCsLatex,
    PdfLatex,
    CsLatex,
    Latex,
    Tex,
}

impl Compiler {
    /// Every allowed compiler, in the order shown to the user
    pub const ALL: [Compiler; 5] = [
        Compiler::PdfCsLatex,
        Compiler::PdfLatex,
        Compiler::CsLatex,
        Compiler::Latex,
        Compiler::Tex,
    ];

    /// Executable name of the compiler
    pub fn program(&self) -> &'static str {
        match self {
            Compiler::PdfCsLatex => "pdfcslatex",
            Compiler::PdfLatex => "pdflatex",
            Compiler::CsLatex => "cslatex",
            Compiler::Latex => "latex",
            Compiler::Tex => "tex",
        }
    }

    /// `|`-separated allow-list used in help texts
    pub fn allow_list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.program())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for Compiler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.program() == s)
            .ok_or_else(|| Error::DisallowedCompiler {
                compiler: s.to_string(),
            })
    }
}

/// Prompt decoration around the root-relative location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptStyle {
    /// Leading tag, e.g. `[texshell]`
    pub prefix: String,
    /// Trailing marker, e.g. `>>`
    pub ps1: String,
}

impl PromptStyle {
    pub const DEFAULT_PREFIX: &'static str = "[texshell]";
    pub const DEFAULT_PS1: &'static str = ">>";

    pub fn new(prefix: impl Into<String>, ps1: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ps1: ps1.into(),
        }
    }

    /// Render the prompt for `current` inside `root`
    ///
    /// At the root the bare form `prefix ps1 ` is produced; anywhere else
    /// the root-relative location sits between the two.
    pub fn derive(&self, root: &Path, current: &Path) -> String {
        if current == root {
            format!("{} {} ", self.prefix, self.ps1)
        } else {
            format!("{} {} {} ", self.prefix, relative_location(root, current), self.ps1)
        }
    }
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, Self::DEFAULT_PS1)
    }
}

/// Render the prompt with the default style
pub fn derive_prompt(root: &Path, current: &Path) -> String {
    PromptStyle::default().derive(root, current)
}

/// Location of `current` relative to `root`, shown as `/` for the root itself
///
/// A path outside of `root` is shown unchanged.
pub fn relative_location(root: &Path, current: &Path) -> String {
    match current.strip_prefix(root) {
        Ok(rel) => {
            let parts: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            format!("/{}", parts.join("/"))
        }
        Err(_) => current.display().to_string(),
    }
}

/// State of one shell session
#[derive(Debug, Clone)]
pub struct SessionState {
    root: PathBuf,
    current: PathBuf,
    prompt: String,
    compiler: Compiler,
    style: PromptStyle,
}

impl SessionState {
    /// Create a session anchored at `root`, starting in the root itself
    pub fn new(root: PathBuf, compiler: Compiler, style: PromptStyle) -> Self {
        let prompt = style.derive(&root, &root);
        Self {
            current: root.clone(),
            root,
            prompt,
            compiler,
            style,
        }
    }

    /// Create a session with the default compiler and prompt style
    pub fn with_root(root: PathBuf) -> Self {
        Self::new(root, Compiler::default(), PromptStyle::default())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current_directory(&self) -> &Path {
        &self.current
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn compiler(&self) -> Compiler {
        self.compiler
    }

    pub fn set_compiler(&mut self, compiler: Compiler) {
        info!("Compiler set to {}", compiler);
        self.compiler = compiler;
    }

    /// Check if the session currently sits in the root directory
    pub fn is_at_root(&self) -> bool {
        self.current == self.root
    }

    /// Current directory relative to the root (`/` at the root)
    pub fn location(&self) -> String {
        relative_location(&self.root, &self.current)
    }

    /// Path of the project `name` directly beneath the root
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Return to the root directory
    pub fn enter_root(&mut self) {
        self.current = self.root.clone();
        self.refresh_prompt();
        info!("Entered root {}", self.root.display());
    }

    /// Switch to the project `name` directly beneath the root
    ///
    /// The caller is responsible for the directory existing.
    pub fn enter_project(&mut self, name: &str) {
        self.current = self.project_path(name);
        self.refresh_prompt();
        info!("Entered project {}", self.current.display());
    }

    fn refresh_prompt(&mut self) {
        self.prompt = self.style.derive(&self.root, &self.current);
    }
}
