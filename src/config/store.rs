//! Per-project configuration store
//!
//! Backs the `config` command. The document lives in a hidden file in the
//! session's current directory and is re-read on every invocation; nothing
//! is cached between commands.

use super::ini::ConfigDocument;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Version of the assignment grammar below
pub const GRAMMAR_VERSION: u32 = 1;

/// Pattern for an assignment key
pub const KEY_PATTERN: &str = r"[A-Za-z0-9_]+";

/// Pattern for an assignment value
pub const VALUE_PATTERN: &str = r"[A-Za-z0-9'<>@]+";

/// Separator between assignment tokens on one line
pub const ASSIGNMENT_SEPARATOR: char = ',';

/// Section that receives every assignment
pub const MAIN_SECTION: &str = "main";

/// Default file name of the per-project configuration
pub const DEFAULT_CONFIG_FILE: &str = ".config";

static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^({})=({})$", KEY_PATTERN, VALUE_PATTERN))
        .expect("assignment grammar compiles")
});

/// One parsed `key=value` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// Parse a single assignment token, ignoring surrounding spaces
pub fn parse_assignment(token: &str) -> Result<Assignment> {
    let trimmed = token.trim_matches(' ');
    let captures = ASSIGNMENT
        .captures(trimmed)
        .ok_or_else(|| Error::ConfigGrammar {
            token: token.to_string(),
        })?;
    Ok(Assignment {
        key: captures[1].to_string(),
        value: captures[2].to_string(),
    })
}

/// Split an argument line into tokens and parse each one independently
pub fn parse_assignments(line: &str) -> Vec<Result<Assignment>> {
    line.split(ASSIGNMENT_SEPARATOR)
        .map(parse_assignment)
        .collect()
}

/// Outcome of an assignment-mode invocation
#[derive(Debug, Default)]
pub struct AssignReport {
    /// Assignments written to the main section, in input order
    pub applied: Vec<Assignment>,
    /// Grammar errors for rejected tokens, in input order
    pub rejected: Vec<Error>,
    /// Whether the document was written back to disk
    pub persisted: bool,
}

/// Configuration file in one directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for `file_name` inside `dir`
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
        }
    }

    /// Create a store for the default file name inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir, DEFAULT_CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read and parse the document, `None` when there is no file
    pub fn load(&self) -> Result<Option<ConfigDocument>> {
        if !self.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let document = ConfigDocument::parse(&text).map_err(|e| {
            warn!("Failed to parse {}: {}", self.path.display(), e);
            Error::ConfigParse {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(Some(document))
    }

    /// Write the document, creating the file if needed
    pub fn save(&self, document: &ConfigDocument) -> Result<()> {
        fs::write(&self.path, document.to_ini_string())?;
        info!("Configuration written to {}", self.path.display());
        Ok(())
    }

    /// Apply comma-separated assignments to the main section
    ///
    /// Tokens are independent: a malformed token is reported and skipped
    /// while the others still apply. The document is written back when at
    /// least one token applied. A malformed file on disk aborts the whole
    /// invocation before anything is applied.
    pub fn assign(&self, line: &str) -> Result<AssignReport> {
        let mut document = self.load()?.unwrap_or_default();
        let mut report = AssignReport::default();

        for parsed in parse_assignments(line) {
            match parsed {
                Ok(assignment) => {
                    document
                        .ensure_section(MAIN_SECTION)
                        .set(assignment.key.clone(), assignment.value.clone());
                    report.applied.push(assignment);
                }
                Err(e) => {
                    debug!("Skipping assignment: {}", e);
                    report.rejected.push(e);
                }
            }
        }

        if !report.applied.is_empty() {
            self.save(&document)?;
            report.persisted = true;
        }
        Ok(report)
    }
}

/// Render a document the way the `config` query shows it
pub fn render_document(document: &ConfigDocument) -> Vec<String> {
    let mut lines = vec!["Configuration:".to_string()];
    for section in document.sections() {
        lines.push(format!(" '{}' section", section.name()));
        if section.is_empty() {
            lines.push("   This section is empty.".to_string());
        }
        for (key, value) in section.entries() {
            lines.push(format!("   {} = {}", key, value));
        }
    }
    lines
}
