//! Sectioned `key = value` document format
//!
//! The per-project configuration file is a plain INI document:
//!
//! ```text
//! [main]
//! author = Tomas
//! lang = cs
//! ```
//!
//! Blank lines and lines starting with `#` or `;` are ignored. An indented
//! line directly after an entry continues that entry's value. Keys keep
//! their case and a repeated key overwrites the earlier value in place.

use std::fmt;
use std::str::FromStr;

/// INI parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IniError {
    #[error("line {line}: entry '{content}' appears before any [section] header")]
    MissingSectionHeader { line: usize, content: String },

    #[error("line {line}: cannot parse '{content}'")]
    MalformedLine { line: usize, content: String },
}

/// Named group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, keeping its position if it already exists
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }
}

/// Ordered collection of sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from text
    pub fn parse(text: &str) -> Result<Self, IniError> {
        let mut document = Self::new();
        // (section index, key) of the entry an indented line continues
        let mut last_entry: Option<(usize, String)> = None;
        let mut current: Option<usize> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end();
            let trimmed = line.trim_start();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                if let Some((section, key)) = &last_entry {
                    let section = &mut document.sections[*section];
                    let value = match section.get(key) {
                        Some(value) if !value.is_empty() => format!("{}\n{}", value, trimmed),
                        _ => trimmed.to_string(),
                    };
                    section.set(key.clone(), value);
                    continue;
                }
            }

            if trimmed.starts_with('[') {
                let name = trimmed
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .map(str::trim)
                    .filter(|name| !name.is_empty() && !name.contains(']'))
                    .ok_or_else(|| IniError::MalformedLine {
                        line: line_no,
                        content: trimmed.to_string(),
                    })?;
                current = Some(document.section_index_or_insert(name));
                last_entry = None;
                continue;
            }

            let Some(section) = current else {
                return Err(IniError::MissingSectionHeader {
                    line: line_no,
                    content: trimmed.to_string(),
                });
            };

            let (key, value) = split_entry(trimmed).ok_or_else(|| IniError::MalformedLine {
                line: line_no,
                content: trimmed.to_string(),
            })?;
            document.sections[section].set(key, value);
            last_entry = Some((section, key.to_string()));
        }

        Ok(document)
    }

    /// Sections in document order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Get the section `name`, appending an empty one if it is missing
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let index = self.section_index_or_insert(name);
        &mut self.sections[index]
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Set `key` in `section`, creating the section when needed
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ensure_section(section).set(key, value);
    }

    /// Serialize the document back to INI text
    pub fn to_ini_string(&self) -> String {
        self.to_string()
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "{} = {}", key, value.replace('\n', "\n\t"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for ConfigDocument {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split `key = value` or `key: value` at the first delimiter
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let at = line.find(['=', ':'])?;
    let key = line[..at].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[at + 1..].trim()))
}
