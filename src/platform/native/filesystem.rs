//! Native filesystem operations

use crate::error::Result;
use crate::platform::traits::FilesystemOps;
use std::fs;
use std::path::{Path, PathBuf};

pub struct NativeFilesystem;

impl NativeFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FilesystemOps for NativeFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir(path)?;
        debug!("Created directory {}", path.display());
        Ok(())
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn change_dir(&self, path: &Path) -> Result<()> {
        std::env::set_current_dir(path)?;
        Ok(())
    }

    fn current_dir(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }
}
