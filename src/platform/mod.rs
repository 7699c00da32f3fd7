//! Platform abstraction layer
//!
//! This module provides the capabilities the shell core calls out to:
//! filesystem access, compiler invocation and user confirmation.

mod native;
mod traits;

pub use native::{NativeFilesystem, NativeProcess, PromptConfirm};
pub use traits::*;

/// Platform implementation factory
pub struct Platform;

impl Platform {
    /// Get the native filesystem operations
    pub fn filesystem() -> Box<dyn FilesystemOps> {
        Box::new(NativeFilesystem::new())
    }

    /// Get the native process operations
    pub fn process() -> Box<dyn ProcessOps> {
        Box::new(NativeProcess::new())
    }

    /// Get the confirmation prompt
    pub fn confirm() -> Box<dyn ConfirmOps> {
        Box::new(PromptConfirm::new())
    }
}
