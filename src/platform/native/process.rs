//! Native compiler invocation

use crate::error::{Error, Result};
use crate::platform::traits::{CompileStatus, ProcessOps};
use crate::session::Compiler;
use std::path::Path;
use std::process::Command;

pub struct NativeProcess;

impl NativeProcess {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeProcess {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessOps for NativeProcess {
    fn run_compiler(
        &self,
        compiler: Compiler,
        file: &Path,
        working_dir: &Path,
    ) -> Result<CompileStatus> {
        info!("Running {} on {}", compiler, file.display());

        // stdio is inherited so the compiler can talk to the terminal
        let status = Command::new(compiler.program())
            .arg(file)
            .current_dir(working_dir)
            .status()
            .map_err(|e| {
                Error::Other(format!("Failed to run {}: {}", compiler.program(), e))
            })?;

        debug!("{} exited with {:?}", compiler, status.code());
        Ok(CompileStatus {
            code: status.code(),
        })
    }
}
