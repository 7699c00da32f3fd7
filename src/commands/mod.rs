//! Command registry, arity policies and the built-in commands
//!
//! A command is a name, an [`ArgumentPolicy`], a help text and a handler.
//! Handlers receive a [`CommandContext`] giving them the session state, the
//! platform capabilities and the output stream for the duration of one
//! command.

pub mod builtins;
pub mod policy;
pub mod registry;

pub use builtins::builtin_registry;
pub use policy::ArgumentPolicy;
pub use registry::{split_line, Command, CommandRegistry};

use crate::error::Result;
use crate::platform::{ConfirmOps, FilesystemOps, ProcessOps};
use crate::session::SessionState;
use std::io::{BufRead, Write};

/// What the dispatcher does after a command completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Leave the loop
    Exit,
}

/// Guarded command handler
pub type Handler = Box<dyn Fn(&mut CommandContext<'_>, &str) -> Result<Flow>>;

/// Everything a handler may touch while it runs
pub struct CommandContext<'a> {
    pub session: &'a mut SessionState,
    pub fs: &'a dyn FilesystemOps,
    pub process: &'a dyn ProcessOps,
    pub confirm: &'a mut dyn ConfirmOps,
    pub registry: &'a CommandRegistry,
    /// File name of the per-project configuration
    pub config_file_name: &'a str,
    /// Remaining shell input, read by confirmations
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
}

impl CommandContext<'_> {
    /// Write one line of output
    pub fn println(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", line.as_ref())?;
        Ok(())
    }
}
