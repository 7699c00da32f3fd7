//! Interactive Dispatcher
//!
//! Reads one line at a time, resolves the command token through the
//! registry and runs the guarded handler against the session. Commands run
//! strictly one after another; a command failure is written to the output
//! and the loop continues. Only end-of-input or the `EOF` command ends the
//! session.

use crate::commands::{builtin_registry, split_line, CommandContext, CommandRegistry, Flow};
use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::Result;
use crate::platform::{ConfirmOps, FilesystemOps, Platform, ProcessOps};
use crate::session::SessionState;
use std::io::{self, BufRead, Write};

/// Printed when the loop ends
pub const FAREWELL: &str = "Bye ...";

/// Welcome banner shown before the first prompt
pub fn intro_banner() -> String {
    let title = format!("# Welcome to texshell ver.: {} #", crate::VERSION);
    let rule = "#".repeat(title.len());
    format!(
        "{rule}\n{title}\n{rule}\n\
         Type help or ? for help.\n\
         For exit press ^D or type EOF.\n\
         \n\
         Every project should have separate root!\n\
         {dashes}",
        dashes = "-".repeat(title.len()),
    )
}

/// The interactive shell
pub struct Shell {
    registry: CommandRegistry,
    session: SessionState,
    fs: Box<dyn FilesystemOps>,
    process: Box<dyn ProcessOps>,
    confirm: Box<dyn ConfirmOps>,
    config_file_name: String,
    intro: Option<String>,
    show_prompt: bool,
}

impl Shell {
    /// Create a shell with the built-in commands over the given capabilities
    pub fn new(
        session: SessionState,
        fs: Box<dyn FilesystemOps>,
        process: Box<dyn ProcessOps>,
        confirm: Box<dyn ConfirmOps>,
    ) -> Self {
        Self::with_registry(builtin_registry(), session, fs, process, confirm)
    }

    /// Create a shell over native platform capabilities
    pub fn native(session: SessionState) -> Self {
        Self::new(
            session,
            Platform::filesystem(),
            Platform::process(),
            Platform::confirm(),
        )
    }

    /// Create a shell with a custom command registry
    pub fn with_registry(
        registry: CommandRegistry,
        session: SessionState,
        fs: Box<dyn FilesystemOps>,
        process: Box<dyn ProcessOps>,
        confirm: Box<dyn ConfirmOps>,
    ) -> Self {
        Self {
            registry,
            session,
            fs,
            process,
            confirm,
            config_file_name: DEFAULT_CONFIG_FILE.to_string(),
            intro: None,
            show_prompt: true,
        }
    }

    /// Use `name` for the per-project configuration file
    pub fn with_config_file_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }

    /// Print `intro` once before the first prompt
    pub fn with_intro(mut self, intro: Option<String>) -> Self {
        self.intro = intro;
        self
    }

    /// Write the prompt before each line is read
    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run one line and return the command's outcome without reporting it
    ///
    /// An empty line does nothing. There is no further input, so a
    /// confirmation asked by the command is declined.
    pub fn dispatch(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        self.dispatch_with_input(line, &mut io::empty(), out)
    }

    /// Run one line, answering confirmations from `input`
    pub fn dispatch_with_input(
        &mut self,
        line: &str,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        let (name, args) = split_line(line);
        if name.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = self.registry.resolve(name)?;
        debug!("Dispatching {} {:?}", name, args);

        let mut ctx = CommandContext {
            session: &mut self.session,
            fs: self.fs.as_ref(),
            process: self.process.as_ref(),
            confirm: self.confirm.as_mut(),
            registry: &self.registry,
            config_file_name: &self.config_file_name,
            input,
            out,
        };
        command.invoke(&mut ctx, args)
    }

    /// Run one line, writing any command failure to `out`
    ///
    /// Errors returned from here are failures of `out` itself.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        self.execute_with_input(line, &mut io::empty(), out)
    }

    /// Like [`Shell::execute_line`], answering confirmations from `input`
    pub fn execute_with_input(
        &mut self,
        line: &str,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        match self.dispatch_with_input(line, input, out) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Read and execute lines until end-of-input or an exit command
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        if let Some(intro) = &self.intro {
            writeln!(out, "{}", intro)?;
        }

        let mut line = String::new();
        loop {
            if self.show_prompt {
                write!(out, "{}", self.session.prompt())?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                if self.show_prompt {
                    writeln!(out)?;
                }
                break;
            }

            let command_line = line.trim_end_matches(['\n', '\r']);
            if self.execute_with_input(command_line, &mut input, &mut out)? == Flow::Exit {
                break;
            }
            out.flush()?;
        }

        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
        Ok(())
    }
}
