//! Command lookup and line splitting

use super::{ArgumentPolicy, CommandContext, Flow, Handler};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Registered command
pub struct Command {
    name: String,
    policy: ArgumentPolicy,
    usage: String,
    help: String,
    handler: Handler,
}

impl Command {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> ArgumentPolicy {
        self.policy
    }

    /// Usage line, e.g. `setCC <compiler>`
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Run the guarded handler
    pub fn invoke(&self, ctx: &mut CommandContext<'_>, args: &str) -> Result<Flow> {
        (self.handler)(ctx, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("usage", &self.usage)
            .finish()
    }
}

/// Name to command mapping, kept in registration order
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, guarded by `policy`
    ///
    /// Registering a name twice replaces the earlier command.
    pub fn register<F>(
        &mut self,
        name: &str,
        policy: ArgumentPolicy,
        usage: &str,
        help: &str,
        handler: F,
    ) where
        F: Fn(&mut CommandContext<'_>, &str) -> Result<Flow> + 'static,
    {
        let command = Command {
            name: name.to_string(),
            policy,
            usage: usage.to_string(),
            help: help.to_string(),
            handler: policy.guard(name, handler),
        };

        match self.index.get(name) {
            Some(&slot) => {
                warn!("Command '{}' registered twice, replacing", name);
                self.commands[slot] = command;
            }
            None => {
                self.index.insert(name.to_string(), self.commands.len());
                self.commands.push(command);
            }
        }
    }

    /// Look up a command by its exact (case-sensitive) name
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.index.get(name).map(|&slot| &self.commands[slot])
    }

    /// Look up a command, failing with an unknown-command error
    pub fn resolve(&self, name: &str) -> Result<&Command> {
        self.get(name).ok_or_else(|| Error::UnknownCommand {
            command: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Split an input line into the command token and its argument string
///
/// The token is the first whitespace-delimited word. The argument string is
/// the rest of the line with leading whitespace and trailing blanks
/// removed; anything inside it, line breaks included, is preserved. A
/// leading `?` is shorthand for `help`.
pub fn split_line(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    if let Some(rest) = line.strip_prefix('?') {
        return ("help", trim_args(rest));
    }
    match line.find(char::is_whitespace) {
        Some(at) => (&line[..at], trim_args(&line[at..])),
        None => (line, ""),
    }
}

fn trim_args(args: &str) -> &str {
    args.trim_start().trim_end_matches([' ', '\t'])
}
