//! Argument arity policies
//!
//! Every registered command carries a policy. Registration wraps the raw
//! handler with [`ArgumentPolicy::guard`], so the handler itself only runs
//! once its argument string has passed the check.

use super::{CommandContext, Flow, Handler};
use crate::error::{Error, Result};
use std::fmt;

/// How many arguments a command accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentPolicy {
    /// The argument string must be empty
    NoArgs,
    /// The argument string must be non-empty and a single line
    ExactlyOne,
    /// Anything is accepted; the handler interprets the argument itself
    Any,
}

impl ArgumentPolicy {
    /// Check `args` against the policy
    pub fn check(&self, command: &str, args: &str) -> Result<()> {
        let accepted = match self {
            ArgumentPolicy::NoArgs => args.is_empty(),
            ArgumentPolicy::ExactlyOne => !args.is_empty() && !args.contains(['\n', '\r']),
            ArgumentPolicy::Any => true,
        };

        if accepted {
            Ok(())
        } else {
            debug!("{} rejected arguments {:?} ({})", command, args, self);
            Err(Error::Arity {
                command: command.to_string(),
                policy: *self,
            })
        }
    }

    /// Wrap `handler` so it only runs for arguments the policy accepts
    pub fn guard<F>(self, command: impl Into<String>, handler: F) -> Handler
    where
        F: Fn(&mut CommandContext<'_>, &str) -> Result<Flow> + 'static,
    {
        let command = command.into();
        Box::new(move |ctx: &mut CommandContext<'_>, args: &str| {
            self.check(&command, args)?;
            handler(ctx, args)
        })
    }
}

impl fmt::Display for ArgumentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgumentPolicy::NoArgs => "none",
            ArgumentPolicy::ExactlyOne => "exactly-one",
            ArgumentPolicy::Any => "any",
        };
        f.write_str(name)
    }
}
