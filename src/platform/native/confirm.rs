//! Yes/no confirmation asked on the shell's streams

use crate::error::Result;
use crate::platform::traits::ConfirmOps;
use std::io::{BufRead, Write};

pub struct PromptConfirm;

impl PromptConfirm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromptConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmOps for PromptConfirm {
    fn confirm(
        &mut self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
        description: &str,
    ) -> Result<bool> {
        write!(
            out,
            "{} do not exist. Do you want to create new one? [Y/n]: ",
            description
        )?;
        out.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            debug!("End of input while confirming {}", description);
            return Ok(false);
        }
        Ok(parse_answer(&answer))
    }
}

/// Interpret a typed answer; `y` in any case or an empty line accepts
pub fn parse_answer(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer.is_empty() || answer == "y"
}
