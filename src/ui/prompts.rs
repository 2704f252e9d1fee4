//! Yes/no prompts.
//!
//! On a terminal, confirmations go through dialoguer. When stdin is piped
//! (`yes | freezeup`), answers are read line by line. Either way there is
//! no default: a blank line or anything outside the accepted tokens asks
//! again.

use console::Term;
use dialoguer::Confirm;
use std::io::{self, BufRead, Write};

use crate::error::{FreezeupError, Result};

use super::Prompt;

/// Convert dialoguer errors to FreezeupError.
fn map_dialoguer_err(e: dialoguer::Error) -> FreezeupError {
    FreezeupError::Io(e.into())
}

/// Ask on an attended terminal. Enter alone does not answer.
pub fn confirm_on_term(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(&prompt.question)
        .wait_for_newline(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Interpret one line of operator input.
///
/// Accepts `y`, `yes`, `n`, `no` in any case. Returns `None` for anything
/// else, blank lines included.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask on a line-oriented stream, repeating until the answer is valid.
///
/// End of input counts as "no".
pub fn confirm_lines<R: BufRead, W: Write>(
    prompt: &Prompt,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<bool> {
    loop {
        write!(writer, "{} [y/n] ", prompt.question)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            tracing::debug!("Input closed while asking '{}'", prompt.key);
            return Ok(false);
        }

        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(writer, "Please answer yes or no.")?,
        }
    }
}
