//! Line-oriented input for the interactive session.

use std::str::FromStr;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::Result;

/// Source of input lines.
///
/// `Ok(None)` means the user ended the session (Ctrl-C, Ctrl-D or end of input).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input backed by rustyline, with history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Ok(Terminal {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(&line);
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads lines until one parses as `T`.
///
/// Blank lines are skipped silently; other unparsable lines are reported and
/// the prompt is repeated.
///
/// # Returns
///
/// `None` if the input ended before a value was read.
pub fn read_value<T, S>(source: &mut S, prompt: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    S: LineSource + ?Sized,
{
    loop {
        let Some(line) = source.read_line(prompt)? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(err) => println!("Invalid input '{line}': {err}"),
        }
    }
}
