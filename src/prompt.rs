// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_writer(self) -> W {
        self.output
    }

    /// Prints `message` and returns the next line without its terminator.
    /// Fails once input is exhausted.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        match self.ask_opt(message)? {
            Some(line) => Ok(line),
            None => bail!("input closed while waiting for an answer"),
        }
    }

    /// Like [`Prompter::ask`] but reports end of input as `None`.
    pub fn ask_opt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Asks until `validate` accepts the answer, printing each rejection.
    pub fn ask_until<T, E, F>(&mut self, message: &str, mut validate: F) -> Result<T>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(message)?;
            match validate(&answer) {
                Ok(v) => return Ok(v),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self.ask(message)?.trim().eq_ignore_ascii_case("y"))
    }
}
