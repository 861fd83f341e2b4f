//! Parsing and validation of user-supplied names, models, and movements.
//!
//! The `parse_*` functions are pure. [`Prompter`] wraps them in a loop that
//! re-prompts until a value validates, so nothing invalid reaches a [`Robot`](crate::Robot).

use crate::model::Model;
use crate::robot::RobotName;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Inclusive bound on the magnitude of a single movement command.
pub const MAX_MOVEMENT: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("the robot name cannot be empty")]
    EmptyName,
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("model {0} does not exist, pick one of 0, 1, 2 or 3")]
    ModelOutOfRange(i64),
    #[error("movement {0} is outside [-{max}, {max}]", max = MAX_MOVEMENT)]
    MovementOutOfRange(i64),
}

pub fn parse_name(line: &str) -> Result<RobotName, InputError> {
    RobotName::new(line)
}

pub fn parse_model(line: &str) -> Result<Model, InputError> {
    line.parse()
}

/// Parses one movement and checks it lies in `[-MAX_MOVEMENT, MAX_MOVEMENT]`.
pub fn parse_movement(token: &str) -> Result<i32, InputError> {
    let token = token.trim();
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;
    if value.unsigned_abs() > MAX_MOVEMENT as u64 {
        return Err(InputError::MovementOutOfRange(value));
    }
    Ok(value as i32)
}

/// Parses a batch of movements separated by commas and/or whitespace.
///
/// A blank line is an empty batch. The first invalid token fails the whole batch.
pub fn parse_movements(line: &str) -> Result<Vec<i32>, InputError> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_movement)
        .collect()
}

/// Line-oriented prompting that retries until input validates.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one raw line without its trailing newline. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompts until `parse` accepts a line, reporting each rejection.
    ///
    /// Fails only on I/O errors, with `UnexpectedEof` if input ends first.
    pub fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<T> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before a valid value was entered",
                ));
            };
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(%err, "rejected input");
                    writeln!(self.output, "*ERROR* {err}")?;
                }
            }
        }
    }

    pub fn name(&mut self) -> io::Result<RobotName> {
        self.prompt_until_valid("Enter the robot's name >> ", parse_name)
    }

    pub fn model(&mut self) -> io::Result<Model> {
        self.prompt_until_valid("Enter the robot's model (0-3) >> ", parse_model)
    }

    /// Prompts for a movement batch. `None` on a blank line or end of input.
    pub fn movements(&mut self) -> io::Result<Option<Vec<i32>>> {
        loop {
            let Some(line) = self.read_line("Movements (blank line to stop) >> ")? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(None);
            }
            match parse_movements(&line) {
                Ok(batch) => return Ok(Some(batch)),
                Err(err) => writeln!(self.output, "*ERROR* {err}")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
