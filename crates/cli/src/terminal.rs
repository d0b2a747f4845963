// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented terminal access for sessions.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// ANSI: cursor home, then erase the whole screen
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// ANSI: cursor up one line, erase it, return to column 0
pub const CLEAR_PREVIOUS_LINE: &str = "\x1b[1A\x1b[2K\r";

/// Errors from terminal I/O
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to read input: unexpected end of input")]
    UnexpectedEof,

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Terminal operations a session needs.
pub trait Terminal {
    fn clear_screen(&mut self) -> Result<(), TerminalError>;

    /// Erase the line above the cursor (the answered prompt)
    fn clear_previous_line(&mut self) -> Result<(), TerminalError>;

    fn write_line(&mut self, text: &str) -> Result<(), TerminalError>;

    /// Write text without a newline and flush, leaving the cursor after it
    fn write_prompt(&mut self, text: &str) -> Result<(), TerminalError>;

    /// Block for one line of input, without its line terminator
    fn read_line(&mut self) -> Result<String, TerminalError>;
}

/// Terminal over a reader/writer pair.
#[derive(Debug)]
pub struct StdTerminal<R, W> {
    reader: R,
    writer: W,
}

impl StdTerminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn write_raw(&mut self, text: &str) -> Result<(), TerminalError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(TerminalError::Write)
    }
}

impl<R: BufRead, W: Write> Terminal for StdTerminal<R, W> {
    fn clear_screen(&mut self) -> Result<(), TerminalError> {
        self.write_raw(CLEAR_SCREEN)
    }

    fn clear_previous_line(&mut self) -> Result<(), TerminalError> {
        self.write_raw(CLEAR_PREVIOUS_LINE)
    }

    fn write_line(&mut self, text: &str) -> Result<(), TerminalError> {
        writeln!(self.writer, "{}", text)
            .and_then(|()| self.writer.flush())
            .map_err(TerminalError::Write)
    }

    fn write_prompt(&mut self, text: &str) -> Result<(), TerminalError> {
        self.write_raw(text)
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(TerminalError::Read)?;
        if read == 0 {
            return Err(TerminalError::UnexpectedEof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Something that happened on a `ScriptedTerminal`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    ClearScreen,
    ClearPreviousLine,
    Line(String),
    Prompt(String),
    Input(String),
}

/// Terminal that replays queued input lines and records every event.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    events: Vec<TerminalEvent>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[TerminalEvent] {
        &self.events
    }

    /// Text written with `write_line`, in order
    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TerminalEvent::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of events matching `event`
    pub fn count(&self, event: &TerminalEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    /// Input lines not yet consumed
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn clear_screen(&mut self) -> Result<(), TerminalError> {
        self.events.push(TerminalEvent::ClearScreen);
        Ok(())
    }

    fn clear_previous_line(&mut self) -> Result<(), TerminalError> {
        self.events.push(TerminalEvent::ClearPreviousLine);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), TerminalError> {
        self.events.push(TerminalEvent::Line(text.to_string()));
        Ok(())
    }

    fn write_prompt(&mut self, text: &str) -> Result<(), TerminalError> {
        self.events.push(TerminalEvent::Prompt(text.to_string()));
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        let line = self.input.pop_front().ok_or(TerminalError::UnexpectedEof)?;
        self.events.push(TerminalEvent::Input(line.clone()));
        Ok(line)
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
