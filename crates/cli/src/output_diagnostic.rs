// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing error and warning lines on stderr.
//!
//! Colored when stderr is a terminal, plain otherwise. Stdout is left to the
//! session display.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }

    /// ANSI SGR color code
    fn color(self) -> u8 {
        match self {
            Level::Error => 31,
            Level::Warning => 33,
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    print_diagnostic(Level::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    print_diagnostic(Level::Warning, msg);
}

fn print_diagnostic(level: Level, msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), level, msg, is_tty);
}

fn write_diagnostic<W: Write>(writer: &mut W, level: Level, msg: impl Display, is_terminal: bool) {
    let _ = if is_terminal {
        writeln!(
            writer,
            "\x1b[{}m{}: {}\x1b[0m",
            level.color(),
            level.label(),
            msg
        )
    } else {
        writeln!(writer, "{}: {}", level.label(), msg)
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
