// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_DELAY_SECS, DEFAULT_LIST_FILE, DEFAULT_SPEECH_COMMAND};

/// Spoken dictation drills from a JSON word list
#[derive(Parser, Clone, Debug)]
#[command(name = "dictation", version, about = "Spoken dictation drills and quizzes")]
pub struct Cli {
    /// JSON file with a voice and named word lists
    #[arg(
        short = 'f',
        long = "dictation-list-file",
        visible_aliases = ["in-file", "in"],
        value_name = "PATH",
        default_value = DEFAULT_LIST_FILE,
        global = true
    )]
    pub file: PathBuf,

    /// Name of the word list to use
    #[arg(short = 'l', long, value_name = "LIST", global = true)]
    pub list: Option<String>,

    /// Seconds to wait between words (between repetitions in quiz mode)
    #[arg(short = 'd', long, value_name = "SECONDS", default_value_t = DEFAULT_DELAY_SECS, global = true)]
    pub delay: u64,

    /// Prompt between words instead of waiting; overrides --delay
    #[arg(short = 'i', long, global = true)]
    pub interactive: bool,

    /// Speech program, optionally followed by leading arguments.
    /// Invoked as `<command> -v <voice> <word>`.
    #[arg(
        long,
        value_name = "COMMAND",
        env = "DICTATION_SPEECH_COMMAND",
        default_value = DEFAULT_SPEECH_COMMAND,
        global = true
    )]
    pub speech_command: String,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Session styles. Without one, words are spoken in random order.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Go through the list in order, showing each word; type `repeat` to hear it again
    #[command(visible_alias = "p", alias = "learn")]
    Practice,

    /// Random order, each word spoken three times before it is revealed
    #[command(visible_alias = "q", alias = "test")]
    Quiz,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
