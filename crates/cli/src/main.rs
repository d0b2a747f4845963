// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dictation binary entry point.

use clap::Parser;

use dictation::cli::Cli;
use dictation::config::{DictationList, SessionConfig};
use dictation::logging;
use dictation::output_diagnostic::{print_error, print_warning};
use dictation::session::{SessionError, SessionRunner};
use dictation::speaker::CommandSpeaker;
use dictation::terminal::StdTerminal;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        print_warning(e);
    }

    if let Err(e) = run(&cli) {
        tracing::debug!(error = ?e, "session failed");
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), SessionError> {
    let config = SessionConfig::from_cli(cli)?;
    let list = DictationList::load(&cli.file)?;
    let mut deck = list.deck(&config.list)?;
    tracing::debug!(path = %cli.file.display(), voice = %list.voice, "loaded dictation list");

    if deck.is_empty() {
        print_warning(format_args!("list '{}' has no words", config.list));
    }

    let speaker = CommandSpeaker::from_command_line(&cli.speech_command);
    let mut runner = SessionRunner::new(speaker, StdTerminal::stdio(), list.voice.clone(), config);
    runner.run(&mut deck)?;
    Ok(())
}
