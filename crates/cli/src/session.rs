// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session runner: presents every word of a deck once.
//!
//! All three session modes share one loop shape: draw a word, speak it, then
//! either pace with a delay or wait for the user.
//!
//! - **Classic**: random order, spoken once, optional interactive menu, then
//!   the configured delay.
//! - **Practice**: original order, the word is shown and spoken, and the user
//!   may type `repeat` (or `again`) to hear it again.
//! - **Quiz**: random order, spoken [`QUIZ_REPETITIONS`] times with the
//!   configured delay between repetitions, then revealed and confirmed.
//!
//! Every error is fatal to the session and propagated unchanged.

use std::time::Duration;
use thiserror::Error;

use crate::config::{ConfigError, SessionConfig, SessionMode};
use crate::deck::{DeckError, WordDeck};
use crate::menu::{self, Transition};
use crate::speaker::{Speaker, SpeechError};
use crate::terminal::{Terminal, TerminalError};
use crate::time::{Clock, ClockHandle};

/// Process exit codes
pub mod exit_codes {
    /// Every word presented
    pub const SUCCESS: i32 = 0;
    /// Any file, list, input or speech failure
    pub const ERROR: i32 = 1;
}

/// Times each word is spoken in quiz mode
pub const QUIZ_REPETITIONS: usize = 3;
/// Pause between revealing a quiz word and prompting
pub const REVEAL_PAUSE: Duration = Duration::from_millis(200);
/// How long "show word" leaves the word on screen before the menu returns
pub const SHOW_PAUSE: Duration = Duration::from_secs(1);
/// Practice inputs (trimmed, case-insensitive) that replay the current word
pub const REPEAT_TOKENS: [&str; 2] = ["repeat", "again"];

const PRACTICE_PROMPT: &str = "Press Enter for the next word, or type 'repeat' to hear it again: ";
const QUIZ_PROMPT: &str = "Press Enter for the next word: ";

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),
}

impl SessionError {
    /// Exit code to report for this error
    pub fn exit_code(&self) -> i32 {
        exit_codes::ERROR
    }
}

/// Whether a practice answer asks to hear the word again
pub fn is_repeat_request(line: &str) -> bool {
    let line = line.trim();
    REPEAT_TOKENS
        .iter()
        .any(|token| line.eq_ignore_ascii_case(token))
}

/// Drives one pass over a deck.
pub struct SessionRunner<S, T> {
    speaker: S,
    terminal: T,
    clock: ClockHandle,
    voice: String,
    config: SessionConfig,
}

impl<S: Speaker, T: Terminal> SessionRunner<S, T> {
    pub fn new(speaker: S, terminal: T, voice: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            speaker,
            terminal,
            clock: ClockHandle::system(),
            voice: voice.into(),
            config,
        }
    }

    /// Use a specific clock for pacing
    pub fn with_clock(mut self, clock: ClockHandle) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Present every word in the deck. Returns how many were presented.
    pub fn run(&mut self, deck: &mut WordDeck) -> Result<usize, SessionError> {
        tracing::info!(
            list = %self.config.list,
            mode = ?self.config.mode,
            words = deck.remaining(),
            interactive = self.config.interactive,
            delay_secs = self.config.effective_delay().as_secs(),
            "starting session"
        );

        let presented = match self.config.mode {
            SessionMode::Classic => self.run_classic(deck)?,
            SessionMode::Practice => self.run_practice(deck)?,
            SessionMode::Quiz => self.run_quiz(deck)?,
        };

        tracing::info!(presented, "session complete");
        Ok(presented)
    }

    fn run_classic(&mut self, deck: &mut WordDeck) -> Result<usize, SessionError> {
        let mut presented = 0;
        while !deck.is_empty() {
            self.terminal.clear_screen()?;
            let word = deck.draw_random()?;
            tracing::debug!(remaining = deck.remaining(), "drew word");
            self.say(&word)?;
            presented += 1;

            if self.config.interactive {
                self.run_menu(&word)?;
            }
            if !deck.is_empty() {
                self.clock.sleep(self.config.effective_delay());
            }
        }
        Ok(presented)
    }

    fn run_practice(&mut self, deck: &mut WordDeck) -> Result<usize, SessionError> {
        let mut presented = 0;
        self.terminal.clear_screen()?;
        while !deck.is_empty() {
            let word = deck.draw_sequential()?;
            tracing::debug!(remaining = deck.remaining(), "drew word");
            self.terminal.write_line(&word)?;
            self.say(&word)?;
            presented += 1;

            loop {
                self.terminal.write_prompt(PRACTICE_PROMPT)?;
                let answer = self.terminal.read_line()?;
                self.terminal.clear_previous_line()?;
                if !is_repeat_request(&answer) {
                    break;
                }
                self.say(&word)?;
            }
        }
        Ok(presented)
    }

    fn run_quiz(&mut self, deck: &mut WordDeck) -> Result<usize, SessionError> {
        let mut presented = 0;
        self.terminal.clear_screen()?;
        while !deck.is_empty() {
            let word = deck.draw_random()?;
            tracing::debug!(remaining = deck.remaining(), "drew word");

            for repetition in 1..=QUIZ_REPETITIONS {
                if repetition > 1 {
                    self.clock.sleep(self.config.effective_delay());
                }
                self.terminal
                    .write_line(&format!("({}/{})", repetition, QUIZ_REPETITIONS))?;
                self.say(&word)?;
            }
            presented += 1;

            self.terminal.write_line(&format!("Word: {}", word))?;
            self.clock.sleep(REVEAL_PAUSE);
            self.terminal.write_prompt(QUIZ_PROMPT)?;
            self.terminal.read_line()?;
            self.terminal.clear_previous_line()?;
        }
        Ok(presented)
    }

    /// Show the three-choice menu until the user moves on
    fn run_menu(&mut self, word: &str) -> Result<(), SessionError> {
        loop {
            for line in menu::render() {
                self.terminal.write_line(&line)?;
            }
            let input = self.terminal.read_line()?;
            match menu::transition(&input) {
                Transition::Exit => return Ok(()),
                Transition::Show => {
                    self.terminal.clear_screen()?;
                    self.terminal.write_line(word)?;
                    self.clock.sleep(SHOW_PAUSE);
                }
                Transition::Repeat => {
                    self.terminal.clear_screen()?;
                    self.say(word)?;
                }
                Transition::Retry => {
                    tracing::debug!(input = %input, "ignoring unrecognised menu input");
                }
            }
        }
    }

    fn say(&self, word: &str) -> Result<(), SpeechError> {
        self.speaker.speak(&self.voice, word)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
