// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text-to-speech collaborators.

use parking_lot::Mutex;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Arc;
use thiserror::Error;

use crate::config::DEFAULT_SPEECH_COMMAND;

/// Errors from invoking a speech backend
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("failed to start speech command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("speech command '{program}' failed with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("speech failed for '{phrase}': {message}")]
    Rejected { phrase: String, message: String },
}

/// Something that can say a phrase aloud and blocks until it is done.
pub trait Speaker: Send + Sync {
    fn speak(&self, voice: &str, phrase: &str) -> Result<(), SpeechError>;
}

/// Speaker backed by an external process such as macOS `say`.
///
/// Invoked as `<program> [args..] -v <voice> <phrase>` with the parent's
/// stdio and environment.
#[derive(Clone, Debug)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    /// Create a speaker for a program with leading arguments
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line such as `say` or
    /// `espeak-wrapper --rate 150`. Blank input falls back to `say`.
    pub fn from_command_line(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(program) => Self::new(program, parts.collect()),
            None => Self::default(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for CommandSpeaker {
    fn default() -> Self {
        Self::new(DEFAULT_SPEECH_COMMAND, Vec::new())
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, voice: &str, phrase: &str) -> Result<(), SpeechError> {
        tracing::debug!(program = %self.program, voice, phrase, "invoking speech command");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg("-v")
            .arg(voice)
            .arg(phrase)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// A single recorded speech request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utterance {
    pub voice: String,
    pub phrase: String,
}

impl Utterance {
    pub fn new(voice: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            voice: voice.into(),
            phrase: phrase.into(),
        }
    }
}

/// In-memory speaker that records every request.
///
/// Clones share the same log, so a caller can keep a handle after moving the
/// speaker into a session.
#[derive(Clone, Debug, Default)]
pub struct RecordingSpeaker {
    utterances: Arc<Mutex<Vec<Utterance>>>,
    fail_on: Option<String>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail (after recording) whenever this phrase is spoken
    pub fn failing_on(mut self, phrase: impl Into<String>) -> Self {
        self.fail_on = Some(phrase.into());
        self
    }

    /// All requests so far, in order
    pub fn utterances(&self) -> Vec<Utterance> {
        self.utterances.lock().clone()
    }

    /// Phrases spoken so far, in order
    pub fn phrases(&self) -> Vec<String> {
        self.utterances
            .lock()
            .iter()
            .map(|u| u.phrase.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.utterances.lock().len()
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, voice: &str, phrase: &str) -> Result<(), SpeechError> {
        self.utterances.lock().push(Utterance::new(voice, phrase));
        match self.fail_on {
            Some(ref failing) if failing == phrase => Err(SpeechError::Rejected {
                phrase: phrase.to_string(),
                message: "simulated speech failure".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "speaker_tests.rs"]
mod tests;
