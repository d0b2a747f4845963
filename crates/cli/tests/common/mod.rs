// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for end-to-end session tests.
//!
//! The speech command is replaced with a small shell script that appends
//! `voice|phrase` lines to a log file, so tests can assert exactly what would
//! have been spoken.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

/// The two-word list used throughout the scenarios
pub const CAT_DOG: &str = r#"{"voice":"Alice","lists":{"a":["cat","dog"]}}"#;

/// Create a temporary dictation list file
pub fn write_word_list(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A fake speech command and the log it writes to
pub struct SpeechFixture {
    dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

impl SpeechFixture {
    /// Script that records `voice|phrase` and succeeds
    pub fn recording() -> Self {
        Self::with_body("printf '%s|%s\\n' \"$2\" \"$3\" >> \"$SPEECH_LOG\"\n")
    }

    /// Script that records, then exits with `code`
    pub fn failing(code: i32) -> Self {
        Self::with_body(&format!(
            "printf '%s|%s\\n' \"$2\" \"$3\" >> \"$SPEECH_LOG\"\nexit {}\n",
            code
        ))
    }

    fn with_body(body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("speak.sh");
        let log = dir.path().join("spoken.log");
        std::fs::write(&script, body).unwrap();
        Self { dir, script, log }
    }

    /// Value for `--speech-command`; run through `sh` so the script needs no
    /// exec permission
    pub fn command_line(&self) -> String {
        format!("sh {}", self.script.display())
    }

    /// Everything spoken so far as `voice|phrase` lines
    pub fn spoken(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Phrases spoken so far
    pub fn phrases(&self) -> Vec<String> {
        self.spoken()
            .iter()
            .filter_map(|line| line.split_once('|').map(|(_, phrase)| phrase.to_string()))
            .collect()
    }
}

/// A `dictation` command wired to the given list file and fake speaker
pub fn dictation(list: &NamedTempFile, speech: &SpeechFixture) -> Command {
    let mut cmd = Command::cargo_bin("dictation").unwrap();
    cmd.env_remove("DICTATION_LOG")
        .env("DICTATION_SPEECH_COMMAND", speech.command_line())
        .env("SPEECH_LOG", &speech.log)
        .arg("--dictation-list-file")
        .arg(list.path());
    cmd
}
