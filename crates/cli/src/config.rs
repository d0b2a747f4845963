// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word list file and session configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::cli::{Cli, Command};
use crate::deck::WordDeck;

/// Word list file read when none is given
pub const DEFAULT_LIST_FILE: &str = "dictation_list.json";
/// Seconds between words (or between quiz repetitions)
pub const DEFAULT_DELAY_SECS: u64 = 3;
/// Speech program invoked when none is configured
pub const DEFAULT_SPEECH_COMMAND: &str = "say";

/// Errors loading the word list or resolving a session from it
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read dictation list '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dictation list '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid list name '{name}' (available: {})", available_lists(.available))]
    UnknownList {
        name: String,
        available: Vec<String>,
    },

    #[error("missing required option '--list <LIST>'")]
    MissingList,
}

fn available_lists(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// Contents of a dictation list file
///
/// ```json
/// { "voice": "Alice", "lists": { "animals": ["cat", "dog"] } }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DictationList {
    /// Voice identifier handed to the speech command
    pub voice: String,

    /// Named word lists
    pub lists: BTreeMap<String, Vec<String>>,
}

impl DictationList {
    /// Load a dictation list from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse a dictation list from JSON text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a fresh deck from the named list
    pub fn deck(&self, name: &str) -> Result<WordDeck, ConfigError> {
        self.lists
            .get(name)
            .map(|words| WordDeck::new(words.clone()))
            .ok_or_else(|| ConfigError::UnknownList {
                name: name.to_string(),
                available: self.list_names(),
            })
    }

    /// List names in sorted order
    pub fn list_names(&self) -> Vec<String> {
        self.lists.keys().cloned().collect()
    }
}

/// How words are ordered and presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Random order, spoken once, optional interactive menu
    #[default]
    Classic,
    /// Original order, word shown, repeat on request
    Practice,
    /// Random order, spoken three times, revealed afterwards
    Quiz,
}

/// Immutable settings for one session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub list: String,
    pub mode: SessionMode,
    pub interactive: bool,
    pub delay: Duration,
}

impl SessionConfig {
    pub fn new(list: impl Into<String>, mode: SessionMode) -> Self {
        Self {
            list: list.into(),
            mode,
            interactive: false,
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
        }
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Resolve session settings from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let list = cli.list.clone().ok_or(ConfigError::MissingList)?;
        let mode = match cli.command {
            None => SessionMode::Classic,
            Some(Command::Practice) => SessionMode::Practice,
            Some(Command::Quiz) => SessionMode::Quiz,
        };
        Ok(Self::new(list, mode)
            .with_interactive(cli.interactive)
            .with_delay(Duration::from_secs(cli.delay)))
    }

    /// Delay actually used for pacing.
    ///
    /// Interactive sessions are paced by the user, so `interactive` always
    /// overrides the configured delay with zero.
    pub fn effective_delay(&self) -> Duration {
        if self.interactive {
            Duration::ZERO
        } else {
            self.delay
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
