// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spoken dictation drills.
//!
//! Loads named word lists from a JSON file, speaks each word through an
//! external text-to-speech command, and walks through the list in one of
//! three session modes (classic, practice, quiz).
//!
//! ```json
//! { "voice": "Alice", "lists": { "animals": ["cat", "dog"] } }
//! ```

pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod menu;
pub mod output_diagnostic;
pub mod session;
pub mod speaker;
pub mod terminal;
pub mod time;
