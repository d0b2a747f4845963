// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive word menu.
//!
//! After a word is spoken the classic session can offer a numbered menu:
//!
//! ```text
//! [1] show word
//! [2] repeat word
//! [3] next word
//! ```
//!
//! Each line of input moves the menu through one [`Transition`]. Empty input
//! is a shortcut for "next word"; anything unrecognised simply re-renders the
//! menu.

/// A menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    ShowWord,
    RepeatWord,
    NextWord,
}

impl MenuChoice {
    /// All choices in display order
    pub const ALL: [MenuChoice; 3] = [
        MenuChoice::ShowWord,
        MenuChoice::RepeatWord,
        MenuChoice::NextWord,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ShowWord => "show word",
            MenuChoice::RepeatWord => "repeat word",
            MenuChoice::NextWord => "next word",
        }
    }

    /// Look up a 1-based menu selection
    pub fn from_selection(selection: usize) -> Option<Self> {
        selection
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// Result of feeding one input line to the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Print the word, then show the menu again
    Show,
    /// Speak the word again, then show the menu again
    Repeat,
    /// Leave the menu and move on
    Exit,
    /// Input not understood; show the menu again
    Retry,
}

impl From<MenuChoice> for Transition {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::ShowWord => Transition::Show,
            MenuChoice::RepeatWord => Transition::Repeat,
            MenuChoice::NextWord => Transition::Exit,
        }
    }
}

/// Decide what one line of input does
pub fn transition(line: &str) -> Transition {
    let line = line.trim();
    if line.is_empty() {
        return Transition::Exit;
    }
    line.parse::<usize>()
        .ok()
        .and_then(MenuChoice::from_selection)
        .map_or(Transition::Retry, Transition::from)
}

/// Menu lines as displayed
pub fn render() -> Vec<String> {
    MenuChoice::ALL
        .iter()
        .enumerate()
        .map(|(i, choice)| format!("[{}] {}", i + 1, choice.label()))
        .collect()
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
