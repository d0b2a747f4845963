// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Working word list for a single session.

use rand::Rng;
use thiserror::Error;

/// Errors raised when drawing from a deck
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("no words left in the deck")]
    Empty,
}

/// Mutable, ordered deck of words. Words only ever leave the deck.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordDeck {
    words: Vec<String>,
}

impl WordDeck {
    /// Create a deck from an ordered list of words
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Remove and return the first word
    pub fn draw_sequential(&mut self) -> Result<String, DeckError> {
        if self.words.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.words.remove(0))
    }

    /// Remove and return a uniformly chosen word.
    ///
    /// Uses the thread-local generator, which is a CSPRNG seeded from the OS,
    /// so quiz orderings are not reproducible across runs.
    pub fn draw_random(&mut self) -> Result<String, DeckError> {
        self.draw_random_with(&mut rand::rng())
    }

    /// Remove and return a uniformly chosen word using the given generator
    pub fn draw_random_with<R: Rng>(&mut self, rng: &mut R) -> Result<String, DeckError> {
        if self.words.is_empty() {
            return Err(DeckError::Empty);
        }
        let index = rng.random_range(0..self.words.len());
        Ok(self.words.remove(index))
    }

    /// Number of words left
    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words left, in deck order
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<String>> for WordDeck {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

#[cfg(test)]
#[path = "deck_tests.rs"]
mod tests;
