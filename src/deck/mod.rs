//! # Deck Module
//!
//! The in-memory sequence of character cards shown by the viewer.
//!
//! ## Overview
//!
//! A [`Deck`] is an ordered list of [`CharacterRecord`]s. It is seeded from one
//! of the hardcoded [`Dataset`]s at startup and grows only through
//! [`Deck::add_entry`]. Insertion order is display order. Nothing is ever
//! removed, edited, or written to disk; the deck lives as long as the process.
//!
//! ## Record Format
//!
//! ```text
//! CharacterRecord { glyph: "学", gloss: Some("study") }
//! CharacterRecord { glyph: "山", gloss: None }
//! ```
//!
//! The glyph is never blank after trimming. Duplicate glyphs are allowed.

mod datasets;

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One character card: a glyph and an optional short gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub glyph: String,
    pub gloss: Option<String>,
}

impl CharacterRecord {
    pub fn new(glyph: impl Into<String>, gloss: Option<&str>) -> Self {
        Self {
            glyph: glyph.into(),
            gloss: gloss.map(str::to_string),
        }
    }
}

/// The built-in character lists a deck can be seeded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// Twelve glossed characters for a first greeting.
    Greetings,
    /// Elementary characters without glosses.
    Basics,
}

impl Dataset {
    /// Human-readable name shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Greetings => "汉字显示",
            Dataset::Basics => "常用汉字",
        }
    }

    /// Fresh copy of the dataset's records, in display order.
    pub fn records(&self) -> Vec<CharacterRecord> {
        let entries: &[(&str, Option<&str>)] = match self {
            Dataset::Greetings => datasets::GREETINGS,
            Dataset::Basics => datasets::BASICS,
        };

        entries
            .iter()
            .map(|(glyph, gloss)| CharacterRecord::new(*glyph, *gloss))
            .collect()
    }
}

/// Ordered, append-only list of character records.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    records: Vec<CharacterRecord>,
}

impl Deck {
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self { records }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.records())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Records in `range`, clamped to the deck bounds.
    pub fn slice(&self, range: Range<usize>) -> &[CharacterRecord] {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }

    /// Append a record built from raw form input.
    ///
    /// Both fields are trimmed. A blank glyph is ignored and `false` is
    /// returned; a blank gloss is stored as `None`.
    pub fn add_entry(&mut self, glyph: &str, gloss: &str) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return false;
        }

        let gloss = gloss.trim();
        let gloss = if gloss.is_empty() { None } else { Some(gloss) };

        self.records.push(CharacterRecord::new(glyph, gloss));
        true
    }
}
