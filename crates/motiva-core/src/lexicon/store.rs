//! Ordered lexicon store.

use std::collections::HashMap;

use crate::stage::Stage;

use super::model::LexiconEntry;

/// An ordered mapping of lowercased statements to stages.
///
/// Entries keep their insertion order, and that order defines substring-match
/// precedence in the classifier (first match wins). Re-inserting an existing
/// statement overwrites its stage in place, so precedence never shifts when a
/// later source redefines a statement.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    positions: HashMap<String, usize>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lexicon from entries, preserving iteration order.
    pub fn from_entries(entries: impl IntoIterator<Item = LexiconEntry>) -> Self {
        let mut lexicon = Self::new();
        for entry in entries {
            lexicon.insert(entry);
        }
        lexicon
    }

    /// Inserts one entry, lowercasing and trimming its statement.
    ///
    /// Empty statements are skipped. A duplicate statement updates the stored
    /// stage without moving the entry.
    pub fn insert(&mut self, entry: LexiconEntry) {
        let statement = entry.statement.trim().to_lowercase();
        if statement.is_empty() {
            tracing::debug!("skipping lexicon entry with empty statement");
            return;
        }
        match self.positions.get(&statement) {
            Some(&position) => self.entries[position].stage = entry.stage,
            None => {
                self.positions.insert(statement.clone(), self.entries.len());
                self.entries.push(LexiconEntry {
                    statement,
                    stage: entry.stage,
                });
            }
        }
    }

    /// Exact lookup by statement text. The query must already be lowercased.
    pub fn stage_of(&self, statement: &str) -> Option<Stage> {
        self.positions
            .get(statement)
            .map(|&position| self.entries[position].stage)
    }

    /// Iterates entries in precedence (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
