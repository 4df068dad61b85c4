//! Lexicon domain model.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// A stage-labelled statement used for change-talk matching.
///
/// Statements are matched case-insensitively against clauses; the store
/// lowercases and trims them once at insert time so the per-clause scan
/// stays a plain substring check.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Statement text to match against clauses
    pub statement: String,
    /// Stage this statement counts as evidence for
    pub stage: Stage,
}

impl LexiconEntry {
    /// Creates a new entry. Normalization happens on store insertion.
    pub fn new(statement: impl Into<String>, stage: Stage) -> Self {
        Self {
            statement: statement.into(),
            stage,
        }
    }
}
