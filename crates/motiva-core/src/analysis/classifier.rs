//! Clause-level stage classification.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;
use crate::stage::Stage;

use super::counts::StageCounts;

/// A run of sentence-terminal punctuation acts as one clause delimiter, so
/// "really?!" produces a single boundary rather than an empty clause.
static CLAUSE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("clause delimiter regex is valid"));

/// Splits an utterance into trimmed, non-empty clauses.
pub fn split_clauses(text: &str) -> Vec<&str> {
    CLAUSE_DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}

/// Matches clauses against a shared lexicon and counts stage evidence.
///
/// Resolution per clause is two-phase: an exact match on the whole clause
/// wins outright; otherwise the first stored entry whose statement occurs
/// inside the clause is taken. The scan order is the lexicon's load order,
/// which makes overlapping statements deterministic (first match wins).
/// A clause contributes at most one count.
#[derive(Debug, Clone)]
pub struct StageClassifier {
    lexicon: Arc<Lexicon>,
}

impl StageClassifier {
    /// Creates a classifier over a loaded lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Counts per-stage matches over the clauses of one utterance.
    pub fn classify(&self, utterance: &str) -> StageCounts {
        let mut counts = StageCounts::new();
        let lowered = utterance.to_lowercase();
        for clause in split_clauses(&lowered) {
            if let Some(stage) = self.match_clause(clause) {
                counts.record(stage);
            }
        }
        counts
    }

    /// Resolves one lowercased clause to a stage, if any entry matches.
    fn match_clause(&self, clause: &str) -> Option<Stage> {
        if let Some(stage) = self.lexicon.stage_of(clause) {
            return Some(stage);
        }
        self.lexicon
            .iter()
            .find(|entry| clause.contains(entry.statement.as_str()))
            .map(|entry| entry.stage)
    }
}
