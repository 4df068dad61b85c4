//! Per-stage match counts.

use std::collections::BTreeMap;

use crate::stage::Stage;

/// A multiset of stage matches accumulated over clauses.
///
/// Only stages with at least one match are stored, which is what lets the
/// scorer omit zero-count stages from percentage breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageCounts {
    counts: BTreeMap<Stage, usize>,
}

impl StageCounts {
    /// Creates an empty count set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one match for `stage`.
    pub fn record(&mut self, stage: Stage) {
        *self.counts.entry(stage).or_insert(0) += 1;
    }

    /// Matches recorded for `stage`.
    pub fn get(&self, stage: Stage) -> usize {
        self.counts.get(&stage).copied().unwrap_or(0)
    }

    /// Total matches across all stages.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Folds another count set into this one.
    pub fn merge(&mut self, other: &StageCounts) {
        for (&stage, &count) in &other.counts {
            *self.counts.entry(stage).or_insert(0) += count;
        }
    }

    /// Iterates `(stage, count)` pairs in stage order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, usize)> + '_ {
        self.counts.iter().map(|(&stage, &count)| (stage, count))
    }

    /// Whether no matches were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
