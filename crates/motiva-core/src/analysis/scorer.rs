//! Change-talk scoring.

use std::collections::BTreeMap;

use crate::stage::{MAX_STAGE_WEIGHT, Stage};

use super::counts::StageCounts;

/// Aggregate change-talk result for a set of stage counts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeTalkScore {
    /// Count-weighted mean stage weight, rescaled to `[0, 1]`.
    pub normalized: f64,
    /// Share of matches per stage, in percent. Zero-count stages are absent,
    /// so the present values always sum to 100.
    pub percentages: BTreeMap<Stage, f64>,
}

impl ChangeTalkScore {
    /// The defined no-evidence result: zero score, empty distribution.
    pub fn no_evidence() -> Self {
        Self {
            normalized: 0.0,
            percentages: BTreeMap::new(),
        }
    }

    /// Whether any clause matched at all.
    pub fn has_evidence(&self) -> bool {
        !self.percentages.is_empty()
    }
}

/// Converts stage counts into a normalized score and a stage distribution.
///
/// Pure function of the count multiset; clause order never matters.
pub fn score(counts: &StageCounts) -> ChangeTalkScore {
    let total = counts.total();
    if total == 0 {
        return ChangeTalkScore::no_evidence();
    }

    let weighted_sum: u64 = counts
        .iter()
        .map(|(stage, count)| u64::from(stage.weight()) * count as u64)
        .sum();
    let normalized = weighted_sum as f64 / total as f64 / f64::from(MAX_STAGE_WEIGHT);

    let percentages = counts
        .iter()
        .map(|(stage, count)| (stage, 100.0 * count as f64 / total as f64))
        .collect();

    ChangeTalkScore {
        normalized,
        percentages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(stages: &[Stage]) -> StageCounts {
        let mut counts = StageCounts::new();
        for &stage in stages {
            counts.record(stage);
        }
        counts
    }

    #[test]
    fn no_matches_score_zero_with_empty_distribution() {
        let result = score(&StageCounts::new());
        assert_eq!(result.normalized, 0.0);
        assert!(result.percentages.is_empty());
        assert!(!result.has_evidence());
    }

    #[test]
    fn all_pre_matches_score_zero_but_carry_a_distribution() {
        let result = score(&counts(&[Stage::Pre, Stage::Pre]));
        assert_eq!(result.normalized, 0.0);
        assert!(result.has_evidence());
        assert_eq!(result.percentages[&Stage::Pre], 100.0);
    }

    #[test]
    fn all_maintenance_matches_score_one() {
        let result = score(&counts(&[Stage::Maintenance, Stage::Maintenance]));
        assert_eq!(result.normalized, 1.0);
    }

    #[test]
    fn mixed_pre_and_action_scores_three_eighths() {
        let result = score(&counts(&[Stage::Pre, Stage::Action]));
        assert_eq!(result.normalized, 0.375);
        assert_eq!(result.percentages.len(), 2);
        assert_eq!(result.percentages[&Stage::Pre], 50.0);
        assert_eq!(result.percentages[&Stage::Action], 50.0);
    }

    #[test]
    fn zero_count_stages_are_omitted_from_percentages() {
        let result = score(&counts(&[Stage::Contemplation]));
        assert_eq!(result.percentages.len(), 1);
        assert!(!result.percentages.contains_key(&Stage::Action));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let result = score(&counts(&[
            Stage::Pre,
            Stage::Contemplation,
            Stage::Contemplation,
        ]));
        let sum: f64 = result.percentages.values().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_order_invariant() {
        let forward = score(&counts(&[Stage::Pre, Stage::Planning, Stage::Action]));
        let backward = score(&counts(&[Stage::Action, Stage::Planning, Stage::Pre]));
        assert_eq!(forward, backward);
    }
}
