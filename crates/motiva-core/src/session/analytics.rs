//! Per-turn analytics records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::ChangeTalkScore;
use crate::stage::Stage;

/// Analytics computed for one user turn. Never recomputed or mutated after
/// the turn is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnAnalytics {
    /// Normalized change-talk score; `None` when no clause matched.
    pub change_talk_score: Option<f64>,
    /// Stage share of the turn's matches, in percent. Empty when no clause
    /// matched.
    pub stage_percentages: BTreeMap<Stage, f64>,
}

impl TurnAnalytics {
    /// Wraps a scorer result, mapping the no-evidence case to `None`.
    pub fn from_score(score: ChangeTalkScore) -> Self {
        if score.has_evidence() {
            Self {
                change_talk_score: Some(score.normalized),
                stage_percentages: score.percentages,
            }
        } else {
            Self {
                change_talk_score: None,
                stage_percentages: BTreeMap::new(),
            }
        }
    }

    /// The score as a plain float, with the defined no-evidence value of 0.0.
    pub fn score_or_zero(&self) -> f64 {
        self.change_talk_score.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_evidence_maps_to_none() {
        let analytics = TurnAnalytics::from_score(ChangeTalkScore::no_evidence());
        assert_eq!(analytics.change_talk_score, None);
        assert!(analytics.stage_percentages.is_empty());
        assert_eq!(analytics.score_or_zero(), 0.0);
    }

    #[test]
    fn evidence_keeps_score_and_distribution() {
        let score = ChangeTalkScore {
            normalized: 0.375,
            percentages: BTreeMap::from([(Stage::Pre, 50.0), (Stage::Action, 50.0)]),
        };
        let analytics = TurnAnalytics::from_score(score);
        assert_eq!(analytics.change_talk_score, Some(0.375));
        assert_eq!(analytics.score_or_zero(), 0.375);
        assert_eq!(analytics.stage_percentages.len(), 2);
    }
}
