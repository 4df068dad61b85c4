//! Stage-of-change types for change-talk classification.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Highest stage weight; divides weighted means into the `[0, 1]` range.
pub const MAX_STAGE_WEIGHT: u32 = 4;

/// A stage of behaviour change, ordered by increasing commitment.
///
/// The ordering is part of the scoring contract: each stage carries a fixed
/// weight from 0 (`Pre`) to 4 (`Maintenance`), and aggregate scores are
/// weighted means over matched stages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Not considering change; sustain talk.
    Pre,
    /// Weighing up change without commitment.
    Contemplation,
    /// Preparing concrete steps.
    Planning,
    /// Actively changing behaviour.
    Action,
    /// Sustaining an established change.
    Maintenance,
}

impl Stage {
    /// Scoring weight for this stage.
    pub fn weight(self) -> u32 {
        match self {
            Stage::Pre => 0,
            Stage::Contemplation => 1,
            Stage::Planning => 2,
            Stage::Action => 3,
            Stage::Maintenance => 4,
        }
    }
}
