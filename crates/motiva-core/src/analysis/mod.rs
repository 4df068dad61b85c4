//! Change-talk analysis: clause splitting, stage classification, scoring.

pub mod classifier;
pub mod counts;
pub mod scorer;

pub use classifier::{StageClassifier, split_clauses};
pub use counts::StageCounts;
pub use scorer::{ChangeTalkScore, score};
