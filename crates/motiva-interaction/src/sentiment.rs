//! Keyword-lexicon sentiment scoring.
//!
//! A compact lexicon-based polarity model in the usual shape: signed keyword
//! evidence, a negation flip, an intensity multiplier for booster words, and
//! a final clamp into `[-1.0, 1.0]`. It is deliberately simple; the engine
//! treats whatever sits behind the trait as opaque.

use motiva_core::sentiment::SentimentScorer;

const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "happy",
    "proud",
    "excited",
    "motivated",
    "love",
    "enjoy",
    "better",
    "confident",
    "energized",
    "glad",
    "awesome",
    "fantastic",
    "progress",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "tired",
    "stressed",
    "sad",
    "hate",
    "frustrated",
    "worse",
    "guilty",
    "anxious",
    "hopeless",
    "exhausted",
    "bored",
    "overwhelmed",
    "painful",
    "discouraged",
];

const INTENSITY_MODIFIERS: &[&str] = &["really", "very", " so ", "definitely", "absolutely"];

const NEGATION_WORDS: &[&str] = &["not ", "n't ", "never ", "no longer "];

/// Contribution of one keyword hit before boosting and clamping.
const HIT_WEIGHT: f64 = 0.25;

/// Extra multiplier per detected intensity modifier.
const INTENSITY_STEP: f64 = 0.3;

/// Keyword-based implementation of the sentiment collaborator.
#[derive(Debug, Clone, Default)]
pub struct KeywordSentimentScorer;

impl KeywordSentimentScorer {
    /// Creates a new scorer.
    pub fn new() -> Self {
        Self
    }

    fn count_hits(text: &str, words: &[&str]) -> usize {
        words.iter().filter(|word| text.contains(*word)).count()
    }
}

impl SentimentScorer for KeywordSentimentScorer {
    fn polarity(&self, text: &str) -> f64 {
        // Surrounding spaces make word-boundary-ish matching cheap for the
        // negation and modifier lists; " so " would otherwise hit word tails
        // like "also".
        let lowered = format!(" {} ", text.to_lowercase());

        let positive = Self::count_hits(&lowered, POSITIVE_KEYWORDS) as f64;
        let negative = Self::count_hits(&lowered, NEGATIVE_KEYWORDS) as f64;
        let mut score = (positive - negative) * HIT_WEIGHT;

        // A negation flips the polarity of the keyword evidence.
        if Self::count_hits(&lowered, NEGATION_WORDS) > 0 {
            score = -score;
        }

        let intensity =
            1.0 + Self::count_hits(&lowered, INTENSITY_MODIFIERS) as f64 * INTENSITY_STEP;
        score *= intensity;

        score.clamp(-1.0, 1.0)
    }
}
