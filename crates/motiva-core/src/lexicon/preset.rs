//! Built-in change-talk lexicon.
//!
//! Provides a system-defined default lexicon so the coach can classify
//! change talk for physical activity before any custom lexicon file is
//! configured.

use crate::stage::Stage;

use super::model::LexiconEntry;
use super::store::Lexicon;

/// Returns the built-in change-talk lexicon for physical-activity coaching.
///
/// Ordering matters: earlier entries win substring matching, so more
/// specific statements are listed before shorter fragments they contain.
pub fn default_lexicon() -> Lexicon {
    Lexicon::from_entries([
        // pre: sustain talk
        LexiconEntry::new("not ready", Stage::Pre),
        LexiconEntry::new("don't want to", Stage::Pre),
        LexiconEntry::new("can't exercise", Stage::Pre),
        LexiconEntry::new("no time for", Stage::Pre),
        LexiconEntry::new("too tired to", Stage::Pre),
        LexiconEntry::new("don't see the point", Stage::Pre),
        // contemplation: weighing up change
        LexiconEntry::new("want to exercise", Stage::Contemplation),
        LexiconEntry::new("thinking about", Stage::Contemplation),
        LexiconEntry::new("wish i could", Stage::Contemplation),
        LexiconEntry::new("should probably", Stage::Contemplation),
        LexiconEntry::new("been considering", Stage::Contemplation),
        LexiconEntry::new("might try", Stage::Contemplation),
        // planning: concrete preparation
        LexiconEntry::new("planning to", Stage::Planning),
        LexiconEntry::new("going to start", Stage::Planning),
        LexiconEntry::new("signed up for", Stage::Planning),
        LexiconEntry::new("made a plan", Stage::Planning),
        LexiconEntry::new("next week i will", Stage::Planning),
        // action: active change
        LexiconEntry::new("started walking", Stage::Action),
        LexiconEntry::new("started running", Stage::Action),
        LexiconEntry::new("been going to the gym", Stage::Action),
        LexiconEntry::new("this week i went", Stage::Action),
        LexiconEntry::new("i exercise", Stage::Action),
        // maintenance: sustaining change
        LexiconEntry::new("part of my routine", Stage::Maintenance),
        LexiconEntry::new("every day for", Stage::Maintenance),
        LexiconEntry::new("for months now", Stage::Maintenance),
        LexiconEntry::new("stuck with it", Stage::Maintenance),
        LexiconEntry::new("keep it up", Stage::Maintenance),
    ])
}
