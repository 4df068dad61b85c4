//! Change-talk lexicon: model, ordered store, JSONL loading, and presets.
//!
//! The lexicon is the knowledge base of the classifier. It is loaded once at
//! startup and treated as immutable for the lifetime of a session; there is
//! no runtime editing surface.

pub mod loader;
pub mod model;
pub mod preset;
pub mod store;

pub use model::LexiconEntry;
pub use preset::default_lexicon;
pub use store::Lexicon;
