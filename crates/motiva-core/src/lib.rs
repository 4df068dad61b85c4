pub mod analysis;
pub mod completion;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod sentiment;
pub mod session;
pub mod stage;

// Re-export common error type
pub use error::{MotivaError, Result};
