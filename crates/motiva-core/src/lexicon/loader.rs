//! JSONL lexicon loading.
//!
//! The on-disk format is one JSON object per line:
//!
//! ```text
//! {"statement": "thinking about", "stage": "contemplation"}
//! ```
//!
//! Blank lines are ignored. Any malformed line fails the whole load; the
//! degrade policy (`load_or_empty`) then falls back to an empty store so the
//! rest of the system keeps running with "no match" classifications.

use std::fs;
use std::path::Path;

use crate::error::{MotivaError, Result};

use super::model::LexiconEntry;
use super::store::Lexicon;

impl Lexicon {
    /// Parses a lexicon from JSONL text.
    pub fn from_jsonl_str(raw: &str) -> Result<Self> {
        let mut lexicon = Lexicon::new();
        for (line_no, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry: LexiconEntry = serde_json::from_str(line).map_err(|err| {
                MotivaError::lexicon(format!("invalid entry at line {}: {}", line_no + 1, err))
            })?;
            lexicon.insert(entry);
        }
        Ok(lexicon)
    }

    /// Reads and parses a JSONL lexicon file.
    ///
    /// # Errors
    ///
    /// Returns `MotivaError::Lexicon` when the file cannot be read or any
    /// line fails to parse.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            MotivaError::lexicon(format!("failed to read {}: {}", path.display(), err))
        })?;
        Self::from_jsonl_str(&raw)
    }

    /// Loads a lexicon file, degrading to an empty store on any failure.
    ///
    /// The failure is logged as a warning and every later classification
    /// simply finds no match, so a broken lexicon file never takes the
    /// conversation down.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_path(path) {
            Ok(lexicon) => {
                tracing::info!(
                    path = %path.display(),
                    entries = lexicon.len(),
                    "lexicon loaded"
                );
                lexicon
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    %err,
                    "lexicon load failed, continuing with an empty store"
                );
                Lexicon::new()
            }
        }
    }
}
