//! Output boundary.
//!
//! A `DecklistSink` receives each finished template together with the file
//! name it should be stored under. Persisting it is up to the implementor.

use crate::core::text::sanitize_deck_name;
use crate::core::Result;

/// Receives rendered decklists.
pub trait DecklistSink {
    /// Store `contents` under `file_name`.
    fn write(&mut self, file_name: &str, contents: &str) -> Result<()>;
}

/// File name for a deck: `"<deck name> decklist.txt"`, with characters that
/// are invalid in file names removed.
#[must_use]
pub fn decklist_file_name(deck_name: &str) -> String {
    format!("{} decklist.txt", sanitize_deck_name(deck_name))
}

/// Keeps every written decklist in memory, in write order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    files: Vec<(String, String)>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Written `(file name, contents)` pairs.
    #[must_use]
    pub fn files(&self) -> &[(String, String)] {
        &self.files
    }

    /// Contents last written under `file_name`.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files
            .iter()
            .rev()
            .find(|(name, _)| name == file_name)
            .map(|(_, contents)| contents.as_str())
    }
}

impl DecklistSink for MemorySink {
    fn write(&mut self, file_name: &str, contents: &str) -> Result<()> {
        self.files.push((file_name.to_string(), contents.to_string()));
        Ok(())
    }
}
