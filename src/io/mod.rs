//! Boundaries of the pipeline: where card rows come from and where the
//! rendered template goes.
//!
//! - `CardSource` / `DeckPayload` / `RecordList`: input
//! - `DecklistSink` / `MemorySink`: output
//! - `ensure_english_url`: deck page URL helper for extractors

pub mod sink;
pub mod source;
pub mod url;

pub use sink::{decklist_file_name, DecklistSink, MemorySink};
pub use source::{CardSource, DeckPayload, RecordList};
pub use url::ensure_english_url;
