//! # ygo-decklist
//!
//! Turns a scraped Yu-Gi-Oh! deck listing into a Yugipedia `{{Decklist}}`
//! template.
//!
//! ## Pipeline
//!
//! ```text
//! CardSource → classify → DeckDocument → TemplateRenderer → DecklistSink
//! ```
//!
//! 1. **Classify**: every card row gets exactly one category in its zone.
//!    Monster type lines are matched against ordered marker tables, first
//!    match wins ("Tuner / Effect" is a tuner monster).
//!
//! 2. **Aggregate**: cards are grouped into fixed-order buckets per zone
//!    (Main, Extra, Side) and totals are summed over quantities.
//!
//! 3. **Render**: buckets are written as template fields in a fixed order.
//!    Empty fields are left out entirely.
//!
//! Classification, aggregation and rendering are pure and never fail.
//! Missing names, bad quantities and unknown type lines fall back to
//! defaults.
//!
//! ## Example
//!
//! ```
//! use ygo_decklist::cards::CardRecord;
//! use ygo_decklist::core::Zone;
//! use ygo_decklist::deck::DeckDocument;
//! use ygo_decklist::render::render;
//!
//! let records = vec![CardRecord::monster(Zone::Main, "A", 3, "Effect Monster")];
//! let deck = DeckDocument::from_records(&records);
//! let markup = render(&deck, "Example", false);
//!
//! assert!(markup.contains("| total m = 3\n| effect monsters =\n* [[A]] x3\n"));
//! assert!(!markup.contains("normal monsters"));
//! ```
//!
//! ## Modules
//!
//! - `core`: Zones, configuration, errors, text clean-up
//! - `cards`: Card records, attributes, categories
//! - `classify`: Record → category
//! - `deck`: Category buckets and totals
//! - `render`: Template builder and renderer
//! - `io`: Source and sink boundaries
//! - `pipeline`: End-to-end export

pub mod core;
pub mod cards;
pub mod classify;
pub mod deck;
pub mod render;
pub mod io;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{DecklistConfig, DecklistError, Zone};

pub use crate::cards::{
    CardAttribute, CardRecord, Category, ExtraMonsterCategory, MonsterCategory, RawCardRecord,
    SpellTrapCategory,
};

pub use crate::classify::{classify, ClassifiedCard};

pub use crate::deck::{aggregate, DeckDocument, DeckTotals, ZoneBuckets};

pub use crate::render::{render, LinkStyle, TemplateBuilder, TemplateRenderer};

pub use crate::io::{CardSource, DeckPayload, DecklistSink, MemorySink};

pub use crate::pipeline::{build_decklist, export_deck, DecklistOutput};
