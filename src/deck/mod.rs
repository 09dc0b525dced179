//! Deck aggregation: ordered category buckets and per-zone totals.
//!
//! ## Key Types
//!
//! - `CategoryBuckets`: one append-only list per category, template order
//! - `DeckSection`: Main/Side Deck (monster buckets, spells, traps)
//! - `ExtraSection`: Extra Deck (monster buckets)
//! - `DeckDocument`: the three zones of one deck
//! - `DeckTotals`: the totals the template prints

pub mod buckets;
pub mod document;

pub use buckets::{total_quantity, Bucket, CardList, CategoryBuckets};
pub use document::{
    aggregate, DeckDocument, DeckSection, DeckTotals, ExtraSection, SectionTotals, ZoneBuckets,
};
