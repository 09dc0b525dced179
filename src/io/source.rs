//! Input boundary.
//!
//! A `CardSource` supplies the deck title and the card rows, zone by zone,
//! in page order. How the rows were obtained is up to the implementor.
//! `DeckPayload` is the JSON shape produced by the page extraction step:
//!
//! ```json
//! {
//!   "name": "Snake-Eye Fire King",
//!   "main":  [{ "name": "Snake-Eye Ash", "quantity": "3", "attribute": "FIRE", "typeText": "Pyro / Effect" }],
//!   "extra": [{ "name": "S:P Little Knight", "quantity": "1", "attribute": "DARK", "typeText": "Warrior / Link / Effect" }],
//!   "side":  []
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardRecord, RawCardRecord};
use crate::core::{Result, Zone};

/// Supplies the card rows of one deck.
pub trait CardSource {
    /// Deck title, if the page had one.
    fn deck_name(&self) -> Option<&str>;

    /// Normalized card rows: Main, then Extra, then Side, each in page order.
    fn records(&self) -> Vec<CardRecord>;
}

/// Extracted deck page, as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckPayload {
    pub name: Option<String>,
    pub main: Vec<RawCardRecord>,
    pub extra: Vec<RawCardRecord>,
    pub side: Vec<RawCardRecord>,
}

impl DeckPayload {
    /// Parse an extraction payload.
    pub fn from_json(text: &str) -> Result<Self> {
        let payload: DeckPayload = serde_json::from_str(text)?;
        tracing::debug!(
            main = payload.main.len(),
            extra = payload.extra.len(),
            side = payload.side.len(),
            "parsed deck payload"
        );
        Ok(payload)
    }

    /// Raw rows of one zone.
    #[must_use]
    pub fn rows(&self, zone: Zone) -> &[RawCardRecord] {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }
}

impl CardSource for DeckPayload {
    fn deck_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn records(&self) -> Vec<CardRecord> {
        Zone::ALL
            .iter()
            .flat_map(|&zone| {
                self.rows(zone)
                    .iter()
                    .map(move |raw| CardRecord::from_raw(zone, raw.clone()))
            })
            .collect()
    }
}

/// Already normalized records, e.g. from another extractor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordList {
    pub name: Option<String>,
    pub records: Vec<CardRecord>,
}

impl RecordList {
    #[must_use]
    pub fn new(name: Option<String>, records: Vec<CardRecord>) -> Self {
        Self { name, records }
    }
}

impl CardSource for RecordList {
    fn deck_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn records(&self) -> Vec<CardRecord> {
        self.records.clone()
    }
}
