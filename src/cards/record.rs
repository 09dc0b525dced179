//! Card records.
//!
//! `RawCardRecord` is what the extraction step hands over: every field is
//! optional because any of them can be missing from a card row.
//! `CardRecord` is the normalized form the classifier consumes. Normalizing
//! never fails; missing pieces fall back to defaults:
//!
//! - a missing or blank name becomes `"Name not found"`
//! - a missing, non-numeric, zero or negative quantity becomes `1`
//!
//! ## Example
//!
//! ```
//! use ygo_decklist::cards::{CardRecord, RawCardRecord, RawQuantity, NAME_NOT_FOUND};
//! use ygo_decklist::core::Zone;
//!
//! let raw = RawCardRecord {
//!     quantity: Some(RawQuantity::Text("x".into())),
//!     type_text: Some("Dragon / Effect".into()),
//!     ..Default::default()
//! };
//! let record = CardRecord::from_raw(Zone::Main, raw);
//!
//! assert_eq!(record.name, NAME_NOT_FOUND);
//! assert_eq!(record.quantity, 1);
//! ```

use serde::{Deserialize, Serialize};

use super::attributes::CardAttribute;
use crate::core::text::{clean_text, sanitize_card_name};
use crate::core::Zone;

/// Name given to cards whose name could not be read.
pub const NAME_NOT_FOUND: &str = "Name not found";

/// Quantity as observed: the page prints it as text, other sources may
/// already have a number.
///
/// Any other JSON value lands in `Other` so that one malformed row never
/// rejects the whole payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Count(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RawQuantity {
    /// Positive copy count, or `None` if the value is unusable.
    ///
    /// Text is read like a leading integer: surrounding whitespace is
    /// ignored and trailing non-digits are dropped (`"3x"` reads as 3).
    /// Fractional and out-of-range numbers keep their integer part.
    /// Booleans, nulls, arrays and objects are unusable.
    #[must_use]
    pub fn resolve(&self) -> Option<u32> {
        let value = match self {
            RawQuantity::Count(n) => *n,
            RawQuantity::Text(text) => parse_leading_int(text)?,
            RawQuantity::Other(value) => integer_part(value)?,
        };
        if value < 1 {
            return None;
        }
        Some(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<u32> for RawQuantity {
    fn from(n: u32) -> Self {
        RawQuantity::Count(i64::from(n))
    }
}

impl From<&str> for RawQuantity {
    fn from(s: &str) -> Self {
        RawQuantity::Text(s.to_string())
    }
}

// `as` saturates, so huge values clamp instead of wrapping.
fn integer_part(value: &serde_json::Value) -> Option<i64> {
    let number = value.as_f64().filter(|n| n.is_finite())?;
    Some(number.trunc() as i64)
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// One card row as extracted from the deck page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCardRecord {
    pub name: Option<String>,
    pub quantity: Option<RawQuantity>,
    /// Attribute badge (`SPELL`, `TRAP`, `DARK`, ...).
    pub attribute: Option<String>,
    /// Monster type line (e.g. `"Dragon / Tuner / Effect"`).
    pub type_text: Option<String>,
    /// Spell/trap icon text (e.g. `"Quick-Play"`).
    pub effect_text: Option<String>,
}

/// A normalized card observation.
///
/// Created once per card row and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card name, safe to place inside a wiki link.
    pub name: String,

    /// Number of copies. Always at least 1.
    pub quantity: u32,

    pub attribute: CardAttribute,

    /// Monster type line. Empty for spells and traps.
    pub type_text: String,

    /// Spell/trap subtype text, if the page showed one.
    pub effect_text: Option<String>,

    pub zone: Zone,
}

impl CardRecord {
    /// Create a record. A quantity of 0 is raised to 1.
    #[must_use]
    pub fn new(zone: Zone, name: impl Into<String>, quantity: u32, attribute: CardAttribute) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.max(1),
            attribute,
            type_text: String::new(),
            effect_text: None,
            zone,
        }
    }

    /// Create a monster record with its type line.
    #[must_use]
    pub fn monster(zone: Zone, name: impl Into<String>, quantity: u32, type_text: impl Into<String>) -> Self {
        Self::new(zone, name, quantity, CardAttribute::Monster).with_type_text(type_text)
    }

    /// Create a spell record.
    #[must_use]
    pub fn spell(zone: Zone, name: impl Into<String>, quantity: u32) -> Self {
        Self::new(zone, name, quantity, CardAttribute::Spell)
    }

    /// Create a trap record.
    #[must_use]
    pub fn trap(zone: Zone, name: impl Into<String>, quantity: u32) -> Self {
        Self::new(zone, name, quantity, CardAttribute::Trap)
    }

    /// Set the type line (builder pattern).
    #[must_use]
    pub fn with_type_text(mut self, type_text: impl Into<String>) -> Self {
        self.type_text = type_text.into();
        self
    }

    /// Set the spell/trap subtype text (builder pattern).
    #[must_use]
    pub fn with_effect_text(mut self, effect_text: impl Into<String>) -> Self {
        self.effect_text = Some(effect_text.into());
        self
    }

    /// Normalize a raw row observed in `zone`.
    #[must_use]
    pub fn from_raw(zone: Zone, raw: RawCardRecord) -> Self {
        let name = raw
            .name
            .as_deref()
            .map(|n| sanitize_card_name(&clean_text(n)).trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!(%zone, "card row without a name");
                NAME_NOT_FOUND.to_string()
            });

        let quantity = match raw.quantity.as_ref().and_then(RawQuantity::resolve) {
            Some(q) => q,
            None => {
                if raw.quantity.is_some() {
                    tracing::warn!(%zone, card = %name, raw = ?raw.quantity, "unusable quantity, counting 1");
                }
                1
            }
        };

        let attribute = raw
            .attribute
            .as_deref()
            .map(CardAttribute::from_text)
            .unwrap_or(CardAttribute::Monster);

        Self {
            name,
            quantity,
            attribute,
            type_text: raw.type_text.map(|t| t.trim().to_string()).unwrap_or_default(),
            effect_text: raw.effect_text,
            zone,
        }
    }
}
