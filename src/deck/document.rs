//! Deck aggregation.
//!
//! `DeckDocument` groups classified cards by zone and category:
//!
//! - `main` / `side`: `DeckSection` (monster buckets + flat spell and trap lists)
//! - `extra`: `ExtraSection` (Extra monster buckets)
//!
//! Cards keep their source order inside each bucket and are never merged,
//! even when two rows carry the same name. Totals are sums of quantities.
//!
//! ## Example
//!
//! ```
//! use ygo_decklist::cards::CardRecord;
//! use ygo_decklist::core::Zone;
//! use ygo_decklist::deck::DeckDocument;
//!
//! let records = vec![
//!     CardRecord::monster(Zone::Main, "Ash Blossom & Joyous Spring", 3, "Zombie / Tuner / Effect"),
//!     CardRecord::spell(Zone::Main, "Pot of Prosperity", 2),
//!     CardRecord::monster(Zone::Extra, "Baronne de Fleur", 1, "Plant / Synchro / Tuner / Effect"),
//! ];
//! let deck = DeckDocument::from_records(&records);
//! let totals = deck.totals();
//!
//! assert_eq!(totals.total_monsters, 3);
//! assert_eq!(totals.total_spells, 2);
//! assert_eq!(totals.total_extra_monsters, 1);
//! ```

use serde::{Deserialize, Serialize};

use super::buckets::{total_quantity, CardList, CategoryBuckets};
use crate::cards::{
    CardRecord, Category, ExtraMonsterCategory, MonsterCategory, SectionCategory, SpellTrapKind,
};
use crate::classify::{classify, ClassifiedCard};
use crate::core::{DecklistError, Zone};

/// Copy totals of a Main or Side Deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTotals {
    pub monsters: u64,
    pub spells: u64,
    pub traps: u64,
}

/// Totals printed in the template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckTotals {
    /// Main Deck monsters (`total m`).
    pub total_monsters: u64,
    /// Extra Deck monsters (`total me`).
    pub total_extra_monsters: u64,
    /// Main Deck spells (`total s`).
    pub total_spells: u64,
    /// Main Deck traps (`total t`).
    pub total_traps: u64,
}

enum Slot {
    Monster(MonsterCategory),
    Spells,
    Traps,
}

/// Main or Side Deck contents.
///
/// Deserializing re-routes every card through `push`, so a stored section
/// can never hold a card of another zone or a misplaced spell or trap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckSectionRepr")]
pub struct DeckSection {
    zone: Zone,
    pub monsters: CategoryBuckets<MonsterCategory>,
    pub spells: CardList,
    pub traps: CardList,
}

impl DeckSection {
    /// Create an empty section for `zone` (Main or Side).
    #[must_use]
    pub fn new(zone: Zone) -> Self {
        debug_assert!(zone.has_spell_trap_lists(), "{zone} has no spell/trap lists");
        Self {
            zone,
            monsters: CategoryBuckets::new(),
            spells: CardList::new(),
            traps: CardList::new(),
        }
    }

    #[must_use]
    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// Add a card of this section's zone.
    ///
    /// Returns the card unchanged if it belongs to another zone.
    pub fn push(&mut self, card: ClassifiedCard) -> Result<(), ClassifiedCard> {
        let slot = match (&card.category, self.zone) {
            (Category::Main(c), Zone::Main) | (Category::Side(c), Zone::Side) => match c {
                SectionCategory::Monster(m) => Slot::Monster(*m),
                SectionCategory::SpellTrap(st) => match st.kind {
                    SpellTrapKind::Spell => Slot::Spells,
                    SpellTrapKind::Trap => Slot::Traps,
                },
            },
            _ => return Err(card),
        };
        match slot {
            Slot::Monster(c) => self.monsters.push(c, card),
            Slot::Spells => self.spells.push(card),
            Slot::Traps => self.traps.push(card),
        }
        Ok(())
    }

    #[must_use]
    pub fn totals(&self) -> SectionTotals {
        SectionTotals {
            monsters: self.monsters.total(),
            spells: total_quantity(&self.spells),
            traps: total_quantity(&self.traps),
        }
    }

    /// Number of card entries (rows, not copies).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.monsters.entry_count() + self.spells.len() + self.traps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

#[derive(Deserialize)]
struct DeckSectionRepr {
    zone: Zone,
    monsters: CategoryBuckets<MonsterCategory>,
    spells: CardList,
    traps: CardList,
}

impl TryFrom<DeckSectionRepr> for DeckSection {
    type Error = DecklistError;

    fn try_from(repr: DeckSectionRepr) -> Result<Self, Self::Error> {
        if !repr.zone.has_spell_trap_lists() {
            return Err(DecklistError::Document(format!(
                "{} cannot be stored as a Main or Side section",
                repr.zone
            )));
        }
        let zone = repr.zone;
        let mut section = Self::new(zone);
        let cards = repr.monsters.into_cards().chain(repr.spells).chain(repr.traps);
        for card in cards {
            section.push(card).map_err(|card| misplaced(&card, zone))?;
        }
        Ok(section)
    }
}

fn misplaced(card: &ClassifiedCard, zone: Zone) -> DecklistError {
    DecklistError::Document(format!(
        "{} belongs to the {}, not the {zone}",
        card.name,
        card.zone()
    ))
}

/// Extra Deck contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExtraSectionRepr")]
pub struct ExtraSection {
    pub monsters: CategoryBuckets<ExtraMonsterCategory>,
}

#[derive(Deserialize)]
struct ExtraSectionRepr {
    monsters: CategoryBuckets<ExtraMonsterCategory>,
}

impl TryFrom<ExtraSectionRepr> for ExtraSection {
    type Error = DecklistError;

    fn try_from(repr: ExtraSectionRepr) -> Result<Self, Self::Error> {
        let mut extra = Self::new();
        for card in repr.monsters.into_cards() {
            extra.push(card).map_err(|card| misplaced(&card, Zone::Extra))?;
        }
        Ok(extra)
    }
}

impl ExtraSection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an Extra Deck card.
    ///
    /// Returns the card unchanged if it belongs to another zone.
    pub fn push(&mut self, card: ClassifiedCard) -> Result<(), ClassifiedCard> {
        match card.category.extra_monster() {
            Some(c) => {
                self.monsters.push(c, card);
                Ok(())
            }
            None => Err(card),
        }
    }

    /// Total Extra Deck copies.
    #[must_use]
    pub fn total_monsters(&self) -> u64 {
        self.monsters.total()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.monsters.entry_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

/// Buckets of a single zone, as produced by `aggregate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneBuckets {
    Section(DeckSection),
    Extra(ExtraSection),
}

impl ZoneBuckets {
    /// Empty buckets for `zone`.
    #[must_use]
    pub fn empty(zone: Zone) -> Self {
        match zone {
            Zone::Extra => ZoneBuckets::Extra(ExtraSection::new()),
            Zone::Main | Zone::Side => ZoneBuckets::Section(DeckSection::new(zone)),
        }
    }

    /// Add a card; returns it back if it belongs to another zone.
    pub fn push(&mut self, card: ClassifiedCard) -> Result<(), ClassifiedCard> {
        match self {
            ZoneBuckets::Section(section) => section.push(card),
            ZoneBuckets::Extra(extra) => extra.push(card),
        }
    }

    /// Total monster copies in this zone.
    #[must_use]
    pub fn total_monsters(&self) -> u64 {
        match self {
            ZoneBuckets::Section(section) => section.monsters.total(),
            ZoneBuckets::Extra(extra) => extra.total_monsters(),
        }
    }
}

/// Group the cards of `zone` into its buckets.
///
/// Cards from other zones are skipped.
pub fn aggregate(cards: impl IntoIterator<Item = ClassifiedCard>, zone: Zone) -> ZoneBuckets {
    let mut buckets = ZoneBuckets::empty(zone);
    for card in cards {
        if let Err(card) = buckets.push(card) {
            tracing::trace!(card = %card.name, from = %card.zone(), into = %zone, "skipping card of another zone");
        }
    }
    buckets
}

/// Aggregated deck, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckDocumentRepr")]
pub struct DeckDocument {
    pub main: DeckSection,
    pub extra: ExtraSection,
    pub side: DeckSection,
}

#[derive(Deserialize)]
struct DeckDocumentRepr {
    main: DeckSection,
    extra: ExtraSection,
    side: DeckSection,
}

impl TryFrom<DeckDocumentRepr> for DeckDocument {
    type Error = DecklistError;

    fn try_from(repr: DeckDocumentRepr) -> Result<Self, Self::Error> {
        let expected = [("main", &repr.main, Zone::Main), ("side", &repr.side, Zone::Side)];
        for (field, section, zone) in expected {
            if section.zone() != zone {
                return Err(DecklistError::Document(format!(
                    "`{field}` holds the {}, expected the {zone}",
                    section.zone()
                )));
            }
        }
        Ok(Self {
            main: repr.main,
            extra: repr.extra,
            side: repr.side,
        })
    }
}

impl Default for DeckDocument {
    fn default() -> Self {
        Self {
            main: DeckSection::new(Zone::Main),
            extra: ExtraSection::new(),
            side: DeckSection::new(Zone::Side),
        }
    }
}

impl DeckDocument {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classified card to its zone.
    pub fn push(&mut self, card: ClassifiedCard) {
        let pushed = match card.zone() {
            Zone::Main => self.main.push(card),
            Zone::Extra => self.extra.push(card),
            Zone::Side => self.side.push(card),
        };
        // A category always names its own zone, so routing by zone cannot miss.
        debug_assert!(pushed.is_ok());
    }

    /// Aggregate already classified cards.
    #[must_use]
    pub fn from_classified(cards: impl IntoIterator<Item = ClassifiedCard>) -> Self {
        let mut deck = Self::new();
        for card in cards {
            deck.push(card);
        }
        tracing::debug!(
            main = deck.main.entry_count(),
            extra = deck.extra.entry_count(),
            side = deck.side.entry_count(),
            "aggregated deck"
        );
        deck
    }

    /// Classify and aggregate normalized records.
    #[must_use]
    pub fn from_records(records: &[CardRecord]) -> Self {
        Self::from_classified(records.iter().map(classify))
    }

    /// Section for a Main or Side zone.
    #[must_use]
    pub fn section(&self, zone: Zone) -> Option<&DeckSection> {
        match zone {
            Zone::Main => Some(&self.main),
            Zone::Side => Some(&self.side),
            Zone::Extra => None,
        }
    }

    /// Template totals.
    #[must_use]
    pub fn totals(&self) -> DeckTotals {
        let main = self.main.totals();
        DeckTotals {
            total_monsters: main.monsters,
            total_extra_monsters: self.extra.total_monsters(),
            total_spells: main.spells,
            total_traps: main.traps,
        }
    }

    /// Number of card entries across all zones.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.main.entry_count() + self.extra.entry_count() + self.side.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::BucketCategory;

    #[test]
    fn test_empty_deck() {
        let deck = DeckDocument::new();
        assert_eq!(deck.totals(), DeckTotals::default());
        assert_eq!(deck.entry_count(), 0);
        assert!(deck.main.is_empty());
        assert!(deck.extra.is_empty());
        assert!(deck.side.is_empty());
    }

    #[test]
    fn test_routing() {
        let records = vec![
            CardRecord::monster(Zone::Main, "Effect A", 3, "Effect Monster"),
            CardRecord::spell(Zone::Main, "Spell A", 2),
            CardRecord::trap(Zone::Main, "Trap A", 1),
            CardRecord::monster(Zone::Extra, "Xyz A", 2, "Warrior / Xyz / Effect"),
            CardRecord::monster(Zone::Side, "Side Tuner", 1, "Tuner / Effect"),
            CardRecord::trap(Zone::Side, "Side Trap", 3),
        ];
        let deck = DeckDocument::from_records(&records);

        assert_eq!(deck.main.monsters.get(MonsterCategory::Effect).cards().len(), 1);
        assert_eq!(deck.main.spells.len(), 1);
        assert_eq!(deck.main.traps.len(), 1);
        assert_eq!(deck.extra.monsters.get(ExtraMonsterCategory::Xyz).total(), 2);
        assert_eq!(deck.side.monsters.get(MonsterCategory::Tuner).total(), 1);
        assert_eq!(deck.side.totals().traps, 3);
        assert_eq!(deck.entry_count(), records.len());
    }

    #[test]
    fn test_totals_sum_quantities() {
        let records = vec![
            CardRecord::monster(Zone::Main, "A", 3, "Effect"),
            CardRecord::monster(Zone::Main, "B", 2, "Normal"),
            CardRecord::monster(Zone::Main, "C", 1, "Ritual / Effect"),
            CardRecord::spell(Zone::Main, "S", 3),
            CardRecord::spell(Zone::Main, "S", 1),
        ];
        let totals = DeckDocument::from_records(&records).totals();
        assert_eq!(totals.total_monsters, 6);
        assert_eq!(totals.total_spells, 4);
        assert_eq!(totals.total_traps, 0);
    }

    #[test]
    fn test_side_totals_excluded_from_template_totals() {
        let records = vec![CardRecord::spell(Zone::Side, "S", 3)];
        let deck = DeckDocument::from_records(&records);
        assert_eq!(deck.totals().total_spells, 0);
        assert_eq!(deck.side.totals().spells, 3);
    }

    #[test]
    fn test_section_rejects_other_zone() {
        let mut main = DeckSection::new(Zone::Main);
        let side_card = classify(&CardRecord::spell(Zone::Side, "S", 1));
        assert!(main.push(side_card).is_err());

        let mut extra = ExtraSection::new();
        let main_card = classify(&CardRecord::monster(Zone::Main, "M", 1, "Effect"));
        assert!(extra.push(main_card).is_err());
    }

    #[test]
    fn test_aggregate_single_zone() {
        let cards = vec![
            classify(&CardRecord::monster(Zone::Extra, "L", 2, "Link")),
            classify(&CardRecord::monster(Zone::Main, "M", 3, "Effect")),
            classify(&CardRecord::monster(Zone::Extra, "F", 1, "Fusion")),
        ];
        let buckets = aggregate(cards, Zone::Extra);
        assert_eq!(buckets.total_monsters(), 3);
        match buckets {
            ZoneBuckets::Extra(extra) => {
                let labels: Vec<_> = extra.monsters.non_empty().map(|b| b.category.label()).collect();
                assert_eq!(labels, vec!["fusion monsters", "link monsters"]);
            }
            ZoneBuckets::Section(_) => panic!("expected Extra buckets"),
        }
    }

    #[test]
    fn test_aggregate_empty_zone() {
        let buckets = aggregate(Vec::new(), Zone::Side);
        assert_eq!(buckets.total_monsters(), 0);
        assert_eq!(buckets, ZoneBuckets::empty(Zone::Side));
    }

    #[test]
    fn test_source_order_within_bucket() {
        let records = vec![
            CardRecord::monster(Zone::Main, "Zeta", 1, "Effect"),
            CardRecord::monster(Zone::Main, "Alpha", 1, "Effect"),
            CardRecord::monster(Zone::Main, "Zeta", 2, "Effect"),
        ];
        let deck = DeckDocument::from_records(&records);
        let names: Vec<_> = deck
            .main
            .monsters
            .get(MonsterCategory::Effect)
            .cards()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let records = vec![
            CardRecord::monster(Zone::Main, "Normal A", 1, "Dragon / Normal"),
            CardRecord::monster(Zone::Main, "Ritual A", 2, "Spellcaster / Ritual / Effect"),
            CardRecord::spell(Zone::Main, "Spell A", 3),
            CardRecord::monster(Zone::Extra, "Link A", 1, "Cyberse / Link / Effect"),
            CardRecord::trap(Zone::Side, "Trap A", 2),
        ];
        let deck = DeckDocument::from_records(&records);
        let json = serde_json::to_string(&deck).unwrap();
        let restored: DeckDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, deck);
    }

    #[test]
    fn test_deserialize_reorders_shuffled_buckets() {
        let records = vec![
            CardRecord::monster(Zone::Main, "Normal A", 1, "Dragon / Normal"),
            CardRecord::monster(Zone::Main, "Ritual A", 1, "Spellcaster / Ritual / Effect"),
        ];
        let deck = DeckDocument::from_records(&records);
        let mut value = serde_json::to_value(&deck).unwrap();
        value["main"]["monsters"]["buckets"]
            .as_array_mut()
            .unwrap()
            .reverse();

        let restored: DeckDocument = serde_json::from_value(value).unwrap();
        let labels: Vec<_> = restored.main.monsters.non_empty().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["normal monsters", "ritual monsters"]);
        assert_eq!(restored, deck);
    }

    #[test]
    fn test_deserialize_rejects_wrong_zone() {
        let mut value = serde_json::to_value(DeckDocument::new()).unwrap();
        value["main"]["zone"] = serde_json::json!("extra");
        let err = serde_json::from_value::<DeckDocument>(value).unwrap_err();
        assert!(err.to_string().contains("Invalid deck document"));

        let mut swapped = serde_json::to_value(DeckDocument::new()).unwrap();
        swapped["side"]["zone"] = serde_json::json!("main");
        assert!(serde_json::from_value::<DeckDocument>(swapped).is_err());
    }

    #[test]
    fn test_deserialize_rejects_card_of_other_zone() {
        let deck = DeckDocument::from_records(&[CardRecord::spell(Zone::Side, "Side Spell", 1)]);
        let mut value = serde_json::to_value(&deck).unwrap();
        let card = value["side"]["spells"][0].clone();
        value["main"]["spells"] = serde_json::json!([card]);

        let err = serde_json::from_value::<DeckDocument>(value).unwrap_err();
        assert!(err.to_string().contains("Side Spell"));
    }
}
