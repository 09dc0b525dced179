//! Card classification.
//!
//! `classify` maps a normalized record to its category within its zone.
//! It is a pure function: the same record always yields the same card.
//!
//! | Zone       | Attribute     | Category                                   |
//! |------------|---------------|--------------------------------------------|
//! | Main/Side  | SPELL / TRAP  | `SpellTrapCategory` from the effect text   |
//! | Main/Side  | anything else | `MonsterCategory` from the type line       |
//! | Extra      | any           | `ExtraMonsterCategory` from the type line  |
//!
//! The Extra Deck has no spell or trap fields. A spell or trap found there
//! goes through the Extra monster markers like any other card so that it is
//! still counted and listed.

use serde::{Deserialize, Serialize};

use crate::cards::{
    CardAttribute, CardRecord, Category, ExtraMonsterCategory, MonsterCategory, SectionCategory,
    SpellTrapCategory, SpellTrapKind,
};
use crate::core::Zone;

/// A card with its category, ready for aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCard {
    pub name: String,
    pub quantity: u32,
    pub category: Category,
}

impl ClassifiedCard {
    /// Zone the card belongs to.
    #[must_use]
    pub const fn zone(&self) -> Zone {
        self.category.zone()
    }
}

/// Classify one record.
#[must_use]
pub fn classify(record: &CardRecord) -> ClassifiedCard {
    let category = match record.zone {
        Zone::Main => Category::Main(classify_section(record)),
        Zone::Side => Category::Side(classify_section(record)),
        Zone::Extra => {
            if record.attribute.is_spell_or_trap() {
                tracing::warn!(
                    card = %record.name,
                    attribute = %record.attribute,
                    "spell/trap in the Extra Deck, listing it with the Extra monsters"
                );
            }
            Category::Extra(ExtraMonsterCategory::from_type_text(&record.type_text))
        }
    };

    tracing::debug!(
        card = %record.name,
        zone = %record.zone,
        category = category.label(),
        "classified card"
    );

    ClassifiedCard {
        name: record.name.clone(),
        quantity: record.quantity.max(1),
        category,
    }
}

/// Classify a sequence of records, keeping their order.
#[must_use]
pub fn classify_all(records: &[CardRecord]) -> Vec<ClassifiedCard> {
    records.iter().map(classify).collect()
}

fn classify_section(record: &CardRecord) -> SectionCategory {
    let kind = match record.attribute {
        CardAttribute::Spell => SpellTrapKind::Spell,
        CardAttribute::Trap => SpellTrapKind::Trap,
        CardAttribute::Monster => {
            return SectionCategory::Monster(MonsterCategory::from_type_text(&record.type_text));
        }
    };
    SectionCategory::SpellTrap(SpellTrapCategory::from_effect_text(
        kind,
        record.effect_text.as_deref(),
    ))
}
