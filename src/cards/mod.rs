//! Card data: attributes, records, categories.
//!
//! ## Key Types
//!
//! - `CardAttribute`: Monster / Spell / Trap, read from the attribute badge
//! - `RawCardRecord`: card row as extracted, every field optional
//! - `CardRecord`: normalized card row consumed by the classifier
//! - `MonsterCategory`, `ExtraMonsterCategory`: fixed template fields
//! - `SpellTrapCategory`: spell/trap subtype (metadata only)
//! - `Category`: zone-tagged category of a classified card

pub mod attributes;
pub mod category;
pub mod record;

pub use attributes::CardAttribute;
pub use category::{
    BucketCategory, Category, ExtraMonsterCategory, MonsterCategory, SectionCategory,
    SpellTrapCategory, SpellTrapKind, EXTRA_MONSTER_MARKERS, MONSTER_MARKERS,
};
pub use record::{CardRecord, RawCardRecord, RawQuantity, NAME_NOT_FOUND};
