//! Card categories.
//!
//! Every card lands in exactly one category within its zone:
//!
//! - Main/Side monsters: `MonsterCategory` (nine template fields)
//! - Extra monsters: `ExtraMonsterCategory` (four template fields)
//! - Main/Side spells and traps: `SpellTrapCategory` (flat lists)
//!
//! ## Two orders
//!
//! Monster categories have a *classification priority* (which marker wins
//! when a type line carries several, e.g. "Tuner/Effect") and a separate
//! *template order* (the order the wiki template lists its fields). The
//! enums are declared in template order; the priority lives in the marker
//! tables.

use serde::{Deserialize, Serialize};

use crate::core::Zone;

/// A category with a fixed, ordered set of template fields.
pub trait BucketCategory: Copy + Eq + std::fmt::Debug + 'static {
    /// Every variant, in template order.
    const TEMPLATE_ORDER: &'static [Self];

    /// Template field label (e.g. `"tuner monsters"`).
    fn label(self) -> &'static str;

    /// Position in `TEMPLATE_ORDER`.
    fn index(self) -> usize {
        Self::TEMPLATE_ORDER
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }
}

/// Main/Side Deck monster category, declared in template order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterCategory {
    Normal,
    Effect,
    Toon,
    Spirit,
    Union,
    Gemini,
    Tuner,
    Pendulum,
    Ritual,
}

/// Type-line markers for Main/Side monsters, in classification priority.
pub const MONSTER_MARKERS: [(&str, MonsterCategory); 8] = [
    ("Ritual", MonsterCategory::Ritual),
    ("Pendulum", MonsterCategory::Pendulum),
    ("Tuner", MonsterCategory::Tuner),
    ("Gemini", MonsterCategory::Gemini),
    ("Union", MonsterCategory::Union),
    ("Spirit", MonsterCategory::Spirit),
    ("Toon", MonsterCategory::Toon),
    ("Effect", MonsterCategory::Effect),
];

impl MonsterCategory {
    /// Category used when no marker matches.
    pub const DEFAULT: MonsterCategory = MonsterCategory::Normal;

    /// First marker contained in `type_text` wins; `Normal` otherwise.
    #[must_use]
    pub fn from_type_text(type_text: &str) -> Self {
        first_marker(&MONSTER_MARKERS, type_text).unwrap_or(Self::DEFAULT)
    }
}

impl BucketCategory for MonsterCategory {
    const TEMPLATE_ORDER: &'static [Self] = &[
        MonsterCategory::Normal,
        MonsterCategory::Effect,
        MonsterCategory::Toon,
        MonsterCategory::Spirit,
        MonsterCategory::Union,
        MonsterCategory::Gemini,
        MonsterCategory::Tuner,
        MonsterCategory::Pendulum,
        MonsterCategory::Ritual,
    ];

    fn label(self) -> &'static str {
        match self {
            MonsterCategory::Normal => "normal monsters",
            MonsterCategory::Effect => "effect monsters",
            MonsterCategory::Toon => "toon monsters",
            MonsterCategory::Spirit => "spirit monsters",
            MonsterCategory::Union => "union monsters",
            MonsterCategory::Gemini => "gemini monsters",
            MonsterCategory::Tuner => "tuner monsters",
            MonsterCategory::Pendulum => "pendulum monsters",
            MonsterCategory::Ritual => "ritual monsters",
        }
    }
}

/// Extra Deck monster category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtraMonsterCategory {
    Fusion,
    Synchro,
    Xyz,
    Link,
}

/// Type-line markers for Extra Deck monsters, in classification priority.
pub const EXTRA_MONSTER_MARKERS: [(&str, ExtraMonsterCategory); 4] = [
    ("Fusion", ExtraMonsterCategory::Fusion),
    ("Synchro", ExtraMonsterCategory::Synchro),
    ("Xyz", ExtraMonsterCategory::Xyz),
    ("Link", ExtraMonsterCategory::Link),
];

impl ExtraMonsterCategory {
    /// Category used when no marker matches.
    pub const DEFAULT: ExtraMonsterCategory = ExtraMonsterCategory::Fusion;

    /// First marker contained in `type_text` wins; `Fusion` otherwise.
    #[must_use]
    pub fn from_type_text(type_text: &str) -> Self {
        first_marker(&EXTRA_MONSTER_MARKERS, type_text).unwrap_or(Self::DEFAULT)
    }
}

impl BucketCategory for ExtraMonsterCategory {
    const TEMPLATE_ORDER: &'static [Self] = &[
        ExtraMonsterCategory::Fusion,
        ExtraMonsterCategory::Synchro,
        ExtraMonsterCategory::Xyz,
        ExtraMonsterCategory::Link,
    ];

    fn label(self) -> &'static str {
        match self {
            ExtraMonsterCategory::Fusion => "fusion monsters",
            ExtraMonsterCategory::Synchro => "synchro monsters",
            ExtraMonsterCategory::Xyz => "xyz monsters",
            ExtraMonsterCategory::Link => "link monsters",
        }
    }
}

fn first_marker<C: Copy>(markers: &[(&str, C)], type_text: &str) -> Option<C> {
    markers
        .iter()
        .find(|(marker, _)| type_text.contains(*marker))
        .map(|&(_, category)| category)
}

/// Spell or trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellTrapKind {
    Spell,
    Trap,
}

/// Spell/trap subtype, e.g. "Quick-Play" or "Counter".
///
/// Computed for every spell and trap and kept on the classified card.
/// The template lists spells and traps flat, so this never picks a bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellTrapCategory {
    pub kind: SpellTrapKind,
    pub subtype: Option<String>,
}

impl SpellTrapCategory {
    /// Build from the effect badge text. Blank text means a Normal spell/trap.
    #[must_use]
    pub fn from_effect_text(kind: SpellTrapKind, effect_text: Option<&str>) -> Self {
        let subtype = effect_text
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { kind, subtype }
    }

    /// Subtype, or "Normal Spell" / "Normal Trap".
    #[must_use]
    pub fn label(&self) -> &str {
        match (&self.subtype, self.kind) {
            (Some(subtype), _) => subtype.as_str(),
            (None, SpellTrapKind::Spell) => "Normal Spell",
            (None, SpellTrapKind::Trap) => "Normal Trap",
        }
    }
}

/// Category of a Main or Side Deck card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionCategory {
    Monster(MonsterCategory),
    SpellTrap(SpellTrapCategory),
}

impl SectionCategory {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            SectionCategory::Monster(c) => c.label(),
            SectionCategory::SpellTrap(c) => c.label(),
        }
    }
}

/// Zone-tagged category. A card's category always belongs to its zone.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Main(SectionCategory),
    Extra(ExtraMonsterCategory),
    Side(SectionCategory),
}

impl Category {
    /// Zone this category belongs to.
    #[must_use]
    pub const fn zone(&self) -> Zone {
        match self {
            Category::Main(_) => Zone::Main,
            Category::Extra(_) => Zone::Extra,
            Category::Side(_) => Zone::Side,
        }
    }

    /// Category label without the zone (e.g. `"tuner monsters"`, `"Quick-Play"`).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Category::Main(c) | Category::Side(c) => c.label(),
            Category::Extra(c) => c.label(),
        }
    }

    /// Monster category, for Main/Side monsters.
    #[must_use]
    pub fn monster(&self) -> Option<MonsterCategory> {
        match self {
            Category::Main(SectionCategory::Monster(c))
            | Category::Side(SectionCategory::Monster(c)) => Some(*c),
            _ => None,
        }
    }

    /// Extra Deck monster category.
    #[must_use]
    pub fn extra_monster(&self) -> Option<ExtraMonsterCategory> {
        match self {
            Category::Extra(c) => Some(*c),
            _ => None,
        }
    }

    /// Spell/trap category, for Main/Side spells and traps.
    #[must_use]
    pub fn spell_trap(&self) -> Option<&SpellTrapCategory> {
        match self {
            Category::Main(SectionCategory::SpellTrap(c))
            | Category::Side(SectionCategory::SpellTrap(c)) => Some(c),
            _ => None,
        }
    }
}
