//! Card attribute parsing.
//!
//! The deck page prints an attribute badge for every card. Spells and traps
//! show `SPELL` / `TRAP`; monsters show their element (`DARK`, `LIGHT`, ...).
//! Only the spell/trap distinction matters here, so every other badge
//! (including a missing one) reads as a monster.

use serde::{Deserialize, Serialize};

/// Broad card kind derived from the attribute badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardAttribute {
    /// Any monster card.
    Monster,
    /// Spell card.
    Spell,
    /// Trap card.
    Trap,
}

impl CardAttribute {
    /// Read the attribute badge text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match text.trim() {
            "SPELL" => CardAttribute::Spell,
            "TRAP" => CardAttribute::Trap,
            _ => CardAttribute::Monster,
        }
    }

    /// Badge text for spells and traps, `MONSTER` otherwise.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardAttribute::Monster => "MONSTER",
            CardAttribute::Spell => "SPELL",
            CardAttribute::Trap => "TRAP",
        }
    }

    /// Whether this is a spell or a trap.
    #[must_use]
    pub const fn is_spell_or_trap(self) -> bool {
        matches!(self, CardAttribute::Spell | CardAttribute::Trap)
    }
}

impl From<&str> for CardAttribute {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl std::fmt::Display for CardAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
