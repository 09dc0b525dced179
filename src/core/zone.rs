//! Deck zones.
//!
//! A deck listing is split into three zones. The set is fixed by the game,
//! so unlike an open-ended zone registry this is a plain enum.

use serde::{Deserialize, Serialize};

/// One of the three sections of a deck listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Main Deck (monsters, spells, traps).
    Main,
    /// Extra Deck (Fusion, Synchro, Xyz and Link monsters).
    Extra,
    /// Side Deck (same layout as the Main Deck).
    Side,
}

impl Zone {
    /// All zones in template order.
    pub const ALL: [Zone; 3] = [Zone::Main, Zone::Extra, Zone::Side];

    /// Human-readable name, as used in the template section comments.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Main => "Main Deck",
            Zone::Extra => "Extra Deck",
            Zone::Side => "Side Deck",
        }
    }

    /// Whether this zone holds spells and traps in their own lists.
    #[must_use]
    pub const fn has_spell_trap_lists(self) -> bool {
        !matches!(self, Zone::Extra)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
