//! Pipeline configuration.
//!
//! `DecklistConfig` carries the few knobs the export has: whether links
//! point at the Master Duel card pages, the qualifier used for those links,
//! and the deck name used when the source has none.
//!
//! Configs can be built in code or loaded from TOML:
//!
//! ```
//! use ygo_decklist::core::DecklistConfig;
//!
//! let config = DecklistConfig::from_toml_str("master_duel = true").unwrap();
//! assert!(config.master_duel);
//! assert_eq!(config.master_duel_qualifier, "Master Duel");
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Qualifier appended to Master Duel link targets.
pub const DEFAULT_MASTER_DUEL_QUALIFIER: &str = "Master Duel";

/// Deck name used when the source page has no title.
pub const DEFAULT_UNNAMED_DECK: &str = "Unnamed Deck";

/// Configuration for one export run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecklistConfig {
    /// Link cards to their Master Duel pages (`[[X (Master Duel)|X]]`).
    pub master_duel: bool,

    /// Qualifier placed in parentheses after the card name in Master Duel links.
    pub master_duel_qualifier: String,

    /// Fallback deck name.
    pub unnamed_deck: String,
}

impl Default for DecklistConfig {
    fn default() -> Self {
        Self {
            master_duel: false,
            master_duel_qualifier: DEFAULT_MASTER_DUEL_QUALIFIER.to_string(),
            unnamed_deck: DEFAULT_UNNAMED_DECK.to_string(),
        }
    }
}

impl DecklistConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Enable or disable Master Duel links.
    #[must_use]
    pub fn with_master_duel(mut self, master_duel: bool) -> Self {
        self.master_duel = master_duel;
        self
    }

    /// Set the Master Duel link qualifier.
    #[must_use]
    pub fn with_master_duel_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.master_duel_qualifier = qualifier.into();
        self
    }

    /// Set the fallback deck name.
    #[must_use]
    pub fn with_unnamed_deck(mut self, name: impl Into<String>) -> Self {
        self.unnamed_deck = name.into();
        self
    }
}
