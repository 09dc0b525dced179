//! Decklist rendering.
//!
//! Turns a `DeckDocument` into the Yugipedia `{{Decklist}}` template. Field
//! order is fixed: Main Deck (`total m`, monster fields, `total s`,
//! `spells`, `total t`, `traps`), Extra Deck (`total me`, monster fields),
//! Side Deck (`side ...` monster fields, `side spells`, `side traps`).
//! Card list fields without cards are left out.

use super::template::TemplateBuilder;
use crate::cards::BucketCategory;
use crate::classify::ClassifiedCard;
use crate::core::{DecklistConfig, Zone, DEFAULT_MASTER_DUEL_QUALIFIER};
use crate::deck::{CategoryBuckets, DeckDocument, DeckSection};

/// How card names are linked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    /// `[[Name]]`
    Standard,
    /// `[[Name (qualifier)|Name]]`
    MasterDuel { qualifier: String },
}

impl LinkStyle {
    /// Master Duel links with the default qualifier.
    #[must_use]
    pub fn master_duel() -> Self {
        LinkStyle::MasterDuel {
            qualifier: DEFAULT_MASTER_DUEL_QUALIFIER.to_string(),
        }
    }

    /// Wiki link for a card name.
    #[must_use]
    pub fn link(&self, name: &str) -> String {
        match self {
            LinkStyle::Standard => format!("[[{name}]]"),
            LinkStyle::MasterDuel { qualifier } => format!("[[{name} ({qualifier})|{name}]]"),
        }
    }
}

/// Format one list line: `* [[Name]]`, with ` xN` when N > 1.
#[must_use]
pub fn card_line(card: &ClassifiedCard, style: &LinkStyle) -> String {
    let link = style.link(&card.name);
    if card.quantity > 1 {
        format!("* {link} x{}", card.quantity)
    } else {
        format!("* {link}")
    }
}

/// Renders decks with a fixed link style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateRenderer {
    style: LinkStyle,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(LinkStyle::Standard)
    }
}

impl TemplateRenderer {
    #[must_use]
    pub fn new(style: LinkStyle) -> Self {
        Self { style }
    }

    /// Renderer matching a configuration.
    #[must_use]
    pub fn from_config(config: &DecklistConfig) -> Self {
        let style = if config.master_duel {
            LinkStyle::MasterDuel {
                qualifier: config.master_duel_qualifier.clone(),
            }
        } else {
            LinkStyle::Standard
        };
        Self::new(style)
    }

    #[must_use]
    pub fn style(&self) -> &LinkStyle {
        &self.style
    }

    /// Collect the template fields for `document`.
    #[must_use]
    pub fn builder(&self, document: &DeckDocument, deck_name: &str) -> TemplateBuilder {
        let totals = document.totals();
        let mut builder = TemplateBuilder::new(deck_name);

        builder.section(Zone::Main).total("total m", totals.total_monsters);
        self.monster_fields(&mut builder, &document.main.monsters, "");
        builder
            .total("total s", totals.total_spells)
            .list("spells", self.lines(&document.main.spells))
            .total("total t", totals.total_traps)
            .list("traps", self.lines(&document.main.traps));

        builder.section(Zone::Extra).total("total me", totals.total_extra_monsters);
        self.monster_fields(&mut builder, &document.extra.monsters, "");

        builder.section(Zone::Side);
        self.side_fields(&mut builder, &document.side);

        builder
    }

    /// Render `document` as a trimmed template string.
    #[must_use]
    pub fn render(&self, document: &DeckDocument, deck_name: &str) -> String {
        let out = self.builder(document, deck_name).build();
        tracing::info!(
            deck = deck_name,
            entries = document.entry_count(),
            bytes = out.len(),
            "rendered decklist"
        );
        out
    }

    fn side_fields(&self, builder: &mut TemplateBuilder, side: &DeckSection) {
        self.monster_fields(builder, &side.monsters, "side ");
        builder
            .list("side spells", self.lines(&side.spells))
            .list("side traps", self.lines(&side.traps));
    }

    fn monster_fields<C: BucketCategory>(
        &self,
        builder: &mut TemplateBuilder,
        buckets: &CategoryBuckets<C>,
        prefix: &str,
    ) {
        for bucket in buckets.non_empty() {
            builder.list(format!("{prefix}{}", bucket.label()), self.lines(bucket.cards()));
        }
    }

    fn lines(&self, cards: &[ClassifiedCard]) -> Vec<String> {
        cards.iter().map(|card| card_line(card, &self.style)).collect()
    }
}

/// Render `document` with standard or Master Duel links.
#[must_use]
pub fn render(document: &DeckDocument, deck_name: &str, master_duel: bool) -> String {
    let style = if master_duel {
        LinkStyle::master_duel()
    } else {
        LinkStyle::Standard
    };
    TemplateRenderer::new(style).render(document, deck_name)
}
