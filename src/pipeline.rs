//! End-to-end export of one deck.
//!
//! Source → classify → aggregate → render → sink. Everything between the
//! source and the sink is pure; only the sink can fail.

use crate::core::text::clean_text;
use crate::core::{DecklistConfig, Result};
use crate::deck::DeckDocument;
use crate::io::{decklist_file_name, CardSource, DecklistSink};
use crate::render::TemplateRenderer;

/// Everything produced for one deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecklistOutput {
    /// Deck name as written into the template.
    pub deck_name: String,
    /// File name handed to the sink.
    pub file_name: String,
    pub document: DeckDocument,
    /// Rendered template.
    pub markup: String,
}

/// Deck title with whitespace collapsed, or the configured fallback.
#[must_use]
pub fn resolve_deck_name(raw: Option<&str>, config: &DecklistConfig) -> String {
    raw.map(clean_text)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| config.unnamed_deck.clone())
}

/// Build the decklist for `source` without writing it anywhere.
#[must_use]
pub fn build_decklist<S: CardSource + ?Sized>(source: &S, config: &DecklistConfig) -> DecklistOutput {
    let deck_name = resolve_deck_name(source.deck_name(), config);
    let records = source.records();
    let document = DeckDocument::from_records(&records);
    let markup = TemplateRenderer::from_config(config).render(&document, &deck_name);

    DecklistOutput {
        file_name: decklist_file_name(&deck_name),
        deck_name,
        document,
        markup,
    }
}

/// Build the decklist for `source` and hand it to `sink`.
pub fn export_deck<S, K>(source: &S, sink: &mut K, config: &DecklistConfig) -> Result<DecklistOutput>
where
    S: CardSource + ?Sized,
    K: DecklistSink + ?Sized,
{
    let output = build_decklist(source, config);
    sink.write(&output.file_name, &output.markup)?;
    tracing::info!(deck = %output.deck_name, file = %output.file_name, "exported decklist");
    Ok(output)
}
