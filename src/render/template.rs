//! Decklist template builder.
//!
//! Fields are collected in order as typed values and serialized once in
//! `build`. This is the only place that decides what gets written:
//!
//! - list fields with no cards are dropped (never an empty body)
//! - every section after the first is preceded by a blank line
//! - the result is trimmed

use std::fmt;

use crate::core::Zone;

/// One field of the template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// Section comment, e.g. `<!-- Main Deck -->`.
    Section(Zone),
    /// Numeric field, e.g. `| total m = 40`.
    Total { key: &'static str, value: u64 },
    /// Card list field, e.g. `| spells =` followed by one line per card.
    List { key: String, lines: Vec<String> },
}

impl Field {
    /// Whether this field is written at all.
    #[must_use]
    pub fn is_emitted(&self) -> bool {
        match self {
            Field::List { lines, .. } => !lines.is_empty(),
            Field::Section(_) | Field::Total { .. } => true,
        }
    }
}

/// Builds a `{{Decklist}}` template.
///
/// ```
/// use ygo_decklist::core::Zone;
/// use ygo_decklist::render::TemplateBuilder;
///
/// let mut builder = TemplateBuilder::new("Sky Striker");
/// builder
///     .section(Zone::Main)
///     .total("total s", 1)
///     .list("spells", vec!["* [[Sky Striker Mobilize - Engage!]]".to_string()])
///     .list("traps", Vec::new());
///
/// assert_eq!(
///     builder.build(),
///     "{{Decklist|Sky Striker\n<!-- Main Deck -->\n| total s = 1\n| spells =\n* [[Sky Striker Mobilize - Engage!]]\n}}"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct TemplateBuilder {
    deck_name: String,
    fields: Vec<Field>,
}

impl TemplateBuilder {
    /// Start a template for `deck_name`.
    #[must_use]
    pub fn new(deck_name: impl Into<String>) -> Self {
        Self {
            deck_name: deck_name.into(),
            fields: Vec::new(),
        }
    }

    /// Open a zone section.
    pub fn section(&mut self, zone: Zone) -> &mut Self {
        self.fields.push(Field::Section(zone));
        self
    }

    /// Add a numeric field.
    pub fn total(&mut self, key: &'static str, value: u64) -> &mut Self {
        self.fields.push(Field::Total { key, value });
        self
    }

    /// Add a card list field. Empty lists are kept here and dropped on build.
    pub fn list(&mut self, key: impl Into<String>, lines: Vec<String>) -> &mut Self {
        self.fields.push(Field::List {
            key: key.into(),
            lines,
        });
        self
    }

    /// Fields collected so far, including ones `build` will drop.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Serialize the template.
    #[must_use]
    pub fn build(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for TemplateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{{{Decklist|{}", self.deck_name)?;
        let mut first_section = true;

        for field in self.fields.iter().filter(|field| field.is_emitted()) {
            match field {
                Field::Section(zone) => {
                    if !first_section {
                        writeln!(f)?;
                    }
                    first_section = false;
                    writeln!(f, "<!-- {} -->", zone.name())?;
                }
                Field::Total { key, value } => writeln!(f, "| {key} = {value}")?,
                Field::List { key, lines } => {
                    writeln!(f, "| {key} =")?;
                    for line in lines {
                        writeln!(f, "{line}")?;
                    }
                }
            }
        }

        f.write_str("}}")
    }
}
