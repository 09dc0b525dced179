//! Rendering of aggregated decks into the `{{Decklist}}` wiki template.

pub mod template;
pub mod renderer;

pub use template::{Field, TemplateBuilder};
pub use renderer::{card_line, render, LinkStyle, TemplateRenderer};
