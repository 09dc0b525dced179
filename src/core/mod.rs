//! Core types: zones, configuration, errors, text clean-up.
//!
//! These are shared by every stage of the pipeline and carry no
//! classification or rendering logic of their own.

pub mod zone;
pub mod config;
pub mod error;
pub mod text;

pub use zone::Zone;
pub use config::{DecklistConfig, DEFAULT_MASTER_DUEL_QUALIFIER, DEFAULT_UNNAMED_DECK};
pub use error::{DecklistError, Result};
pub use text::{clean_text, sanitize_card_name, sanitize_deck_name};
