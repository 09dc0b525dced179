//! Classification of card records into zone categories.

pub mod classifier;

pub use classifier::{classify, classify_all, ClassifiedCard};
