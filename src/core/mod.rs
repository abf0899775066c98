//! Core language modules
//!
//! Number spelling and answer normalization. Both are pure and synchronous.

pub mod number_words;
pub mod text_normalizer;

pub use number_words::{to_german, MAX_NUMBER};
pub use text_normalizer::{answers_match, normalize, similarity};
