//! Zahlentrainer Library
//!
//! Spelling and answer checking for German numbers 0-999, plus the quiz
//! state and speech capability used by the trainer binary.

pub mod config;
pub mod core;
pub mod error;
pub mod quiz;
pub mod tts;

pub use crate::core::{answers_match, normalize, to_german, MAX_NUMBER};
pub use error::{TrainerError, TrainerResult};
pub use quiz::{Mode, Outcome, Quiz, Round};
