//! Quiz rounds and application state
//!
//! A `Quiz` owns one open `Round` per `Mode`. Switching modes keeps the
//! other mode's number, so coming back shows the same exercise.

use crate::core::number_words::{check_range, to_german, MAX_NUMBER};
use crate::core::text_normalizer::{answers_match, similarity};
use crate::error::{TrainerError, TrainerResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Exercise mode, exactly one is active
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Hear the German word, type the digits
    #[default]
    Listen,
    /// See the digits, type the German word
    Speak,
}

/// Result of checking one answer
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Correct,
    Incorrect {
        /// Correct answer for display
        expected: String,
        /// Similarity of the given answer to `expected`
        similarity: f64,
    },
    /// Blank answer, round stays open
    Empty,
    /// Listen mode wants digits, round stays open
    NotANumber,
}

impl Outcome {
    /// Whether this outcome closes the round
    pub fn is_final(&self) -> bool {
        matches!(self, Outcome::Correct | Outcome::Incorrect { .. })
    }
}

/// A single exercise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: u16,
    mode: Mode,
    answered: bool,
}

impl Round {
    pub fn new(target: i64, mode: Mode) -> TrainerResult<Self> {
        Ok(Self {
            target: check_range(target)?,
            mode,
            answered: false,
        })
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// What the learner is given: the word to be spoken, or the digits to read
    pub fn prompt(&self) -> TrainerResult<String> {
        match self.mode {
            Mode::Listen => to_german(self.target.into()),
            Mode::Speak => Ok(self.target.to_string()),
        }
    }

    /// What the learner has to produce
    pub fn expected_answer(&self) -> TrainerResult<String> {
        match self.mode {
            Mode::Listen => Ok(self.target.to_string()),
            Mode::Speak => to_german(self.target.into()),
        }
    }

    /// Check an answer. A correct or incorrect verdict closes the round.
    pub fn check(&mut self, answer: &str) -> TrainerResult<Outcome> {
        if self.answered {
            return Err(TrainerError::RoundClosed);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(Outcome::Empty);
        }

        let expected = self.expected_answer()?;
        let correct = match self.mode {
            Mode::Listen => {
                if !is_integer(answer) {
                    return Ok(Outcome::NotANumber);
                }
                // integers beyond i64 are simply wrong
                answer
                    .parse::<i64>()
                    .is_ok_and(|n| n == i64::from(self.target))
            }
            Mode::Speak => answers_match(answer, &expected),
        };

        self.answered = true;
        debug!(
            "Checked {:?} round {}: '{}' -> {}",
            self.mode, self.target, answer, correct
        );

        if correct {
            Ok(Outcome::Correct)
        } else {
            Ok(Outcome::Incorrect {
                similarity: similarity(answer, &expected),
                expected,
            })
        }
    }
}

/// Application state: active mode plus one round per mode
#[derive(Debug)]
pub struct Quiz<R: Rng = StdRng> {
    mode: Mode,
    rng: R,
    listen: Round,
    speak: Round,
}

impl Quiz<StdRng> {
    /// Quiz with a reproducible number sequence
    pub fn seeded(mode: Mode, seed: u64) -> Self {
        Self::new(mode, StdRng::seed_from_u64(seed))
    }

    /// Quiz seeded from system entropy
    pub fn from_entropy(mode: Mode) -> Self {
        Self::new(mode, StdRng::from_entropy())
    }
}

impl<R: Rng> Quiz<R> {
    pub fn new(mode: Mode, mut rng: R) -> Self {
        let listen = draw_round(&mut rng, Mode::Listen);
        let speak = draw_round(&mut rng, Mode::Speak);
        Self {
            mode,
            rng,
            listen,
            speak,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            debug!("Switching mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Round of the active mode
    pub fn round(&self) -> &Round {
        match self.mode {
            Mode::Listen => &self.listen,
            Mode::Speak => &self.speak,
        }
    }

    /// Replace the active mode's round with a fresh random number
    pub fn next_round(&mut self) -> &Round {
        let round = draw_round(&mut self.rng, self.mode);
        let slot = self.round_mut();
        *slot = round;
        slot
    }

    /// Check an answer against the active round
    pub fn check(&mut self, answer: &str) -> TrainerResult<Outcome> {
        self.round_mut().check(answer)
    }

    fn round_mut(&mut self) -> &mut Round {
        match self.mode {
            Mode::Listen => &mut self.listen,
            Mode::Speak => &mut self.speak,
        }
    }
}

/// Optional sign followed by ASCII digits, of any length
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn draw_round<R: Rng>(rng: &mut R, mode: Mode) -> Round {
    Round {
        target: rng.gen_range(0..=MAX_NUMBER),
        mode,
        answered: false,
    }
}
