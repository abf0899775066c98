//! German Number Words
//!
//! Spells cardinal numbers 0-999 the way they are written in German:
//! one compound word, units before tens ("einundzwanzig").

use crate::error::{TrainerError, TrainerResult};

/// Largest number the converter spells
pub const MAX_NUMBER: u16 = 999;

const ONES: [&str; 10] = [
    "", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
];

const TEENS: [&str; 10] = [
    "zehn",
    "elf",
    "zwölf",
    "dreizehn",
    "vierzehn",
    "fünfzehn",
    "sechzehn",
    "siebzehn",
    "achtzehn",
    "neunzehn",
];

const TENS: [&str; 10] = [
    "",
    "",
    "zwanzig",
    "dreißig",
    "vierzig",
    "fünfzig",
    "sechzig",
    "siebzig",
    "achtzig",
    "neunzig",
];

/// Check that `n` can be spelled and narrow it to `u16`
pub fn check_range(n: i64) -> TrainerResult<u16> {
    if (0..=i64::from(MAX_NUMBER)).contains(&n) {
        Ok(n as u16)
    } else {
        Err(TrainerError::OutOfRange(n))
    }
}

/// Convert a number (0-999) to its German spelling
pub fn to_german(n: i64) -> TrainerResult<String> {
    let n = usize::from(check_range(n)?);

    match n {
        0 => return Ok("null".to_string()),
        1 => return Ok("eins".to_string()),
        _ => {}
    }

    let mut word = String::new();

    let hundreds = n / 100;
    if hundreds == 1 {
        word.push_str("einhundert");
    } else if hundreds > 1 {
        word.push_str(ONES[hundreds]);
        word.push_str("hundert");
    }

    let rest = n % 100;
    if rest >= 20 {
        let (tens, ones) = (rest / 10, rest % 10);
        if ones > 0 {
            // "eins" loses its s inside a compound
            word.push_str(if ones == 1 { "ein" } else { ONES[ones] });
            word.push_str("und");
        }
        word.push_str(TENS[tens]);
    } else if rest >= 10 {
        word.push_str(TEENS[rest - 10]);
    } else if rest > 0 {
        word.push_str(ONES[rest]);
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(n: i64) -> String {
        to_german(n).expect("in range")
    }

    #[test]
    fn test_irregular_small_numbers() {
        assert_eq!(spell(0), "null");
        assert_eq!(spell(1), "eins");
        assert_eq!(spell(2), "zwei");
        assert_eq!(spell(9), "neun");
    }

    #[test]
    fn test_teens() {
        assert_eq!(spell(10), "zehn");
        assert_eq!(spell(11), "elf");
        assert_eq!(spell(12), "zwölf");
        assert_eq!(spell(15), "fünfzehn");
        assert_eq!(spell(16), "sechzehn");
        assert_eq!(spell(17), "siebzehn");
        assert_eq!(spell(19), "neunzehn");
    }

    #[test]
    fn test_tens_and_compounds() {
        assert_eq!(spell(20), "zwanzig");
        assert_eq!(spell(21), "einundzwanzig");
        assert_eq!(spell(30), "dreißig");
        assert_eq!(spell(45), "fünfundvierzig");
        assert_eq!(spell(80), "achtzig");
        assert_eq!(spell(99), "neunundneunzig");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell(100), "einhundert");
        assert_eq!(spell(101), "einhunderteins");
        assert_eq!(spell(111), "einhundertelf");
        assert_eq!(spell(200), "zweihundert");
        assert_eq!(spell(321), "dreihunderteinundzwanzig");
        assert_eq!(spell(570), "fünfhundertsiebzig");
        assert_eq!(spell(999), "neunhundertneunundneunzig");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(to_german(-1), Err(TrainerError::OutOfRange(-1))));
        assert!(matches!(
            to_german(1000),
            Err(TrainerError::OutOfRange(1000))
        ));
        assert!(to_german(i64::MAX).is_err());
    }

    #[test]
    fn test_every_number_is_one_lowercase_word() {
        for n in 0..=i64::from(MAX_NUMBER) {
            let word = spell(n);
            assert!(!word.is_empty(), "{} spelled as empty", n);
            assert!(
                word.chars()
                    .all(|c| c.is_ascii_lowercase() || "äöüß".contains(c)),
                "{} spelled as {:?}",
                n,
                word
            );
        }
    }
}
