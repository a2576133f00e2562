//! Character class sections - check for letters, numbers and symbols drawn
//! from the configured allowed sets.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::{CharSet, PolicyViolation};

/// `true` if any character of the password belongs to `allowed`.
pub fn has_any(password: &SecretString, allowed: &CharSet) -> bool {
    allowed.matches_any(password.expose_secret())
}

pub fn letters_section(password: &SecretString, letters: &CharSet) -> SectionResult {
    (!has_any(password, letters)).then_some(PolicyViolation::MissingLetters)
}

pub fn numbers_section(password: &SecretString, numbers: &CharSet) -> SectionResult {
    (!has_any(password, numbers)).then_some(PolicyViolation::MissingNumbers)
}

pub fn symbols_section(password: &SecretString, symbols: &CharSet) -> SectionResult {
    (!has_any(password, symbols)).then_some(PolicyViolation::MissingSymbols)
}

/// Passes when the password holds a number, a symbol, or both.
pub fn numbers_or_symbols_section(
    password: &SecretString,
    numbers: &CharSet,
    symbols: &CharSet,
) -> SectionResult {
    if has_any(password, numbers) || has_any(password, symbols) {
        return None;
    }
    Some(PolicyViolation::MissingNumbersOrSymbols)
}
