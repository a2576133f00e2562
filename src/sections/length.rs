//! Length sections - check password minimum and maximum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::PolicyViolation;

fn char_len(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Checks that the password has at least `min` characters.
///
/// A `min` of zero disables the check.
pub fn min_length_section(password: &SecretString, min: usize) -> SectionResult {
    if min > 0 && char_len(password) < min {
        return Some(PolicyViolation::TooShort { min });
    }
    None
}

/// Checks that the password has at most `max` characters.
///
/// A `max` of zero disables the check.
pub fn max_length_section(password: &SecretString, max: usize) -> SectionResult {
    if max > 0 && char_len(password) > max {
        return Some(PolicyViolation::TooLong { max });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_zero_disables_length_checks() {
        for pwd in ["", "a", "a much longer password than anyone needs"] {
            assert_eq!(min_length_section(&secret(pwd), 0), None);
            assert_eq!(max_length_section(&secret(pwd), 0), None);
        }
    }

    #[test]
    fn test_min_length_section_too_short() {
        assert_eq!(
            min_length_section(&secret("short"), 8),
            Some(PolicyViolation::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_length_sections_at_bounds() {
        assert_eq!(min_length_section(&secret("12345678"), 8), None);
        assert_eq!(max_length_section(&secret("0123456789ab"), 12), None);
    }

    #[test]
    fn test_max_length_section_too_long() {
        assert_eq!(
            max_length_section(&secret("way too long to pass"), 12),
            Some(PolicyViolation::TooLong { max: 12 })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert_eq!(max_length_section(&secret("ßßßß"), 4), None);
        assert_eq!(min_length_section(&secret("ßßßß"), 5), Some(PolicyViolation::TooShort { min: 5 }));
    }
}
