//! Disallow-list section - checks the password against one dictionary.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::{DictionaryMatcher, ListKind, PolicyViolation};

/// Checks the password against a disallow list.
///
/// With `in_password` set, any entry of at least `min_word_length`
/// characters found inside the password fails the section. Otherwise only
/// an exact (case-insensitive) match fails it. Exactly one of the two
/// lookups runs.
pub fn disallow_list_section(
    password: &SecretString,
    matcher: &DictionaryMatcher,
    list: ListKind,
    in_password: bool,
    min_word_length: usize,
) -> SectionResult {
    let pwd = password.expose_secret();
    if in_password {
        if matcher.substring_match(pwd, min_word_length) {
            return Some(PolicyViolation::DisallowedSubstring { list });
        }
    } else if matcher.exact_match(pwd) {
        return Some(PolicyViolation::DisallowedExact { list });
    }
    None
}
