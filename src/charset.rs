//! Configurable character classes.

use std::collections::BTreeSet;
use std::fmt;

/// A set of characters a password may draw on for one character class.
///
/// Membership is a plain set lookup. Characters such as `]`, `-`, `\` or
/// `^` are members like any other and never act as syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet(BTreeSet<char>);

impl CharSet {
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Returns `true` if at least one character of `text` is in the set.
    pub fn matches_any(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl From<String> for CharSet {
    fn from(chars: String) -> Self {
        Self::from(chars.as_str())
    }
}

impl From<&String> for CharSet {
    fn from(chars: &String) -> Self {
        Self::from(chars.as_str())
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        CharSet(iter.into_iter().collect())
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
