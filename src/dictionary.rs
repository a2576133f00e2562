//! Disallow-list matching.
//!
//! A [`DictionaryMatcher`] owns one list's normalized entries together with
//! the trie built from them. The two are only ever replaced together.

use crate::trie::Trie;

/// Minimum trie entry length for the bundled default lists.
pub const DEFAULT_MIN_ENTRY_LENGTH: usize = 3;

/// Minimum entry length considered by substring matching when the caller
/// does not pick one.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct DictionaryMatcher {
    entries: Vec<String>,
    trie: Trie,
    min_entry_length: usize,
}

impl DictionaryMatcher {
    /// Lowercases `entries` and builds the trie over them.
    ///
    /// `min_entry_length` only filters what goes into the trie; the raw
    /// entry list keeps every entry for substring scans.
    pub fn new(mut entries: Vec<String>, min_entry_length: usize) -> Self {
        for entry in entries.iter_mut() {
            *entry = entry.to_lowercase();
        }
        let trie = Trie::build(&entries, true, min_entry_length);
        Self {
            entries,
            trie,
            min_entry_length,
        }
    }

    /// Replaces the entries and rebuilds the trie in one step.
    pub fn replace(&mut self, entries: Vec<String>, min_entry_length: usize) {
        *self = Self::new(entries, min_entry_length);
    }

    /// `true` if `password` is exactly one of the indexed entries,
    /// ignoring case.
    pub fn exact_match(&self, password: &str) -> bool {
        self.trie.contains(password)
    }

    /// `true` if any entry of at least `min_word_length` characters occurs
    /// anywhere in `password`, ignoring case.
    ///
    /// Scans the raw list in order and stops at the first hit.
    pub fn substring_match(&self, password: &str, min_word_length: usize) -> bool {
        let password = password.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.chars().count() >= min_word_length)
            .any(|entry| password.contains(entry.as_str()))
    }

    /// Normalized entries in list order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn min_entry_length(&self) -> usize {
        self.min_entry_length
    }
}
