//! Prefix tree used for exact, case-insensitive membership tests against
//! large disallow lists.
//!
//! Every stored entry ends on a node carrying the end-of-entry marker, so a
//! candidate only matches when it walks the full path of an entry *and*
//! stops exactly where that entry stops. Lookup cost is linear in the
//! length of the candidate and independent of how many entries are stored.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// End-of-entry marker: a complete entry terminates at this node.
    terminal: bool,
}

/// Character-keyed prefix tree built from a list of entries.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Builds a trie from `entries`.
    ///
    /// Entries shorter than `min_entry_length` characters are skipped. A
    /// minimum of `0` behaves like `1`, so empty entries are never indexed.
    /// When `lowercase` is set every entry is lowercased before insertion.
    ///
    /// The trie is a pure function of the filtered list; there is no
    /// incremental update; callers rebuild on every list change.
    pub fn build<I, S>(entries: I, lowercase: bool, min_entry_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let min_entry_length = min_entry_length.max(1);
        let mut trie = Trie::default();

        for entry in entries {
            let entry = entry.as_ref();
            if entry.chars().count() < min_entry_length {
                continue;
            }
            if lowercase {
                trie.insert(&entry.to_lowercase());
            } else {
                trie.insert(entry);
            }
        }

        trie
    }

    fn insert(&mut self, entry: &str) {
        let mut node = &mut self.root;
        for c in entry.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Returns `true` if `candidate`, lowercased, is exactly one of the
    /// stored entries.
    ///
    /// Prefixes of stored entries and extensions of stored entries do not
    /// match.
    pub fn contains(&self, candidate: &str) -> bool {
        let mut node = &self.root;
        for c in candidate.to_lowercase().chars() {
            match node.children.get(&c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of distinct entries indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
