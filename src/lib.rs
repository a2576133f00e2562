//! Password policy checking library
//!
//! This library checks candidate passwords against a configurable policy:
//! length bounds, required character classes and three disallow lists
//! (dictionary words, personal names and common passwords). Disallow lists
//! are indexed in a trie for exact matching and scanned in order for
//! substring matching.
//!
//! # Features
//!
//! - `async` (default): Enables [`Checker::check_tx`], which delivers the
//!   report over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read only by [`Checker::from_env`]:
//!
//! - `PWD_POLICY_WORDS_PATH`: Custom words list file
//! - `PWD_POLICY_NAMES_PATH`: Custom names list file
//! - `PWD_POLICY_PASSWORDS_PATH`: Custom passwords list file
//!
//! Unset variables fall back to the bundled lists. The bundled lists are
//! abridged (a few thousand common words, under a thousand first names and
//! a few hundred common passwords); point the variables at full-size lists
//! for production use.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{Checker, ListKind, PolicyViolation};
//!
//! let mut checker = Checker::new();
//! checker.set_min_length(8);
//! checker.set_max_length(20);
//! checker.set_allowed_numbers("23456789");
//! checker.require_letters(true);
//! checker.require_numbers_or_symbols(true);
//! checker.disallow_passwords(true, false, None);
//!
//! let violations = checker.check("password");
//! assert!(violations.contains(&PolicyViolation::DisallowedExact {
//!     list: ListKind::Passwords
//! }));
//!
//! assert!(checker.check("bkcdshjk7678_").is_empty());
//! ```

// Internal modules
mod candidate;
mod charset;
mod checker;
mod dictionary;
mod rule;
mod sections;
mod trie;
mod violation;
mod wordlist;

// Public API
pub use candidate::Candidate;
pub use charset::CharSet;
pub use checker::{
    CheckReport, Checker, DEFAULT_ALLOWED_LETTERS, DEFAULT_ALLOWED_NUMBERS,
    DEFAULT_ALLOWED_SYMBOLS, RuleOutcome,
};
pub use dictionary::{DEFAULT_MIN_ENTRY_LENGTH, DEFAULT_MIN_WORD_LENGTH, DictionaryMatcher};
pub use rule::{Rule, RuleId};
pub use trie::Trie;
pub use violation::{ListKind, PolicyViolation};
pub use wordlist::{
    NAMES_PATH_ENV, PASSWORDS_PATH_ENV, WORDS_PATH_ENV, WordListError, default_list,
    list_path_from_env, load_list_from_path,
};
