//! Policy violations reported by a check.

use std::fmt;
use thiserror::Error;

/// One of the three disallow-list slots held by a [`Checker`](crate::Checker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Words,
    Names,
    Passwords,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Words, ListKind::Names, ListKind::Passwords];

    /// Singular noun for one entry of the list ("word", "name", "password").
    pub fn entry_noun(&self) -> &'static str {
        match self {
            ListKind::Words => "word",
            ListKind::Names => "name",
            ListKind::Passwords => "password",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListKind::Words => "words",
            ListKind::Names => "names",
            ListKind::Passwords => "passwords",
        })
    }
}

/// A rule failure.
///
/// These are validation outcomes, not faults: a check always completes and
/// hands back every violation it found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("The password is too short")]
    TooShort { min: usize },
    #[error("The password is too long")]
    TooLong { max: usize },
    #[error("No letters found")]
    MissingLetters,
    #[error("No numbers found")]
    MissingNumbers,
    #[error("No symbols found")]
    MissingSymbols,
    #[error("No numbers or symbols found")]
    MissingNumbersOrSymbols,
    #[error("Password is in disallowed {list} list")]
    DisallowedExact { list: ListKind },
    #[error("Password includes {} from disallowed list", .list.entry_noun())]
    DisallowedSubstring { list: ListKind },
}
