//! Registered rules.

use crate::charset::CharSet;
use crate::violation::ListKind;

/// Identity of a rule in the registry. At most one rule per id is
/// registered at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    MinLength,
    MaxLength,
    RequireLetters,
    RequireNumbers,
    RequireSymbols,
    RequireNumbersOrSymbols,
    DisallowWords,
    DisallowNames,
    DisallowPasswords,
}

impl RuleId {
    pub fn disallow(list: ListKind) -> Self {
        match list {
            ListKind::Words => RuleId::DisallowWords,
            ListKind::Names => RuleId::DisallowNames,
            ListKind::Passwords => RuleId::DisallowPasswords,
        }
    }
}

/// An enabled rule together with the parameters it was bound with.
///
/// Character-class rules capture the allowed set in effect when they were
/// enabled; changing the set afterwards takes effect once the rule is
/// enabled again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    MinLength(usize),
    MaxLength(usize),
    RequireLetters(CharSet),
    RequireNumbers(CharSet),
    RequireSymbols(CharSet),
    RequireNumbersOrSymbols { numbers: CharSet, symbols: CharSet },
    DisallowList {
        list: ListKind,
        in_password: bool,
        min_word_length: usize,
    },
}

impl Rule {
    pub fn id(&self) -> RuleId {
        match self {
            Rule::MinLength(_) => RuleId::MinLength,
            Rule::MaxLength(_) => RuleId::MaxLength,
            Rule::RequireLetters(_) => RuleId::RequireLetters,
            Rule::RequireNumbers(_) => RuleId::RequireNumbers,
            Rule::RequireSymbols(_) => RuleId::RequireSymbols,
            Rule::RequireNumbersOrSymbols { .. } => RuleId::RequireNumbersOrSymbols,
            Rule::DisallowList { list, .. } => RuleId::disallow(*list),
        }
    }
}
