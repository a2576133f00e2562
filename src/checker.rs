//! Password policy checker - rule registry and evaluation.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::candidate::Candidate;
use crate::charset::CharSet;
use crate::dictionary::{DEFAULT_MIN_ENTRY_LENGTH, DEFAULT_MIN_WORD_LENGTH, DictionaryMatcher};
use crate::rule::{Rule, RuleId};
use crate::sections::{
    SectionResult, disallow_list_section, letters_section, max_length_section,
    min_length_section, numbers_or_symbols_section, numbers_section, symbols_section,
};
use crate::violation::{ListKind, PolicyViolation};
use crate::wordlist::{self, WordListError};

pub const DEFAULT_ALLOWED_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DEFAULT_ALLOWED_NUMBERS: &str = "0123456789";
pub const DEFAULT_ALLOWED_SYMBOLS: &str = "_-!\"?$%^&*()+={}[]:;@'~#|<>,.?\\/ ";

/// Whether one rule passed during a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub succeeded: bool,
}

/// Everything a single check produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    violations: Vec<PolicyViolation>,
    outcomes: Vec<RuleOutcome>,
}

impl CheckReport {
    fn record(&mut self, rule: RuleId, result: SectionResult) {
        self.outcomes.push(RuleOutcome {
            rule,
            succeeded: result.is_none(),
        });
        if let Some(violation) = result {
            self.violations.push(violation);
        }
    }

    /// Violations in rule order. Empty when the password is accepted.
    pub fn violations(&self) -> &[PolicyViolation] {
        &self.violations
    }

    /// One outcome per rule that ran, in run order.
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// Outcome of `rule`, or `None` if it did not run.
    pub fn outcome(&self, rule: RuleId) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.rule == rule)
            .map(|o| o.succeeded)
    }

    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<PolicyViolation> {
        self.violations
    }
}

/// Configurable password policy.
///
/// Holds the length bounds, the allowed character classes, the three
/// disallow lists and the ordered set of enabled rules. [`Checker::check`]
/// runs every enabled rule once, in the order the rules were enabled, and
/// returns all violations found.
///
/// A `Checker` is a single-owner value. Embedders sharing one across
/// threads must wrap it in a lock themselves.
#[derive(Debug, Clone)]
pub struct Checker {
    min_length: usize,
    max_length: usize,
    allowed_letters: CharSet,
    allowed_numbers: CharSet,
    allowed_symbols: CharSet,
    words: DictionaryMatcher,
    names: DictionaryMatcher,
    passwords: DictionaryMatcher,
    rules: Vec<Rule>,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker {
    /// Creates a checker using the bundled word, name and password lists.
    pub fn new() -> Self {
        Self::with_lists(
            wordlist::default_list(ListKind::Words),
            wordlist::default_list(ListKind::Names),
            wordlist::default_list(ListKind::Passwords),
        )
    }

    /// Creates a checker whose default lists are supplied by the caller.
    ///
    /// The lists are indexed like the bundled defaults: entries shorter
    /// than [`DEFAULT_MIN_ENTRY_LENGTH`] are left out of exact matching.
    pub fn with_lists(words: Vec<String>, names: Vec<String>, passwords: Vec<String>) -> Self {
        let checker = Self {
            min_length: 0,
            max_length: 0,
            allowed_letters: CharSet::from(DEFAULT_ALLOWED_LETTERS),
            allowed_numbers: CharSet::from(DEFAULT_ALLOWED_NUMBERS),
            allowed_symbols: CharSet::from(DEFAULT_ALLOWED_SYMBOLS),
            words: DictionaryMatcher::new(words, DEFAULT_MIN_ENTRY_LENGTH),
            names: DictionaryMatcher::new(names, DEFAULT_MIN_ENTRY_LENGTH),
            passwords: DictionaryMatcher::new(passwords, DEFAULT_MIN_ENTRY_LENGTH),
            rules: Vec::new(),
        };

        #[cfg(feature = "tracing")]
        {
            for kind in ListKind::ALL {
                tracing::debug!(
                    "Default {} list indexed: {} entries, {} in trie",
                    kind,
                    checker.matcher(kind).entries().len(),
                    checker.matcher(kind).trie().len()
                );
            }
        }

        checker
    }

    /// Creates a checker whose default lists come from the files named by
    /// `PWD_POLICY_WORDS_PATH`, `PWD_POLICY_NAMES_PATH` and
    /// `PWD_POLICY_PASSWORDS_PATH`, falling back to the bundled list for
    /// each variable that is unset.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but its file is missing,
    /// unreadable or empty.
    pub fn from_env() -> Result<Self, WordListError> {
        let words = wordlist::list_from_env_or_default(ListKind::Words)?;
        let names = wordlist::list_from_env_or_default(ListKind::Names)?;
        let passwords = wordlist::list_from_env_or_default(ListKind::Passwords)?;
        Ok(Self::with_lists(words, names, passwords))
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Sets the minimum length. Zero disables the rule.
    pub fn set_min_length(&mut self, min_length: usize) {
        self.min_length = min_length;
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Sets the maximum length. Zero disables the rule.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    pub fn allowed_letters(&self) -> &CharSet {
        &self.allowed_letters
    }

    pub fn set_allowed_letters(&mut self, letters: impl Into<CharSet>) {
        self.allowed_letters = letters.into();
    }

    pub fn allowed_numbers(&self) -> &CharSet {
        &self.allowed_numbers
    }

    pub fn set_allowed_numbers(&mut self, numbers: impl Into<CharSet>) {
        self.allowed_numbers = numbers.into();
    }

    pub fn allowed_symbols(&self) -> &CharSet {
        &self.allowed_symbols
    }

    pub fn set_allowed_symbols(&mut self, symbols: impl Into<CharSet>) {
        self.allowed_symbols = symbols.into();
    }

    /// Normalized (lowercased) entries of a list.
    pub fn disallowed_list(&self, kind: ListKind) -> &[String] {
        self.matcher(kind).entries()
    }

    pub fn matcher(&self, kind: ListKind) -> &DictionaryMatcher {
        match kind {
            ListKind::Words => &self.words,
            ListKind::Names => &self.names,
            ListKind::Passwords => &self.passwords,
        }
    }

    fn matcher_mut(&mut self, kind: ListKind) -> &mut DictionaryMatcher {
        match kind {
            ListKind::Words => &mut self.words,
            ListKind::Names => &mut self.names,
            ListKind::Passwords => &mut self.passwords,
        }
    }

    /// Replaces a list, lowercasing its entries and rebuilding its trie.
    ///
    /// Entries shorter than `min_entry_length` are left out of exact
    /// matching but still take part in substring scans.
    pub fn set_disallowed_list<I, S>(&mut self, kind: ListKind, list: I, min_entry_length: usize)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = list.into_iter().map(Into::into).collect();
        let matcher = self.matcher_mut(kind);
        matcher.replace(entries, min_entry_length);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Disallowed {} list replaced: {} entries, {} in trie",
            kind,
            matcher.entries().len(),
            matcher.trie().len()
        );
    }

    pub fn set_disallowed_words<I, S>(&mut self, list: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_disallowed_list(ListKind::Words, list, 1);
    }

    pub fn set_disallowed_names<I, S>(&mut self, list: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_disallowed_list(ListKind::Names, list, 1);
    }

    pub fn set_disallowed_passwords<I, S>(&mut self, list: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_disallowed_list(ListKind::Passwords, list, 1);
    }

    /// Enabled rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_enabled(&self, id: RuleId) -> bool {
        self.rules.iter().any(|r| r.id() == id)
    }

    /// Registers `rule`. A rule with the same id is replaced in place and
    /// keeps its evaluation slot; a new rule goes last.
    fn enable(&mut self, rule: Rule) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("Rule enabled: {:?}", id);
    }

    fn disable(&mut self, id: RuleId) {
        self.rules.retain(|r| r.id() != id);

        #[cfg(feature = "tracing")]
        tracing::trace!("Rule disabled: {:?}", id);
    }

    fn toggle(&mut self, active: bool, rule: Rule) {
        if active {
            self.enable(rule);
        } else {
            self.disable(rule.id());
        }
    }

    /// Requires at least one character from the current allowed letters.
    pub fn require_letters(&mut self, active: bool) {
        let rule = Rule::RequireLetters(self.allowed_letters.clone());
        self.toggle(active, rule);
    }

    /// Requires at least one character from the current allowed numbers.
    pub fn require_numbers(&mut self, active: bool) {
        let rule = Rule::RequireNumbers(self.allowed_numbers.clone());
        self.toggle(active, rule);
    }

    /// Requires at least one character from the current allowed symbols.
    pub fn require_symbols(&mut self, active: bool) {
        let rule = Rule::RequireSymbols(self.allowed_symbols.clone());
        self.toggle(active, rule);
    }

    /// Requires at least one allowed number or allowed symbol.
    pub fn require_numbers_or_symbols(&mut self, active: bool) {
        let rule = Rule::RequireNumbersOrSymbols {
            numbers: self.allowed_numbers.clone(),
            symbols: self.allowed_symbols.clone(),
        };
        self.toggle(active, rule);
    }

    /// Rejects passwords matching the `list` disallow list.
    ///
    /// With `in_password` the password fails when it contains any entry of
    /// at least `min_word_length` characters (default
    /// [`DEFAULT_MIN_WORD_LENGTH`]). Without it, the password fails only
    /// when it is itself an entry.
    pub fn disallow_list(
        &mut self,
        list: ListKind,
        active: bool,
        in_password: bool,
        min_word_length: Option<usize>,
    ) {
        let rule = Rule::DisallowList {
            list,
            in_password,
            min_word_length: min_word_length.unwrap_or(DEFAULT_MIN_WORD_LENGTH),
        };
        self.toggle(active, rule);
    }

    pub fn disallow_words(&mut self, active: bool, in_password: bool, min_word_length: Option<usize>) {
        self.disallow_list(ListKind::Words, active, in_password, min_word_length);
    }

    pub fn disallow_names(&mut self, active: bool, in_password: bool, min_word_length: Option<usize>) {
        self.disallow_list(ListKind::Names, active, in_password, min_word_length);
    }

    pub fn disallow_passwords(
        &mut self,
        active: bool,
        in_password: bool,
        min_word_length: Option<usize>,
    ) {
        self.disallow_list(ListKind::Passwords, active, in_password, min_word_length);
    }

    /// Keeps the length rules registered exactly when their bound is set.
    /// A rule that stays registered keeps its place and picks up the
    /// current bound.
    fn sync_length_rules(&mut self) {
        let (min, max) = (self.min_length, self.max_length);
        self.sync_bound(RuleId::MinLength, min, Rule::MinLength);
        self.sync_bound(RuleId::MaxLength, max, Rule::MaxLength);
    }

    fn sync_bound(&mut self, id: RuleId, bound: usize, make: fn(usize) -> Rule) {
        if bound == 0 {
            if self.is_enabled(id) {
                self.disable(id);
            }
            return;
        }
        self.enable(make(bound));
    }

    fn run_rule(&self, rule: &Rule, password: &SecretString) -> SectionResult {
        match rule {
            Rule::MinLength(min) => min_length_section(password, *min),
            Rule::MaxLength(max) => max_length_section(password, *max),
            Rule::RequireLetters(letters) => letters_section(password, letters),
            Rule::RequireNumbers(numbers) => numbers_section(password, numbers),
            Rule::RequireSymbols(symbols) => symbols_section(password, symbols),
            Rule::RequireNumbersOrSymbols { numbers, symbols } => {
                numbers_or_symbols_section(password, numbers, symbols)
            }
            Rule::DisallowList {
                list,
                in_password,
                min_word_length,
            } => disallow_list_section(
                password,
                self.matcher(*list),
                *list,
                *in_password,
                *min_word_length,
            ),
        }
    }

    /// Runs every enabled rule against `password` and reports per-rule
    /// outcomes along with the violations.
    pub fn check_report(&mut self, password: impl Into<Candidate>) -> CheckReport {
        let candidate = password.into();
        self.sync_length_rules();

        let mut report = CheckReport::default();
        for rule in &self.rules {
            let result = self.run_rule(rule, candidate.as_secret());
            report.record(rule.id(), result);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password checked: {} rules, {} violations",
            report.outcomes.len(),
            report.violations.len()
        );

        report
    }

    /// Runs every enabled rule against `password`.
    ///
    /// Returns the violations in rule order; an empty vector means the
    /// password is accepted.
    pub fn check(&mut self, password: impl Into<Candidate>) -> Vec<PolicyViolation> {
        self.check_report(password).into_violations()
    }

    /// Checks `password` and sends the report through `tx`.
    #[cfg(feature = "async")]
    pub async fn check_tx(
        &mut self,
        password: impl Into<Candidate>,
        tx: mpsc::Sender<CheckReport>,
    ) {
        let report = self.check_report(password);

        if let Err(_e) = tx.send(report).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password check report: {}", _e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_checker() -> Checker {
        Checker::with_lists(
            vec!["the".into(), "this".into(), "some".into()],
            vec!["aaden".into(), "aaban".into()],
            vec!["password".into(), "qwerty".into()],
        )
    }

    #[test]
    fn test_defaults() {
        let checker = Checker::new();
        assert_eq!(checker.min_length(), 0);
        assert_eq!(checker.max_length(), 0);
        assert!(checker.allowed_symbols().contains(' '));
        assert!(checker.allowed_numbers().contains('7'));
        assert!(checker.rules().is_empty());
        assert_eq!(checker.matcher(ListKind::Words).min_entry_length(), DEFAULT_MIN_ENTRY_LENGTH);
    }

    #[test]
    fn test_no_rules_accepts_anything() {
        let mut checker = Checker::new();
        assert!(checker.check(1).is_empty());
        assert!(checker.check("hjdksa hkj dshkjh38 j dsjjk").is_empty());
    }

    #[test]
    fn test_length_rules_follow_configuration() {
        let mut checker = small_checker();
        checker.set_min_length(8);
        checker.set_max_length(12);
        assert_eq!(checker.check("short"), vec![PolicyViolation::TooShort { min: 8 }]);
        assert_eq!(
            checker.check("way too long to pass"),
            vec![PolicyViolation::TooLong { max: 12 }]
        );
        assert!(checker.check("0123456789ab").is_empty());
        assert!(checker.is_enabled(RuleId::MinLength));

        checker.set_min_length(0);
        checker.set_max_length(0);
        assert!(checker.check("short").is_empty());
        assert!(!checker.is_enabled(RuleId::MinLength));
        assert!(!checker.is_enabled(RuleId::MaxLength));
    }

    #[test]
    fn test_length_rule_keeps_position_and_picks_up_new_bound() {
        let mut checker = small_checker();
        checker.set_min_length(4);
        checker.check("x");
        checker.require_letters(true);
        checker.set_min_length(10);
        checker.check("x");

        assert_eq!(checker.rules()[0], Rule::MinLength(10));
        assert_eq!(checker.rules()[1].id(), RuleId::RequireLetters);
    }

    #[test]
    fn test_toggle_off_removes_rule() {
        let mut checker = small_checker();
        checker.require_symbols(true);
        assert!(checker.is_enabled(RuleId::RequireSymbols));
        checker.require_symbols(false);
        assert!(!checker.is_enabled(RuleId::RequireSymbols));
        assert!(!checker.check("abc123").contains(&PolicyViolation::MissingSymbols));
    }

    #[test]
    fn test_reenabling_keeps_position_and_rebinds() {
        let mut checker = small_checker();
        checker.require_numbers(true);
        checker.require_letters(true);
        checker.set_allowed_numbers("1");
        checker.require_numbers(true);

        let ids: Vec<RuleId> = checker.rules().iter().map(Rule::id).collect();
        assert_eq!(ids, vec![RuleId::RequireNumbers, RuleId::RequireLetters]);
        assert_eq!(checker.rules()[0], Rule::RequireNumbers(CharSet::from("1")));
        assert_eq!(checker.check("abc2"), vec![PolicyViolation::MissingNumbers]);
        assert_eq!(
            checker.check("!!!"),
            vec![PolicyViolation::MissingNumbers, PolicyViolation::MissingLetters]
        );
    }

    #[test]
    fn test_disable_then_enable_moves_rule_last() {
        let mut checker = small_checker();
        checker.require_numbers(true);
        checker.require_letters(true);
        checker.require_numbers(false);
        checker.require_numbers(true);

        assert_eq!(
            checker.check("!!!"),
            vec![PolicyViolation::MissingLetters, PolicyViolation::MissingNumbers]
        );
    }

    #[test]
    fn test_character_rules_bind_allowed_set_at_toggle_time() {
        let mut checker = small_checker();
        checker.require_numbers(true);
        checker.set_allowed_numbers("1");
        // Still bound to the default digits until re-enabled.
        assert!(checker.check("abc2").is_empty());
    }

    #[test]
    fn test_no_short_circuit_all_violations_reported_in_order() {
        let mut checker = small_checker();
        checker.require_numbers(true);
        checker.require_symbols(true);
        checker.disallow_passwords(true, false, None);
        checker.set_min_length(10);

        assert_eq!(
            checker.check("password"),
            vec![
                PolicyViolation::MissingNumbers,
                PolicyViolation::MissingSymbols,
                PolicyViolation::DisallowedExact { list: ListKind::Passwords },
                PolicyViolation::TooShort { min: 10 },
            ]
        );
    }

    #[test]
    fn test_each_check_starts_clean() {
        let mut checker = small_checker();
        checker.require_numbers(true);
        assert_eq!(checker.check("abc").len(), 1);
        assert!(checker.check("abc1").is_empty());
    }

    #[test]
    fn test_report_outcomes() {
        let mut checker = small_checker();
        checker.require_letters(true);
        checker.require_numbers(true);

        let report = checker.check_report("letters");
        assert!(!report.is_accepted());
        assert_eq!(report.outcome(RuleId::RequireLetters), Some(true));
        assert_eq!(report.outcome(RuleId::RequireNumbers), Some(false));
        assert_eq!(report.outcome(RuleId::RequireSymbols), None);
        assert_eq!(report.outcomes().len(), 2);
        assert_eq!(report.violations(), &[PolicyViolation::MissingNumbers]);
    }

    #[test]
    fn test_disallow_exact_and_substring_are_exclusive() {
        let mut checker = small_checker();
        checker.disallow_words(true, true, None);
        assert_eq!(
            checker.check("this"),
            vec![PolicyViolation::DisallowedSubstring { list: ListKind::Words }]
        );
        // "the" is below the default word length; the exact lookup does
        // not run in substring mode.
        assert!(checker.check("the").is_empty());

        checker.disallow_words(true, false, None);
        assert_eq!(
            checker.check("the"),
            vec![PolicyViolation::DisallowedExact { list: ListKind::Words }]
        );
    }

    #[test]
    fn test_disallow_passwords_defaults_to_word_length_four() {
        let mut checker = small_checker();
        checker.set_disallowed_passwords(["abc", "abcd"]);
        checker.disallow_passwords(true, true, None);
        assert_eq!(
            checker.rules()[0],
            Rule::DisallowList {
                list: ListKind::Passwords,
                in_password: true,
                min_word_length: DEFAULT_MIN_WORD_LENGTH,
            }
        );
        assert!(checker.check("xxabcxx").is_empty());
        assert!(!checker.check("xxabcdxx").is_empty());
    }

    #[test]
    fn test_retoggle_replaces_parameters() {
        let mut checker = small_checker();
        checker.disallow_words(true, true, None);
        assert!(checker.check("_-the-_").is_empty());
        checker.disallow_words(true, true, Some(2));
        assert_eq!(
            checker.check("_-the-_"),
            vec![PolicyViolation::DisallowedSubstring { list: ListKind::Words }]
        );
        assert_eq!(checker.rules().len(), 1);
    }

    #[test]
    fn test_set_disallowed_list_rebuilds_matcher() {
        let mut checker = small_checker();
        checker.set_disallowed_names(vec!["Dan", "joe"]);
        assert_eq!(checker.disallowed_list(ListKind::Names), &["dan".to_string(), "joe".to_string()]);
        assert_eq!(checker.matcher(ListKind::Names).min_entry_length(), 1);

        checker.disallow_names(true, false, None);
        assert!(!checker.check("Joe").is_empty());
        assert!(checker.check("aaden").is_empty());
    }

    #[test]
    fn test_set_disallowed_list_with_min_entry_length() {
        let mut checker = small_checker();
        checker.set_disallowed_list(ListKind::Words, ["ab", "abc"], 3);
        checker.disallow_words(true, false, None);
        assert!(checker.check("ab").is_empty());
        assert!(!checker.check("ABC").is_empty());
    }

    #[test]
    fn test_malformed_bounds_reject_everything() {
        let mut checker = small_checker();
        checker.set_min_length(10);
        checker.set_max_length(5);
        for pwd in ["abc", "abcdefg", "abcdefghijkl"] {
            assert!(!checker.check(pwd).is_empty());
        }
    }
}
