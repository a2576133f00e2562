//! Word list loading.
//!
//! Bundled defaults ship inside the crate. Each slot can be overridden with
//! an external newline-separated file named by an environment variable.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::violation::ListKind;

pub const WORDS_PATH_ENV: &str = "PWD_POLICY_WORDS_PATH";
pub const NAMES_PATH_ENV: &str = "PWD_POLICY_NAMES_PATH";
pub const PASSWORDS_PATH_ENV: &str = "PWD_POLICY_PASSWORDS_PATH";

static DEFAULT_WORDS: &str = include_str!("../assets/words.txt");
static DEFAULT_NAMES: &str = include_str!("../assets/names.txt");
static DEFAULT_PASSWORDS: &str = include_str!("../assets/passwords.txt");

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty: {0}")]
    EmptyFile(PathBuf),
}

/// Name of the environment variable that overrides the list for `kind`.
pub fn env_var_for(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Words => WORDS_PATH_ENV,
        ListKind::Names => NAMES_PATH_ENV,
        ListKind::Passwords => PASSWORDS_PATH_ENV,
    }
}

/// Returns the override path for `kind`, if its environment variable is set.
pub fn list_path_from_env(kind: ListKind) -> Option<PathBuf> {
    std::env::var(env_var_for(kind)).ok().map(PathBuf::from)
}

/// Returns the bundled list for `kind`, trimmed and lowercased.
pub fn default_list(kind: ListKind) -> Vec<String> {
    let content = match kind {
        ListKind::Words => DEFAULT_WORDS,
        ListKind::Names => DEFAULT_NAMES,
        ListKind::Passwords => DEFAULT_PASSWORDS,
    };
    parse_list(content)
}

/// Loads a newline-separated list from `path`.
///
/// Lines are trimmed and lowercased; blank lines are dropped. File order is
/// kept since substring scans walk the list in order.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File holds no entries
pub fn load_list_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: FileNotFound {}", path.display());
        return Err(WordListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let list = parse_list(&content);

    if list.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: Empty file {}", path.display());
        return Err(WordListError::EmptyFile(path.to_path_buf()));
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Word list loaded: {} entries from {}", list.len(), path.display());

    Ok(list)
}

/// Loads the list for `kind` from its override file, or falls back to the
/// bundled default when the variable is unset.
pub fn list_from_env_or_default(kind: ListKind) -> Result<Vec<String>, WordListError> {
    match list_path_from_env(kind) {
        Some(path) => load_list_from_path(path),
        None => Ok(default_list(kind)),
    }
}

fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}
