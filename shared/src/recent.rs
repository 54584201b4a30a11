//! Recent-search history, persisted as a single JSON file.
//!
//! The product keeps the last few search terms under one key/value entry;
//! here that entry is a JSON array in `recent_searches.json` under the data
//! directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Maximum number of remembered search terms.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// File name under the data directory.
pub const RECENT_SEARCHES_FILE: &str = "recent_searches.json";

/// Newest-first search history, capped at [`MAX_RECENT_SEARCHES`].
#[derive(Debug)]
pub struct RecentSearchStore {
    path: PathBuf,
    terms: Vec<String>,
}

impl RecentSearchStore {
    /// Open the store under `data_dir`, loading any existing history.
    /// A missing file is just an empty history.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(RECENT_SEARCHES_FILE);
        let terms = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("corrupt recent-search file {}", path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", path.display()))
            },
        };
        Ok(Self { path, terms })
    }

    /// Current history, newest first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Record a term at the front of the history and persist.
    ///
    /// Blank terms and terms already present are ignored. Returns whether
    /// the history changed.
    pub fn record(&mut self, term: &str) -> Result<bool> {
        let term = term.trim();
        if term.is_empty() || self.terms.iter().any(|existing| existing == term) {
            return Ok(false);
        }

        self.terms.insert(0, term.to_string());
        self.terms.truncate(MAX_RECENT_SEARCHES);
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string(&self.terms).context("serialize recent searches")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = RecentSearchStore::open(dir.path()).expect("open");
        assert!(store.terms().is_empty());
    }

    #[test]
    fn records_newest_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = RecentSearchStore::open(dir.path()).expect("open");

        assert!(store.record("quantum").expect("record"));
        assert!(store.record("crispr").expect("record"));
        assert_eq!(store.terms(), ["crispr", "quantum"]);
    }

    #[test]
    fn duplicate_and_blank_terms_are_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = RecentSearchStore::open(dir.path()).expect("open");

        assert!(store.record("fusion").expect("record"));
        assert!(!store.record("fusion").expect("record"));
        assert!(!store.record("   ").expect("record"));
        assert!(!store.record("").expect("record"));
        assert_eq!(store.terms(), ["fusion"]);
    }

    #[test]
    fn history_is_capped_at_five() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = RecentSearchStore::open(dir.path()).expect("open");

        for term in ["one", "two", "three", "four", "five", "six"] {
            store.record(term).expect("record");
        }
        assert_eq!(store.terms(), ["six", "five", "four", "three", "two"]);
    }

    #[test]
    fn history_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let mut store = RecentSearchStore::open(dir.path()).expect("open");
            store.record("neural interfaces").expect("record");
            store.record("web3").expect("record");
        }

        let reopened = RecentSearchStore::open(dir.path()).expect("reopen");
        assert_eq!(reopened.terms(), ["web3", "neural interfaces"]);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(RECENT_SEARCHES_FILE), "not json").expect("write");
        assert!(RecentSearchStore::open(dir.path()).is_err());
    }
}
